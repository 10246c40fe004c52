use cardreveal_core::ProfileRecord;
use leptos::prelude::*;

use crate::app::SessionContext;
use crate::motion::MotionContext;

/// Overlay for the selected profile. Closing it counts the card as opened.
#[component]
pub fn ProfileModal() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let selected = Memo::new(move |_| session.with(|s| s.selected()));

    move || {
        selected.get().and_then(|id| {
            session
                .with_untracked(|s| s.deck().get(id).map(|c| c.record.clone()))
                .map(|record| view! { <ProfileDetails record=record /> })
        })
    }
}

#[component]
fn ProfileDetails(record: ProfileRecord) -> impl IntoView {
    let SessionContext { session, config } = expect_context::<SessionContext>();
    let MotionContext { reduced } = expect_context::<MotionContext>();

    let close = move |_| {
        session.update(|s| {
            s.close_selected();
        });
    };

    let image = config.with_value(|c| c.assets.image_url(&record.image));
    let tags = record.tags.clone();
    let extra = record.extra.clone().filter(|e| !e.is_empty());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div
                class="modal profile-modal"
                class:pop-in=move || !reduced.get()
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <div class="profile-heading">
                        <h3 class="profile-name">{record.name.clone()}</h3>
                        <span class="profile-role">{record.role.clone()}</span>
                    </div>
                    <button class="btn-icon" on:click=close title="Close">"\u{2715}"</button>
                </div>

                <img
                    class="profile-image"
                    src=image
                    alt=record.name.clone()
                    loading="lazy"
                />

                <p class="profile-bio">{record.bio.clone()}</p>

                {(!tags.is_empty()).then(|| view! {
                    <div class="profile-tags">
                        {tags
                            .into_iter()
                            .map(|tag| view! { <span class="tag">{tag}</span> })
                            .collect_view()}
                    </div>
                })}

                {extra.map(|extra| {
                    view! {
                        <div class="profile-extra">
                            {extra.location.map(|loc| view! {
                                <div class="extra-row">
                                    <span>"\u{1FAA6}"</span>
                                    <span class="extra-value">{loc}</span>
                                </div>
                            })}
                            {extra.contact.map(|contact| view! {
                                <div class="extra-row">
                                    <span>"\u{1F480}"</span>
                                    <span class="extra-value">{contact}</span>
                                </div>
                            })}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
