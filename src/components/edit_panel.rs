use leptos::prelude::*;

use crate::app::SessionContext;

const BIO_PREVIEW_CHARS: usize = 50;

/// Admin-only grid listing every profile with an edit button.
#[component]
pub fn EditPanel() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();

    let rows = move || {
        session.with(|s| {
            s.deck()
                .cards()
                .iter()
                .map(|c| {
                    (
                        c.id(),
                        c.record.name.clone(),
                        c.record.role.clone(),
                        c.record.bio_preview(BIO_PREVIEW_CHARS),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || session.with(|s| s.is_admin())>
            <section class="edit-panel">
                <h2>"\u{1F527} Profile Editor"</h2>
                <div class="edit-grid">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(id, name, role, bio)| {
                                view! {
                                    <div class="edit-card">
                                        <div class="edit-card-header">
                                            <h3>{name}</h3>
                                            <button
                                                class="btn-icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    session.update(|s| {
                                                        s.begin_edit(id);
                                                    });
                                                }
                                            >
                                                "\u{270E}"
                                            </button>
                                        </div>
                                        <p class="edit-card-role">{role}</p>
                                        <p class="edit-card-bio">{bio}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
