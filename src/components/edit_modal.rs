use cardreveal_core::{ProfileDraft, ProfileRecord};
use leptos::prelude::*;
use tracing::info;

use crate::app::SessionContext;

/// Edit form for the profile chosen in the admin panel.
#[component]
pub fn EditModal() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let editing = Memo::new(move |_| session.with(|s| s.editing()));

    move || {
        editing.get().and_then(|id| {
            session
                .with_untracked(|s| s.deck().get(id).map(|c| c.record.clone()))
                .map(|record| view! { <EditForm record=record /> })
        })
    }
}

#[component]
fn EditForm(record: ProfileRecord) -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let id = record.id;
    let draft = RwSignal::new(ProfileDraft::from_record(&record));

    let save = move || {
        let record = draft.get_untracked().into_record(id);
        if session.try_update(|s| s.save_edit(record)).unwrap_or(false) {
            info!("Saved edits to profile {}", id);
        }
    };
    let cancel = move |_| session.update(|s| s.cancel_edit());

    view! {
        <div class="modal-backdrop" on:click=cancel>
            <div class="modal edit-modal" on:click=|ev| ev.stop_propagation()>
                <h3>"Edit Profile"</h3>
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }>
                    <label>"Name"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <label>"Role"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.role.clone())
                        on:input=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                    />
                    <label>"Bio"</label>
                    <textarea
                        class="input"
                        rows="4"
                        prop:value=move || draft.with(|d| d.bio.clone())
                        on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                    ></textarea>
                    <label>"Image"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.image.clone())
                        on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                    />
                    <label>"Tags (comma separated)"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.tags.clone())
                        on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                    />
                    <label>"Location"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.location.clone())
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                    />
                    <label>"Contact"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || draft.with(|d| d.contact.clone())
                        on:input=move |ev| draft.update(|d| d.contact = event_target_value(&ev))
                    />
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Save"</button>
                        <button type="button" class="btn btn-secondary" on:click=cancel>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
