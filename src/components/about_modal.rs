use leptos::prelude::*;

use crate::app::SessionContext;

#[component]
pub fn AboutModal() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let close = move |_| session.update(|s| s.close_about());

    view! {
        <Show when=move || session.with(|s| s.show_about())>
            <div class="modal-backdrop" on:click=close>
                <div class="modal about-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"About this page"</h3>
                        <button class="btn-icon" on:click=close title="Close">"\u{2715}"</button>
                    </div>
                    <p class="about-lead">"If you're not on the page yet, you will be soon."</p>
                    <p class="about-note">
                        "Pick the coffin card to reveal a random classmate. Every revealed card ends up in the cemetery below."
                    </p>
                </div>
            </div>
        </Show>
    }
}
