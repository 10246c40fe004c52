use leptos::prelude::*;

use crate::app::SessionContext;
use crate::motion::MotionContext;

/// The central card. Clicking it starts a random pick unless every card is open.
#[component]
pub fn PickCard(#[prop(into)] on_pick: Callback<()>) -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let MotionContext { reduced } = expect_context::<MotionContext>();

    let remaining = move || session.with(|s| s.deck().remaining());
    let exhausted = move || session.with(|s| s.deck().is_exhausted());

    view! {
        <div
            class="pick-card"
            class:hoverable=move || !reduced.get() && !exhausted()
            class:exhausted=exhausted
            on:click=move |_| {
                if !exhausted() {
                    on_pick.run(());
                }
            }
        >
            <div class="pick-icon">"\u{26B0}\u{FE0F}"</div>
            <div class="pick-count">{remaining}</div>
            <div class="pick-label">"Broken Dreams"</div>
            <div class="pick-progress">
                {move || session.with(|s| {
                    format!("Despair Level: {} / {} Students", s.deck().opened_count(), s.deck().len())
                })}
            </div>
            <Show when=exhausted>
                <div class="pick-done">"\u{1F525} TOTAL ANNIHILATION COMPLETE! \u{1F525}"</div>
            </Show>
        </div>
    }
}
