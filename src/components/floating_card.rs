use cardreveal_core::ScreenPosition;
use leptos::prelude::*;

use crate::app::SessionContext;
use crate::motion::MotionContext;

/// All cards scattered around the page edges.
#[component]
pub fn FloatingCards() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();

    // Re-render a card only when its position changes (reshuffle)
    let layout = move || {
        session.with(|s| {
            s.deck()
                .cards()
                .iter()
                .map(|c| (c.id(), c.position))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <For
            each=layout
            key=|(id, pos)| (*id, pos.x.to_bits(), pos.y.to_bits())
            children=|(id, position)| view! { <FloatingCard id=id position=position /> }
        />
    }
}

#[component]
pub fn FloatingCard(id: u32, position: ScreenPosition) -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let MotionContext { reduced } = expect_context::<MotionContext>();

    let (left, top) = position.display_clamped();
    let is_picking = move || session.with(|s| s.picking() == Some(id));

    view! {
        <div
            class="floating-card"
            class:floating=move || !reduced.get()
            style:left=format!("{}%", left)
            style:top=format!("{}%", top)
            style:animation-delay=format!("{}s", id as f64 * 0.2)
            on:click=move |_| {
                session.update(|s| {
                    s.select(id);
                });
            }
        >
            <div class="floating-card-face">
                {move || {
                    if is_picking() {
                        view! { <span class="picking-label">"Picking Student"</span> }.into_any()
                    } else {
                        view! { <span>"\u{1F393}"</span> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
