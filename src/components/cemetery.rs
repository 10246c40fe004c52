use leptos::prelude::*;

use crate::app::SessionContext;

/// Opened cards in the order they were opened. Clicking one reopens its profile.
#[component]
pub fn Cemetery() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let opened = move || {
        session.with(|s| {
            s.deck()
                .opened_in_order()
                .iter()
                .map(|c| c.id())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || session.with(|s| s.deck().opened_count() > 0)>
            <section class="cemetery">
                <h2>
                    {move || format!(
                        "\u{26B0}\u{FE0F} Cemetery of Shattered Dreams ({}) \u{26B0}\u{FE0F}",
                        session.with(|s| s.deck().opened_count()),
                    )}
                </h2>
                <div class="cemetery-grid">
                    <For
                        each=opened
                        key=|id| *id
                        children=move |id| view! {
                            <div
                                class="tombstone"
                                on:click=move |_| {
                                    session.update(|s| {
                                        s.select(id);
                                    });
                                }
                            >
                                "\u{1F480}"
                            </div>
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
