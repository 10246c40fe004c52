use leptos::prelude::*;
use tracing::info;

use crate::app::SessionContext;

#[component]
pub fn Toolbar() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let is_admin = move || session.with(|s| s.is_admin());

    view! {
        <div class="toolbar toolbar-left">
            <button class="btn btn-about" on:click=move |_| session.update(|s| s.open_about())>
                "About"
            </button>
        </div>

        <div class="toolbar toolbar-right">
            <Show
                when=is_admin
                fallback=move || view! {
                    <button class="btn-tool" on:click=move |_| session.update(|s| s.open_login())>
                        "Admin"
                    </button>
                }
            >
                <button
                    class="btn-tool btn-logout"
                    title="Logout"
                    on:click=move |_| {
                        session.update(|s| s.logout());
                        info!("Admin mode disabled");
                    }
                >
                    "Logout"
                </button>
            </Show>
            <button
                class="btn-tool"
                title="Toggle sound"
                on:click=move |_| {
                    session.update(|s| {
                        s.toggle_sound();
                    });
                }
            >
                {move || if session.with(|s| s.sound_enabled()) { "\u{1F50A}" } else { "\u{1F507}" }}
            </button>
            <button
                class="btn-tool"
                title="Reset all cards"
                on:click=move |_| session.update(|s| s.reset())
            >
                "\u{21BA}"
            </button>
        </div>
    }
}
