use leptos::prelude::*;
use tracing::debug;

use crate::app::SessionContext;
use crate::assets::SoundEffect;
use crate::components::about_modal::AboutModal;
use crate::components::cemetery::Cemetery;
use crate::components::edit_modal::EditModal;
use crate::components::edit_panel::EditPanel;
use crate::components::floating_card::FloatingCards;
use crate::components::login_modal::LoginModal;
use crate::components::pick_card::PickCard;
use crate::components::profile_modal::ProfileModal;
use crate::components::ticker::Ticker;
use crate::components::toolbar::Toolbar;
use crate::motion::MotionContext;
use crate::timers;

#[component]
pub fn RevealPage() -> impl IntoView {
    let SessionContext { session, config } = expect_context::<SessionContext>();
    let MotionContext { reduced } = expect_context::<MotionContext>();

    let (sound_url, volume, pick_delay_ms) = config.with_value(|c| {
        (
            c.assets.sound_url(),
            c.assets.sound_volume,
            c.loading.pick_delay_ms,
        )
    });
    let sound = StoredValue::new_local(match sound_url {
        Some(url) => SoundEffect::load(&url, volume),
        None => SoundEffect::silent(),
    });

    // Highlight a random card, then open its profile after the pick delay
    let open_random = Callback::new(move |_: ()| {
        let Some(id) = session.try_update(|s| s.begin_pick()).flatten() else {
            return;
        };
        debug!("Revealing card {} in {}ms", id, pick_delay_ms);
        timers::set_timeout(pick_delay_ms, move || {
            if session.try_update(|s| s.finish_pick()).flatten().is_none() {
                return;
            }
            let play = session.with_untracked(|s| s.should_play_sound(reduced.get_untracked()));
            if play {
                sound.with_value(|s| s.play());
            }
        });
    });

    view! {
        <div class="reveal-page">
            <Ticker />
            <Toolbar />
            <FloatingCards />

            <Show when=move || session.with(|s| s.picking().is_some())>
                <div class="picking-overlay">
                    <div class="picking-text" class:pulse=move || !reduced.get()>
                        "Picking Student"
                    </div>
                </div>
            </Show>

            <main class="content">
                <header class="page-header">
                    <h1>"\u{1F480} FINAL YEAR CS \u{1F480}"</h1>
                    <p class="page-description">
                        "Your friend could be here, or better, you might find yourself"
                    </p>
                    <Show when=move || session.with(|s| s.origin().is_some_and(|o| o.is_fallback()))>
                        <p class="fallback-note">"Showing sample profiles"</p>
                    </Show>
                    <PickCard on_pick=open_random />
                </header>
                <EditPanel />
                <Cemetery />
            </main>

            <LoginModal />
            <ProfileModal />
            <EditModal />
            <AboutModal />
        </div>
    }
}
