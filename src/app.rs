use cardreveal_core::roster;
use cardreveal_core::{default_config, AppConfig, FetchOutcome, Session};
use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::assets;
use crate::components::loading_screen::LoadingScreen;
use crate::motion::{apply_motion, watch_reduced_motion, MotionContext};
use crate::pages::reveal::RevealPage;
use crate::timers;

/// Page state shared with every component.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub config: StoredValue<AppConfig>,
}

#[component]
pub fn App() -> impl IntoView {
    let config = default_config();
    let min_duration_ms = config.loading.min_duration_ms;
    let max_wait_ms = config.loading.max_wait_ms;
    let session = RwSignal::new(Session::new(&config, assets::random_seed()));
    let config = StoredValue::new(config);
    provide_context(SessionContext { session, config });

    let (reduced, set_reduced) = signal(false);
    provide_context(MotionContext { reduced });
    watch_reduced_motion(set_reduced);

    // Apply motion preference to DOM whenever it changes
    Effect::new(move |_| {
        apply_motion(reduced.get());
    });

    // Load the roster once on mount
    Effect::new(move |_| {
        let (url, roster_config, base_path) = config.with_value(|c| {
            (
                c.assets.roster_url(),
                c.roster.clone(),
                c.assets.base_path.clone(),
            )
        });
        spawn_local(async move {
            let outcome = assets::fetch_roster(&url).await;
            let roster = roster::resolve(outcome, &roster_config, &base_path);
            session.update(|s| {
                s.install_roster(roster);
            });
        });
    });

    // A stalled request must not hold the loading screen forever
    timers::set_timeout(max_wait_ms, move || {
        if session.with_untracked(|s| s.roster_ready()) {
            return;
        }
        warn!("Roster request still pending after {}ms", max_wait_ms);
        let fallback = config.with_value(|c| {
            roster::resolve(
                FetchOutcome::Failed("roster request timed out".to_string()),
                &c.roster,
                &c.assets.base_path,
            )
        });
        session.update(|s| {
            s.install_roster(fallback);
        });
    });

    timers::set_timeout(min_duration_ms, move || {
        info!("Minimum loading time elapsed");
        session.update(|s| s.mark_min_elapsed());
    });

    view! {
        <Show
            when=move || session.with(|s| s.is_loading())
            fallback=|| view! { <RevealPage /> }
        >
            <LoadingScreen />
        </Show>
    }
}
