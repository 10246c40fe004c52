use cardreveal_core::ticker::{default_ticker, headline_layout, LaneConfig, Rotator};
use leptos::prelude::*;

use crate::motion::MotionContext;
use crate::timers;

/// Background text lanes plus the scrolling headline strip.
#[component]
pub fn Ticker() -> impl IntoView {
    let ticker = default_ticker();

    view! {
        {ticker
            .lanes
            .into_iter()
            .map(|lane| view! { <TickerLane lane=lane /> })
            .collect_view()}
        <HeadlineStrip headlines=ticker.headlines />
    }
}

#[component]
fn TickerLane(lane: LaneConfig) -> impl IntoView {
    let MotionContext { reduced } = expect_context::<MotionContext>();
    let rotator = RwSignal::new(Rotator::new(lane.lines));

    timers::use_interval(lane.period_ms, move || {
        rotator.update(|r| {
            r.advance();
        });
    });

    let class = lane.class;
    view! {
        <div class="lane-track">
            <div
                class=class
                class:sliding=move || !reduced.get()
                class:still=move || reduced.get()
                style:top=format!("{}%", lane.top_percent)
                style:animation-duration=format!("{}s", lane.duration_s)
            >
                {move || rotator.with(|r| r.current().unwrap_or_default().to_string())}
            </div>
        </div>
    }
}

#[component]
fn HeadlineStrip(headlines: Vec<String>) -> impl IntoView {
    let MotionContext { reduced } = expect_context::<MotionContext>();

    view! {
        <div class="headline-strip">
            {headlines
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    let layout = headline_layout(i);
                    view! {
                        <div
                            class="headline"
                            class:sliding=move || !reduced.get()
                            style:top=format!("{}%", layout.top_percent)
                            style:animation-duration=format!("{}s", layout.duration_s)
                            style:animation-delay=format!("{}s", layout.delay_s)
                        >
                            {format!("\u{1F525} {} \u{1F525}", text)}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
