use leptos::prelude::*;

use crate::motion::MotionContext;

const BAR_COUNT: usize = 10;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let MotionContext { reduced } = expect_context::<MotionContext>();

    view! {
        <div class="loading-screen">
            <div class="loading-title" class:pulse=move || !reduced.get()>
                "CS HONOR STUDENTS"
            </div>
            {(0..BAR_COUNT)
                .map(|i| {
                    view! {
                        <div
                            class="loading-bar"
                            class:animated=move || !reduced.get()
                            style:left=format!("{}%", i * 10)
                            style:animation-delay=format!("{}s", 1.0 + i as f64 * 0.1)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
