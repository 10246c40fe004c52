//! `setTimeout`/`setInterval` wrappers tied to the reactive owner.

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Shortest interval period; keeps a zero period from spinning.
const MIN_INTERVAL_MS: u32 = 50;

fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

fn interval_ms(period_ms: u32) -> i32 {
    timeout_ms(period_ms.max(MIN_INTERVAL_MS))
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_ms(delay_ms),
    ) {
        warn!("Failed to schedule timeout: {:?}", e);
    }
}

/// Run `tick` every `period_ms` until the current component is cleaned up.
pub fn use_interval(period_ms: u32, tick: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(tick);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        interval_ms(period_ms),
    ) {
        Ok(interval_id) => {
            // Owned by the component; dropped with it after the interval is cleared.
            let _callback = StoredValue::new_local(callback);
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(interval_id);
                }
            });
        }
        Err(e) => warn!("Failed to start interval: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_saturates() {
        assert_eq!(timeout_ms(1500), 1500);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
        assert_eq!(timeout_ms(i32::MAX as u32 + 1), i32::MAX);
    }

    #[test]
    fn test_interval_has_floor() {
        assert_eq!(interval_ms(0), MIN_INTERVAL_MS as i32);
        assert_eq!(interval_ms(3000), 3000);
        assert_eq!(interval_ms(u32::MAX), i32::MAX);
    }
}
