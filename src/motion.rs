use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy)]
pub struct MotionContext {
    pub reduced: ReadSignal<bool>,
}

/// Mirror the preference onto `<html data-motion>` so CSS can drop animations.
/// - `true` → `data-motion="reduced"`
/// - `false` → attribute removed
pub fn apply_motion(reduced: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                if reduced {
                    let _ = html.set_attribute("data-motion", "reduced");
                } else {
                    let _ = html.remove_attribute("data-motion");
                }
            }
        }
    }
}

/// Track `prefers-reduced-motion` for the lifetime of the current component.
pub fn watch_reduced_motion(set_reduced: WriteSignal<bool>) {
    let Some(query) = web_sys::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
    else {
        return;
    };
    set_reduced.set(query.matches());

    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
        debug!("prefers-reduced-motion changed: {}", ev.matches());
        set_reduced.set(ev.matches());
    });
    if query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    let handle = StoredValue::new_local((query, listener));
    on_cleanup(move || {
        handle.try_with_value(|(query, listener)| {
            let _ = query
                .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        });
    });
}
