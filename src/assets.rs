use cardreveal_core::FetchOutcome;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, Response};

fn js_error(err: JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Roster request --

/// GET the roster and classify the result. Never fails; errors become
/// `FetchOutcome::Failed`.
pub async fn fetch_roster(url: &str) -> FetchOutcome {
    match request_json(url).await {
        Ok(outcome) => outcome,
        Err(e) => FetchOutcome::Failed(e),
    }
}

async fn request_json(url: &str) -> Result<FetchOutcome, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Ok(FetchOutcome::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| "Response body is not text".to_string())?;

    debug!("Fetched {} ({} bytes)", url, text.len());
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| e.to_string())?;
    Ok(FetchOutcome::Body(value))
}

// -- Sound effect --

/// The reveal sound. Playback failures (autoplay policy, missing file) are
/// ignored; the sound file is optional and not shipped with the page.
pub struct SoundEffect {
    audio: Option<HtmlAudioElement>,
}

impl SoundEffect {
    pub fn load(url: &str, volume: f64) -> Self {
        let audio = match HtmlAudioElement::new_with_src(url) {
            Ok(audio) => {
                audio.set_volume(volume.clamp(0.0, 1.0));
                Some(audio)
            }
            Err(e) => {
                warn!("Failed to create audio element: {}", js_error(e));
                None
            }
        };
        Self { audio }
    }

    pub fn silent() -> Self {
        Self { audio: None }
    }

    pub fn play(&self) {
        let Some(audio) = &self.audio else {
            return;
        };
        audio.set_current_time(0.0);
        if let Ok(promise) = audio.play() {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    debug!("Sound playback rejected: {}", js_error(e));
                }
            });
        }
    }
}

// -- Misc browser helpers --

/// Blocking notice.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Seed for the session RNG.
pub fn random_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (random << 32) ^ now
}
