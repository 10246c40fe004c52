//! Roster loading: turns the outcome of the `cards.json` request into a
//! non-empty list of profiles.
//!
//! The request itself happens in the browser; this module only decides what
//! the outcome means:
//! - a JSON array of objects is accepted as-is; only an integer `id` is
//!   required, other fields are read loosely
//! - a non-2xx status yields the curated fallback
//! - a network/parse error or a malformed payload yields the fallback
//!   selected by [`FallbackPolicy`]

pub mod draft;
pub mod fixtures;
pub mod types;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::CardRevealError;

pub use draft::ProfileDraft;
pub use types::{
    FallbackPolicy, FetchOutcome, ProfileExtra, ProfileRecord, Roster, RosterConfig, RosterOrigin,
};

/// Accept a decoded JSON payload as a roster.
pub fn parse_records(value: Value) -> Result<Vec<ProfileRecord>, CardRevealError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CardRevealError::MalformedRoster(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(CardRevealError::MalformedRoster(format!(
                    "entry {} is {}, not an object",
                    i,
                    json_kind(&item)
                )));
            }
            serde_json::from_value(item)
                .map_err(|e| CardRevealError::MalformedRoster(format!("entry {}: {}", i, e)))
        })
        .collect::<Result<Vec<ProfileRecord>, _>>()?;

    if records.is_empty() {
        return Err(CardRevealError::MalformedRoster("roster is empty".to_string()));
    }
    Ok(records)
}

/// Parse roster JSON text.
pub fn parse_roster(text: &str) -> Result<Vec<ProfileRecord>, CardRevealError> {
    let value: Value = serde_json::from_str(text)?;
    parse_records(value)
}

/// Decide the roster for a fetch outcome. Never returns an empty roster.
pub fn resolve(outcome: FetchOutcome, config: &RosterConfig, base_path: &str) -> Roster {
    match outcome {
        FetchOutcome::Body(value) => match parse_records(value) {
            Ok(records) => {
                info!("Loaded {} profiles from cards.json", records.len());
                Roster {
                    records,
                    origin: RosterOrigin::Fetched,
                }
            }
            Err(e) => {
                warn!("Rejected cards.json payload: {}", e);
                error_fallback(config, base_path)
            }
        },
        FetchOutcome::Status(code) => {
            warn!("cards.json returned HTTP {}, using placeholder data", code);
            curated(config, base_path)
        }
        FetchOutcome::Failed(reason) => {
            warn!("Error loading cards: {}", reason);
            error_fallback(config, base_path)
        }
    }
}

fn curated(config: &RosterConfig, base_path: &str) -> Roster {
    Roster {
        records: fixtures::curated_fallback(base_path, config.filler_count),
        origin: RosterOrigin::CuratedFallback,
    }
}

fn error_fallback(config: &RosterConfig, base_path: &str) -> Roster {
    match config.fallback_policy {
        FallbackPolicy::Unified => curated(config, base_path),
        FallbackPolicy::Split if config.generated_count > 0 => Roster {
            records: fixtures::generated_fallback(base_path, config.generated_count),
            origin: RosterOrigin::GeneratedFallback,
        },
        FallbackPolicy::Split => curated(config, base_path),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
