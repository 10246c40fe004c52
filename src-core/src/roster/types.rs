use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Optional contact details shown at the bottom of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl ProfileExtra {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.contact.is_none()
    }
}

/// One student entry as served by `cards.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: u32,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub role: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub bio: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub image: String,
    #[serde(default, deserialize_with = "loose_tags")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "loose_extra",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra: Option<ProfileExtra>,
}

// Display fields of a served roster are not schema-checked: `null` reads as
// missing, numbers and booleans become text, anything else is dropped.

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!("Dropping non-text profile field: {}", other);
            None
        }
    }
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn loose_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

fn loose_extra<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ProfileExtra>, D::Error> {
    let mut map = match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        Value::Null => return Ok(None),
        other => {
            warn!("Dropping non-object profile extra: {}", other);
            return Ok(None);
        }
    };
    let extra = ProfileExtra {
        location: map.remove("location").and_then(scalar_text),
        contact: map.remove("contact").and_then(scalar_text),
    };
    Ok((!extra.is_empty()).then_some(extra))
}

impl ProfileRecord {
    /// First `limit` characters of the bio followed by an ellipsis, as shown
    /// in the admin grid.
    pub fn bio_preview(&self, limit: usize) -> String {
        let short: String = self.bio.chars().take(limit).collect();
        format!("{}...", short)
    }
}

/// Where a loaded roster came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterOrigin {
    Fetched,
    CuratedFallback,
    GeneratedFallback,
}

impl RosterOrigin {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, RosterOrigin::Fetched)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub records: Vec<ProfileRecord>,
    pub origin: RosterOrigin,
}

/// Result of the single `cards.json` request, classified by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx response whose body parsed as JSON.
    Body(serde_json::Value),
    /// Non-2xx response.
    Status(u16),
    /// Network error, or the body was not JSON.
    Failed(String),
}

/// Which fixture set a thrown fetch/parse error falls back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Every failure yields the curated set.
    #[default]
    Unified,
    /// Non-2xx yields the curated set; errors yield the generated set.
    Split,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub fallback_policy: FallbackPolicy,
    /// Generated entries appended after the curated profiles.
    pub filler_count: u32,
    /// Size of the plain generated set used by the `split` policy.
    pub generated_count: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            fallback_policy: FallbackPolicy::Unified,
            filler_count: 20,
            generated_count: 25,
        }
    }
}
