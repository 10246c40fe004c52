//! Application configuration.
//!
//! Defaults are compiled in from `src-core/config/cardreveal.toml`. Native
//! tooling can layer a file on top with [`load_config`]; every section is
//! optional there.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::admin::AdminConfig;
use crate::error::CardRevealError;
use crate::deck::placement::PlacementConfig;
use crate::roster::RosterConfig;

const DEFAULT_CONFIG: &str = include_str!("../config/cardreveal.toml");

/// Build-time override for `assets.base_path`.
const BASE_PATH_OVERRIDE: Option<&str> = option_env!("CARDREVEAL_BASE_PATH");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assets: AssetsConfig,
    pub roster: RosterConfig,
    pub placement: PlacementConfig,
    pub loading: LoadingConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub base_path: String,
    pub roster_path: String,
    pub sound_path: String,
    pub sound_volume: f64,
    pub placeholder_image: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            roster_path: "/cards.json".to_string(),
            sound_path: "/assets/sounds/unlock.mp3".to_string(),
            sound_volume: 0.3,
            placeholder_image: "/placeholder.svg".to_string(),
        }
    }
}

impl AssetsConfig {
    pub fn resolve(&self, path: &str) -> String {
        asset_path(&self.base_path, path)
    }

    pub fn roster_url(&self) -> String {
        self.resolve(&self.roster_path)
    }

    /// Reveal sound location, or `None` when sound is switched off with an
    /// empty path. The file is not bundled with the page.
    pub fn sound_url(&self) -> Option<String> {
        let path = self.sound_path.trim();
        (!path.is_empty()).then(|| self.resolve(path))
    }

    /// Image to show for a record; empty paths use the placeholder.
    pub fn image_url(&self, image: &str) -> String {
        if image.trim().is_empty() {
            self.resolve(&self.placeholder_image)
        } else {
            image.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Minimum time the loading screen stays up.
    pub min_duration_ms: u32,
    /// Delay between the random pick and the profile opening.
    pub pick_delay_ms: u32,
    /// Keep the loading screen until the roster has resolved.
    pub wait_for_roster: bool,
    /// Give up on the roster request after this long and use the fallback.
    pub max_wait_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 3000,
            pick_delay_ms: 1500,
            wait_for_roster: true,
            max_wait_ms: 8000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "cardreveal_core=debug".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Prefix `path` with the deployment base path. Absolute URLs pass through.
pub fn asset_path(base_path: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    let base = base_path.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Longest delay the browser timer API accepts.
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;

/// Parse a configuration document. Missing sections keep their defaults.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| CardRevealError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), CardRevealError> {
    let loading = &config.loading;
    for (name, value) in [
        ("loading.min_duration_ms", loading.min_duration_ms),
        ("loading.pick_delay_ms", loading.pick_delay_ms),
        ("loading.max_wait_ms", loading.max_wait_ms),
    ] {
        if value > MAX_TIMER_MS {
            return Err(CardRevealError::Config(format!(
                "{} must be at most {}, got {}",
                name, MAX_TIMER_MS, value
            )));
        }
    }
    if loading.max_wait_ms == 0 {
        return Err(CardRevealError::Config(
            "loading.max_wait_ms must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// The embedded defaults, with the build-time base path applied.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> AppConfig {
    let mut config =
        parse_config(DEFAULT_CONFIG).expect("embedded cardreveal.toml must be valid TOML");
    if let Some(base) = BASE_PATH_OVERRIDE {
        config.assets.base_path = base.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::FallbackPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.assets.base_path.clear();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[roster]\nfallback_policy = \"split\"\n\n[loading]\nmin_duration_ms = 500"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.roster.fallback_policy, FallbackPolicy::Split);
        assert_eq!(config.roster.generated_count, 25);
        assert_eq!(config.loading.min_duration_ms, 500);
        assert_eq!(config.loading.pick_delay_ms, 1500);
        assert_eq!(config.placement.max_attempts, 10);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[roster]\nfallback_policy = \"sometimes\"").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_parse_errors_are_config_errors() {
        let err = parse_config("[loading]\nmin_duration_ms = \"soon\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CardRevealError>(),
            Some(CardRevealError::Config(_))
        ));
    }

    #[test]
    fn test_timer_values_out_of_range_rejected() {
        for doc in [
            "[loading]\npick_delay_ms = 3000000000",
            "[loading]\nmin_duration_ms = 4294967295",
            "[loading]\nmax_wait_ms = 0",
        ] {
            let err = parse_config(doc).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<CardRevealError>(), Some(CardRevealError::Config(_))),
                "{} should be rejected",
                doc
            );
        }
        assert!(parse_config("[loading]\nmax_wait_ms = 2147483647").is_ok());
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("", "/cards.json"), "/cards.json");
        assert_eq!(asset_path("/srms", "/cards.json"), "/srms/cards.json");
        assert_eq!(asset_path("/srms/", "cards.json"), "/srms/cards.json");
        assert_eq!(
            asset_path("/srms", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_image_url_placeholder() {
        let assets = AssetsConfig {
            base_path: "/srms".into(),
            ..AssetsConfig::default()
        };
        assert_eq!(assets.image_url(""), "/srms/placeholder.svg");
        assert_eq!(assets.image_url("/x.png"), "/x.png");
        assert_eq!(assets.roster_url(), "/srms/cards.json");
    }

    #[test]
    fn test_empty_sound_path_disables_sound() {
        let mut assets = AssetsConfig {
            base_path: "/srms".into(),
            ..AssetsConfig::default()
        };
        assert_eq!(
            assets.sound_url().as_deref(),
            Some("/srms/assets/sounds/unlock.mp3")
        );
        assets.sound_path = "  ".into();
        assert!(assets.sound_url().is_none());
        assert!(parse_config("[assets]\nsound_path = \"\"")
            .unwrap()
            .assets
            .sound_url()
            .is_none());
    }
}
