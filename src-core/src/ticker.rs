//! Decorative text lanes.
//!
//! Content only; nothing here touches the deck. The frontend drives each
//! [`Rotator`] from its own interval timer.

use serde::{Deserialize, Serialize};

const DEFAULT_TICKER: &str = include_str!("../config/ticker.toml");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub headlines: Vec<String>,
    pub lanes: Vec<LaneConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    pub top_percent: f64,
    pub period_ms: u32,
    pub duration_s: f64,
    pub class: String,
    pub lines: Vec<String>,
}

/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_ticker() -> TickerConfig {
    toml::from_str(DEFAULT_TICKER).expect("embedded ticker.toml must be valid TOML")
}

/// Cycles through a fixed list of lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rotator {
    lines: Vec<String>,
    index: usize,
}

impl Rotator {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, index: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.lines.get(self.index).map(String::as_str)
    }

    /// Move to the next line, wrapping at the end.
    pub fn advance(&mut self) -> usize {
        if !self.lines.is_empty() {
            self.index = (self.index + 1) % self.lines.len();
        }
        self.index
    }
}

/// Placement of one scrolling headline in the bottom strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineLayout {
    pub top_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// Spread headlines over seven rows with staggered start times.
pub fn headline_layout(index: usize) -> HeadlineLayout {
    HeadlineLayout {
        top_percent: ((index % 7) * 12 + 5) as f64,
        duration_s: (15 + (index % 10) * 2) as f64,
        delay_s: index as f64 * 0.8,
    }
}
