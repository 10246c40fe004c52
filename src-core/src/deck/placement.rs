//! Edge-biased scatter for the floating cards.
//!
//! Points are drawn from one of four bands hugging the viewport edges and
//! rejected while they land in a central exclusion rectangle. The number of
//! samples is bounded; when every sample is rejected the last one is kept.
//! This is a cosmetic scatter, not a packing: two cards may still land close
//! to each other.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point in percent-of-viewport coordinates, each axis in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    /// Position used for `left`/`top` styling; keeps the card body on screen.
    pub fn display_clamped(&self) -> (f64, f64) {
        (self.x.clamp(2.0, 94.0), self.y.clamp(2.0, 90.0))
    }
}

/// Axis-aligned rectangle in percent coordinates. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, p: ScreenPosition) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Bottom,
    Left,
    Right,
}

pub const BANDS: [Band; 4] = [Band::Top, Band::Bottom, Band::Left, Band::Right];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Inset from every viewport edge.
    pub margin: f64,
    /// Thickness of the top and left bands.
    pub band_depth: f64,
    /// Where the bottom and right bands begin.
    pub far_band_start: f64,
    pub max_attempts: u32,
    /// Re-place every card when the deck is reset.
    pub reshuffle_on_reset: bool,
    pub exclusion: Rect,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 5.0,
            band_depth: 10.0,
            far_band_start: 85.0,
            max_attempts: 10,
            reshuffle_on_reset: false,
            exclusion: Rect {
                x: 30.0,
                y: 30.0,
                width: 40.0,
                height: 40.0,
            },
        }
    }
}

impl PlacementConfig {
    /// Sampling bounds `(x_min, x_max, y_min, y_max)` for a band.
    pub fn band_bounds(&self, band: Band) -> (f64, f64, f64, f64) {
        let m = self.margin;
        let far = 100.0 - m;
        match band {
            Band::Top => (m, far, m, m + self.band_depth),
            Band::Bottom => (m, far, self.far_band_start, far),
            Band::Left => (m, m + self.band_depth, m, far),
            Band::Right => (self.far_band_start, far, m, far),
        }
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Draw one uniform point inside `band`.
pub fn sample_band<R: Rng + ?Sized>(
    config: &PlacementConfig,
    band: Band,
    rng: &mut R,
) -> ScreenPosition {
    let (x_min, x_max, y_min, y_max) = config.band_bounds(band);
    ScreenPosition::new(uniform(rng, x_min, x_max), uniform(rng, y_min, y_max))
}

/// Pick a position biased toward the viewport edges.
pub fn place_randomly<R: Rng + ?Sized>(config: &PlacementConfig, rng: &mut R) -> ScreenPosition {
    place_with_attempts(config, rng).0
}

/// Same as [`place_randomly`], also reporting how many samples were drawn.
pub fn place_with_attempts<R: Rng + ?Sized>(
    config: &PlacementConfig,
    rng: &mut R,
) -> (ScreenPosition, u32) {
    let max_attempts = config.max_attempts.max(1);
    let mut attempts = 0;
    loop {
        let band = BANDS[rng.random_range(0..BANDS.len())];
        let position = sample_band(config, band, rng);
        attempts += 1;
        if !config.exclusion.contains(position) || attempts >= max_attempts {
            return (position, attempts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_positions_stay_in_range() {
        let config = PlacementConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let p = place_randomly(&config, &mut rng);
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn test_exclusion_zone_mostly_avoided() {
        let config = PlacementConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let inside = (0..10_000)
            .map(|_| place_randomly(&config, &mut rng))
            .filter(|p| config.exclusion.contains(*p))
            .count();
        assert!(
            inside < 100,
            "Expected under 1% of points in the exclusion zone, got {}",
            inside
        );
    }

    #[test]
    fn test_each_band_respects_margin() {
        let config = PlacementConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        for band in BANDS {
            for _ in 0..500 {
                let p = sample_band(&config, band, &mut rng);
                assert!(p.x >= 5.0 && p.x <= 95.0, "{:?} x={}", band, p.x);
                assert!(p.y >= 5.0 && p.y <= 95.0, "{:?} y={}", band, p.y);
            }
        }
    }

    #[test]
    fn test_attempt_budget_is_bounded() {
        // Exclusion covers the whole viewport, so every sample is rejected.
        let config = PlacementConfig {
            exclusion: Rect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
            },
            ..PlacementConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let (p, attempts) = place_with_attempts(&config, &mut rng);
        assert_eq!(attempts, 10);
        assert!(config.exclusion.contains(p), "Last sample is returned as-is");
    }

    #[test]
    fn test_zero_attempts_still_samples_once() {
        let config = PlacementConfig {
            max_attempts: 0,
            ..PlacementConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let (_, attempts) = place_with_attempts(&config, &mut rng);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_display_clamp() {
        let p = ScreenPosition::new(99.0, 1.0);
        assert_eq!(p.display_clamped(), (94.0, 2.0));
        let q = ScreenPosition::new(50.0, 95.0);
        assert_eq!(q.display_clamped(), (50.0, 90.0));
    }

    #[test]
    fn test_rect_edges_inclusive() {
        let r = PlacementConfig::default().exclusion;
        assert!(r.contains(ScreenPosition::new(30.0, 70.0)));
        assert!(!r.contains(ScreenPosition::new(29.9, 50.0)));
    }
}
