//! Overlay Placement
//!
//! Position maths for the decorative overlay image: a jittered spot in the
//! left page margin, or the spot the visitor last dragged it to.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Visible area of the page in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of the overlay in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub left: i32,
    pub top: i32,
}

/// Layout constants for random placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Half of the centred content column width
    pub content_half_width: f64,
    /// Distance from the content column into the margin
    pub margin_offset: f64,
    /// Maximum horizontal jitter either way
    pub jitter: f64,
    /// Smallest allowed top offset
    pub min_top: f64,
    /// Space kept free below the overlay
    pub bottom_reserve: f64,
    /// Minimum vertical range, even on very short viewports
    pub min_span: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            content_half_width: 550.0,
            margin_offset: 60.0,
            jitter: 40.0,
            min_top: 80.0,
            bottom_reserve: 160.0,
            min_span: 20.0,
        }
    }
}

/// Pick a position from two uniform samples in `[0, 1)`
pub fn random_position(
    viewport: Viewport,
    config: &PlacementConfig,
    left_sample: f64,
    top_sample: f64,
) -> OverlayPosition {
    let base_left =
        round_half_up(viewport.width / 2.0 - config.content_half_width - config.margin_offset);
    let left = base_left + round_half_up(left_sample * config.jitter * 2.0 - config.jitter);

    let min_top = config.min_top;
    let max_top = (min_top + config.min_span).max(viewport.height - config.bottom_reserve);
    let top = round_half_up(min_top + top_sample * (max_top - min_top));

    OverlayPosition {
        left: left as i32,
        top: top as i32,
    }
}

// Browsers round .5 towards positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[derive(Deserialize)]
struct StoredPosition {
    left: f64,
    top: f64,
}

/// Read a saved position. Missing or malformed data yields `None`.
pub fn load_position<S: KeyValueStore>(store: &S, key: &str) -> Option<OverlayPosition> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("[overlay] failed to read '{}': {}", key, err);
            return None;
        }
    };
    match serde_json::from_str::<StoredPosition>(&raw) {
        Ok(pos) if pos.left.is_finite() && pos.top.is_finite() => Some(OverlayPosition {
            left: round_half_up(pos.left) as i32,
            top: round_half_up(pos.top) as i32,
        }),
        Ok(_) => {
            warn!("[overlay] ignoring non-finite position in '{}'", key);
            None
        }
        Err(err) => {
            warn!("[overlay] ignoring malformed position in '{}': {}", key, err);
            None
        }
    }
}

/// Persist a position, logging failures
pub fn save_position<S: KeyValueStore>(store: &S, key: &str, position: OverlayPosition) {
    let raw = match serde_json::to_string(&position) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("[overlay] failed to encode position: {}", err);
            return;
        }
    };
    if let Err(err) = store.set(key, &raw) {
        warn!("[overlay] failed to save '{}': {}", key, err);
    }
}

/// Forget the saved position so the next placement is random again
pub fn clear_position<S: KeyValueStore>(store: &S, key: &str) {
    if let Err(err) = store.remove(key) {
        warn!("[overlay] failed to clear '{}': {}", key, err);
    }
}
