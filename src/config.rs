//! Widget Configuration
//!
//! Storage keys, content seed versions and overlay tuning.

use collection_viewer::{PlacementConfig, ViewerConfig};

// ========================
// Storage keys
// ========================

pub const GALLERY_STORAGE_KEY: &str = "galleryVisualArt";
pub const MUSIC_STORAGE_KEY: &str = "galleryMusic";
pub const POSITION_STORAGE_KEY: &str = "marginGifPos";

// ========================
// Content seed versions
// ========================

/// Bump after editing `content::default_images`
pub const GALLERY_SEED_VERSION: u32 = 1;
/// Bump after editing `content::default_tracks`
pub const MUSIC_SEED_VERSION: u32 = 1;

// ========================
// Overlay
// ========================

pub const OVERLAY_IMAGE_SRC: &str = "assets/szcz04.gif";

/// Quiet interval before re-placing the overlay after a resize
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

pub fn gallery_config() -> ViewerConfig {
    ViewerConfig::new(GALLERY_STORAGE_KEY, GALLERY_SEED_VERSION)
}

pub fn music_config() -> ViewerConfig {
    ViewerConfig::new(MUSIC_STORAGE_KEY, MUSIC_SEED_VERSION)
}

pub fn placement_config() -> PlacementConfig {
    PlacementConfig::default()
}
