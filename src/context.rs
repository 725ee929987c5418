//! Application Context
//!
//! Controller handles and page-wide UI state provided via Leptos Context API.

use leptos::prelude::*;

use crate::binding::ViewerHandle;
use crate::models::{Image, Track};

/// Page-wide controller handles
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gallery images
    pub gallery: ViewerHandle<Image>,
    /// Music tracks
    pub music: ViewerHandle<Track>,
    /// Whether the gallery lightbox is showing
    pub lightbox_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(gallery: ViewerHandle<Image>, music: ViewerHandle<Track>) -> Self {
        Self {
            gallery,
            music,
            lightbox_open: RwSignal::new(false),
        }
    }

    /// Select the image at `index` (wrapping) and show it in the lightbox
    pub fn open_lightbox(&self, index: usize) {
        if self.gallery.len() == 0 {
            log::debug!("[APP] no images to show in the lightbox");
            return;
        }
        self.gallery.set_cursor(index);
        self.lightbox_open.set(true);
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
