//! Portfolio Widgets App
//!
//! Builds one controller per collection widget, provides them via
//! context, and lays out the gallery, music player and overlay.

use std::rc::Rc;

use collection_viewer::IndexedCollectionViewer;
use leptos::prelude::*;

use crate::binding::ViewerHandle;
use crate::components::{Gallery, MarginOverlay, MusicPlayer};
use crate::config::{gallery_config, music_config};
use crate::content::{default_images, default_tracks};
use crate::context::AppContext;
use crate::router;
use crate::storage::open_store;

#[component]
pub fn App() -> impl IntoView {
    let store = open_store();

    let gallery = ViewerHandle::new(IndexedCollectionViewer::initialize(
        &default_images(),
        gallery_config(),
        Rc::clone(&store),
    ));
    let music = ViewerHandle::new(IndexedCollectionViewer::initialize(
        &default_tracks(),
        music_config(),
        store,
    ));
    log::info!(
        "[APP] {} images, {} tracks",
        gallery.len(),
        music.len()
    );

    let ctx = AppContext::new(gallery, music);
    provide_context(ctx);
    router::bind_router(ctx);

    view! {
        <main class="portfolio-widgets">
            <Gallery />
            <MusicPlayer />
            <MarginOverlay />
        </main>
    }
}
