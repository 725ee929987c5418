//! Lightbox Component
//!
//! Full-screen view of the current image. Navigation goes through the
//! controller, so the main viewer, dots and thumbnails follow along.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::binding::ViewerHandle;
use crate::models::Image;

/// Keys the open lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(LightboxKey::Close),
            "ArrowLeft" | "Left" => Some(LightboxKey::Prev),
            "ArrowRight" | "Right" => Some(LightboxKey::Next),
            _ => None,
        }
    }
}

/// `body` overflow to apply when `open` changes. Nothing is written until
/// the lightbox has been opened once.
fn overflow_transition(was_open: Option<bool>, open: bool) -> Option<&'static str> {
    match (was_open, open) {
        (None, false) => None,
        (Some(prev), now) if prev == now => None,
        (_, true) => Some("hidden"),
        (_, false) => Some("auto"),
    }
}

/// Lock or release page scrolling behind the lightbox
fn set_body_overflow(overflow: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("[lightbox] failed to set body overflow: {:?}", e);
    }
}

#[component]
pub fn Lightbox(
    gallery: ViewerHandle<Image>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let lightbox = gallery.bind();

    Effect::new(move |was_open: Option<bool>| {
        let now = open.get();
        if let Some(overflow) = overflow_transition(was_open, now) {
            set_body_overflow(overflow);
        }
        now
    });

    let _ = window_event_listener(ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        match LightboxKey::from_key(&ev.key()) {
            Some(LightboxKey::Close) => open.set(false),
            Some(LightboxKey::Prev) => gallery.prev(),
            Some(LightboxKey::Next) => gallery.next(),
            None => {}
        }
    });

    // Only clicks on the backdrop itself close the lightbox
    let backdrop = NodeRef::<leptos::html::Div>::new();
    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let target = ev.target().map(JsValue::from);
        if target.is_some() && target == backdrop.get_untracked().map(JsValue::from) {
            open.set(false);
        }
    };

    let single = move || lightbox.items.with(|items| items.len() <= 1);

    view! {
        <Show when=move || open.get()>
            <div id="lightboxModal" class="lightbox-modal" node_ref=backdrop on:click=on_backdrop_click>
                <button class="lightbox-close" title="Close" on:click=move |_| open.set(false)>
                    "×"
                </button>
                <button
                    id="lightboxPrev"
                    class="lightbox-nav prev"
                    disabled=single
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.prev();
                    }
                >
                    "‹"
                </button>
                <img
                    id="lightboxImage"
                    class="lightbox-image"
                    src=move || lightbox.current_with(|img| img.payload.data_url.clone())
                    alt=move || lightbox.current_with(|img| img.payload.description.clone())
                />
                <button
                    id="lightboxNext"
                    class="lightbox-nav next"
                    disabled=single
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.next();
                    }
                >
                    "›"
                </button>
                <p id="lightboxDescription" class="lightbox-description">
                    {move || lightbox.current_with(|img| img.payload.description.clone())}
                </p>
            </div>
        </Show>
    }
}
