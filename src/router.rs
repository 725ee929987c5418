//! Deep-Link Router
//!
//! Moves the gallery or music cursor from outside the widgets: from the
//! URL fragment (`#gallery/12`, `#music/3`) and from JavaScript via the
//! exported functions (`jumpToImage`, `getImages`, `openLightbox`, ...).

use std::cell::RefCell;

use collection_viewer::ItemId;
use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::context::AppContext;

/// A parsed deep link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepLink {
    Image(ItemId),
    Track(ItemId),
}

/// Parse a URL fragment, with or without the leading `#`
pub fn parse_fragment(fragment: &str) -> Option<DeepLink> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let (target, id) = decoded.split_once('/')?;
    let id: u32 = id.trim().parse().ok()?;
    match target.trim() {
        "gallery" => Some(DeepLink::Image(ItemId(id))),
        "music" => Some(DeepLink::Track(ItemId(id))),
        _ => None,
    }
}

/// Send a deep link to the matching controller
pub fn follow(ctx: &AppContext, link: DeepLink) {
    log::debug!("[router] following {:?}", link);
    match link {
        DeepLink::Image(id) => ctx.gallery.jump_to(id),
        DeepLink::Track(id) => ctx.music.jump_to(id),
    }
}

fn follow_location(ctx: &AppContext) {
    let Ok(hash) = window().location().hash() else {
        return;
    };
    if let Some(link) = parse_fragment(&hash) {
        follow(ctx, link);
    }
}

thread_local! {
    static APP_CONTEXT: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&AppContext) -> R) -> Option<R> {
    APP_CONTEXT.with(|slot| slot.borrow().as_ref().map(f))
}

/// Follow the current fragment now and on every `hashchange`, and expose
/// the JavaScript entry points
pub fn bind_router(ctx: AppContext) {
    APP_CONTEXT.with(|slot| {
        *slot.borrow_mut() = Some(ctx);
    });

    follow_location(&ctx);
    let _ = window_event_listener(leptos::ev::hashchange, move |_| follow_location(&ctx));
}

// ========================
// JavaScript API
// ========================

#[wasm_bindgen(js_name = jumpToImage)]
pub fn jump_to_image(id: u32) {
    with_app(|ctx| ctx.gallery.jump_to(ItemId(id)));
}

#[wasm_bindgen(js_name = jumpToTrack)]
pub fn jump_to_track(id: u32) {
    with_app(|ctx| ctx.music.jump_to(ItemId(id)));
}

#[wasm_bindgen(js_name = currentImageId)]
pub fn current_image_id() -> Option<u32> {
    with_app(|ctx| ctx.gallery.current_id()).flatten().map(|id| id.0)
}

#[wasm_bindgen(js_name = currentTrackId)]
pub fn current_track_id() -> Option<u32> {
    with_app(|ctx| ctx.music.current_id()).flatten().map(|id| id.0)
}

/// Plain JS objects (not `Map`s) so items read like `{id, dataUrl, ...}`
fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or_else(|e| {
        log::warn!("[router] failed to convert value for JS: {}", e);
        JsValue::NULL
    })
}

#[wasm_bindgen(js_name = getImages)]
pub fn get_images() -> JsValue {
    to_js(&with_app(|ctx| ctx.gallery.collection()).unwrap_or_default())
}

#[wasm_bindgen(js_name = getTracks)]
pub fn get_tracks() -> JsValue {
    to_js(&with_app(|ctx| ctx.music.collection()).unwrap_or_default())
}

#[wasm_bindgen(js_name = getCurrentImage)]
pub fn get_current_image() -> JsValue {
    to_js(&with_app(|ctx| ctx.gallery.current_item()).flatten())
}

#[wasm_bindgen(js_name = getCurrentTrack)]
pub fn get_current_track() -> JsValue {
    to_js(&with_app(|ctx| ctx.music.current_item()).flatten())
}

#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(index: u32) {
    with_app(|ctx| ctx.open_lightbox(index as usize));
}
