//! Margin Overlay Component
//!
//! Decorative image placed at a jittered spot in the left page margin.
//! It can be dragged anywhere; the dropped position is remembered and a
//! double-click forgets it again.

use collection_viewer::{
    clear_position, load_position, random_position, save_position, OverlayPosition, Viewport,
};
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_pointerup, create_drag_signals, make_on_pointerdown};

use crate::config::{placement_config, OVERLAY_IMAGE_SRC, POSITION_STORAGE_KEY, RESIZE_DEBOUNCE_MS};
use crate::storage::open_store;

/// Larger of the layout viewport and the window's inner size
fn current_viewport() -> Viewport {
    let win = window();
    let inner_width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let inner_height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let (client_width, client_height) = document()
        .document_element()
        .map(|el| (el.client_width() as f64, el.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    Viewport {
        width: client_width.max(inner_width),
        height: client_height.max(inner_height),
    }
}

fn px(value: Option<i32>) -> String {
    value.map(|v| format!("{}px", v)).unwrap_or_default()
}

#[component]
pub fn MarginOverlay() -> impl IntoView {
    let store = StoredValue::new_local(open_store());
    let (position, set_position) = signal(None::<OverlayPosition>);

    // A saved position wins over random placement
    let place = move || {
        let saved = store.with_value(|store| load_position(store, POSITION_STORAGE_KEY));
        let next = saved.unwrap_or_else(|| {
            random_position(
                current_viewport(),
                &placement_config(),
                js_sys::Math::random(),
                js_sys::Math::random(),
            )
        });
        set_position.set(Some(next));
    };
    place();

    // Debounced re-placement: replacing the pending timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    let _ = window_event_listener(ev::resize, move |_| {
        pending.set_value(Some(Timeout::new(RESIZE_DEBOUNCE_MS, place)));
    });

    let drag = create_drag_signals();
    bind_global_pointerup(
        drag,
        move |left, top| set_position.set(Some(OverlayPosition { left, top })),
        move |left, top| {
            let dropped = OverlayPosition { left, top };
            set_position.set(Some(dropped));
            store.with_value(|store| save_position(store, POSITION_STORAGE_KEY, dropped));
            log::debug!("[overlay] saved position {:?}", dropped);
        },
    );

    let on_dblclick = move |_| {
        if drag.drag_just_ended_read.get_untracked() {
            return;
        }
        store.with_value(|store| clear_position(store, POSITION_STORAGE_KEY));
        place();
    };

    view! {
        <img
            id="margin-gif"
            class="fixed-margin-gif"
            class:dragging=move || drag.dragging_read.get()
            src=OVERLAY_IMAGE_SRC
            alt="decor"
            draggable="false"
            style:left=move || px(position.get().map(|p| p.left))
            style:top=move || px(position.get().map(|p| p.top))
            on:pointerdown=make_on_pointerdown(drag)
            on:dblclick=on_dblclick
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(px(Some(-12)), "-12px");
        assert_eq!(px(None), "");
    }
}
