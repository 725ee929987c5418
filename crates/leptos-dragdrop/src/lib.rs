//! Leptos DragDrop Utilities
//!
//! Free-positioning drag for a single element using pointer events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    /// Pointer that pressed on the element (pending or dragging)
    pub pointer_id_read: ReadSignal<Option<i32>>,
    pub pointer_id_write: WriteSignal<Option<i32>>,
    /// True once the pointer moved past the threshold
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Set briefly after a drag ends so click handlers can ignore it
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pointer offset from the element's top-left corner
    pub offset_x_read: ReadSignal<f64>,
    pub offset_x_write: WriteSignal<f64>,
    pub offset_y_read: ReadSignal<f64>,
    pub offset_y_write: WriteSignal<f64>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 3;

pub fn create_drag_signals() -> DragSignals {
    let (pointer_id_read, pointer_id_write) = signal(None::<i32>);
    let (dragging_read, dragging_write) = signal(false);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (offset_x_read, offset_x_write) = signal(0f64);
    let (offset_y_read, offset_y_write) = signal(0f64);
    DragSignals {
        pointer_id_read,
        pointer_id_write,
        dragging_read,
        dragging_write,
        drag_just_ended_read,
        drag_just_ended_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        offset_x_read,
        offset_x_write,
        offset_y_read,
        offset_y_write,
    }
}

/// Whether `dx`/`dy` is far enough from the press point to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Element position for a pointer at `client`, keeping the grab offset
pub fn position_for(client_x: i32, client_y: i32, offset_x: f64, offset_y: f64) -> (i32, i32) {
    (
        (client_x as f64 - offset_x).round() as i32,
        (client_y as f64 - offset_y).round() as i32,
    )
}

/// End drag operation
pub fn end_drag(drag: &DragSignals) {
    let was_dragging = drag.dragging_read.get_untracked();
    drag.pointer_id_write.set(None);
    drag.dragging_write.set(false);
    if !was_dragging {
        return;
    }
    drag.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = drag.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create pointerdown handler for the draggable element
/// Captures the pointer and records the grab offset
pub fn make_on_pointerdown(drag: DragSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let Some(el) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let _ = el.set_pointer_capture(ev.pointer_id());

        let rect = el.get_bounding_client_rect();
        drag.offset_x_write.set(ev.client_x() as f64 - rect.left());
        drag.offset_y_write.set(ev.client_y() as f64 - rect.top());
        drag.start_x_write.set(ev.client_x());
        drag.start_y_write.set(ev.client_y());
        drag.pointer_id_write.set(Some(ev.pointer_id()));
    }
}

/// Bind global pointermove handler - starts drag if moved enough, then
/// reports the new element position
pub fn bind_global_pointermove<F>(drag: DragSignals, on_move: F)
where
    F: Fn(i32, i32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        if drag.pointer_id_read.get_untracked() != Some(ev.pointer_id()) {
            return;
        }

        if !drag.dragging_read.get_untracked() {
            let dx = ev.client_x() - drag.start_x_read.get_untracked();
            let dy = ev.client_y() - drag.start_y_read.get_untracked();
            if !exceeds_threshold(dx, dy) {
                return;
            }
            drag.dragging_write.set(true);
        }

        ev.prevent_default();
        let (left, top) = position_for(
            ev.client_x(),
            ev.client_y(),
            drag.offset_x_read.get_untracked(),
            drag.offset_y_read.get_untracked(),
        );
        on_move(left, top);
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    }
    on_pointermove.forget();
}

/// Bind global pointerup handler for drop detection
pub fn bind_global_pointerup<F, G>(drag: DragSignals, on_move: F, on_drop: G)
where
    F: Fn(i32, i32) + 'static,
    G: Fn(i32, i32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let Some(pointer_id) = drag.pointer_id_read.get_untracked() else {
            return;
        };
        if pointer_id != ev.pointer_id() {
            return;
        }

        if let Some(el) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        {
            let _ = el.release_pointer_capture(pointer_id);
        }

        // If we were actually dragging (not just clicking)
        if drag.dragging_read.get_untracked() {
            let (left, top) = position_for(
                ev.client_x(),
                ev.client_y(),
                drag.offset_x_read.get_untracked(),
                drag.offset_y_read.get_untracked(),
            );
            end_drag(&drag);
            on_drop(left, top);
        } else {
            end_drag(&drag);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
    }
    on_pointerup.forget();

    // Also bind global pointermove
    bind_global_pointermove(drag, on_move);
}
