//! Indicator Dots Component
//!
//! One dot per image; the active dot follows the cursor.

use leptos::prelude::*;

use crate::binding::ViewerHandle;
use crate::components::active_class;
use crate::models::Image;

#[component]
pub fn IndicatorDots(gallery: ViewerHandle<Image>) -> impl IntoView {
    let dots = gallery.bind();

    view! {
        <div id="imageIndicator" class="image-indicator">
            <For
                each=move || dots.items.get().into_iter().enumerate()
                key=|(idx, img)| (*idx, img.id)
                children=move |(idx, img)| {
                    view! {
                        <span
                            class=move || active_class("dot", dots.is_selected(idx))
                            title=img.payload.description.clone()
                            on:click=move |_| gallery.set_cursor(idx)
                        ></span>
                    }
                }
            />
        </div>
    }
}
