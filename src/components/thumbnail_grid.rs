//! Thumbnail Grid Component
//!
//! Clicking a thumbnail selects it in the main viewer (not the lightbox).

use leptos::prelude::*;

use crate::binding::ViewerHandle;
use crate::components::active_class;
use crate::models::Image;

#[component]
pub fn ThumbnailGrid(gallery: ViewerHandle<Image>) -> impl IntoView {
    let thumbs = gallery.bind();

    view! {
        <div id="thumbnailGrid" class="thumbnail-grid">
            <For
                each=move || thumbs.items.get().into_iter().enumerate()
                key=|(idx, img)| (*idx, img.id)
                children=move |(idx, img)| {
                    view! {
                        <img
                            class=move || active_class("thumb", thumbs.is_selected(idx))
                            src=img.payload.data_url.clone()
                            alt=img.payload.description.clone()
                            loading="lazy"
                            on:click=move |_| gallery.set_cursor(idx)
                        />
                    }
                }
            />
        </div>
    }
}
