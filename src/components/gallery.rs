//! Gallery Component
//!
//! Main image viewer with prev/next navigation. Hosts the indicator dots,
//! the thumbnail grid and the lightbox, each bound to the same controller.

use leptos::prelude::*;

use crate::components::{display, IndicatorDots, Lightbox, ThumbnailGrid};
use crate::context::use_app_context;

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_app_context();
    let gallery = ctx.gallery;
    let pane = gallery.bind();

    let description = move || pane.current_with(|img| img.payload.description.clone());

    view! {
        <section class="gallery">
            <div id="viewerEmpty" class="viewer-empty" style:display=move || display(pane.is_empty(), "block")>
                "No images yet"
            </div>

            <div id="viewerContent" class="viewer-content" style:display=move || display(!pane.is_empty(), "flex")>
                <button id="prevBtn" class="nav-btn prev" title="Previous" on:click=move |_| gallery.prev()>
                    "‹"
                </button>

                <figure class="viewer-figure">
                    <img
                        id="currentImage"
                        class="current-image"
                        style="cursor: zoom-in;"
                        src=move || pane.current_with(|img| img.payload.data_url.clone())
                        alt=description
                        on:click=move |_| ctx.lightbox_open.set(true)
                    />
                    <figcaption id="imageDescription" class="image-description">{description}</figcaption>
                </figure>

                <button id="nextBtn" class="nav-btn next" title="Next" on:click=move |_| gallery.next()>
                    "›"
                </button>
            </div>

            <IndicatorDots gallery=gallery />
            <ThumbnailGrid gallery=gallery />
            <Lightbox gallery=gallery open=ctx.lightbox_open />
        </section>
    }
}
