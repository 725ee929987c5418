//! Music Player Component
//!
//! Audio player for the current track plus the clickable track list.
//! When a track ends the player moves on to the next one.

use leptos::prelude::*;

use crate::components::{active_class, display};
use crate::context::use_app_context;

#[component]
pub fn MusicPlayer() -> impl IntoView {
    let music = use_app_context().music;
    let player = music.bind();
    let list = music.bind();

    view! {
        <section class="music-player">
            <div id="playerEmpty" class="player-empty" style:display=move || display(player.is_empty(), "block")>
                "No tracks yet"
            </div>

            <div id="playerContent" class="player-content" style:display=move || display(!player.is_empty(), "block")>
                <h3 id="trackTitle" class="track-title">
                    {move || player.current_with(|track| track.payload.title.clone())}
                </h3>
                <p id="trackDescription" class="track-description">
                    {move || player.current_with(|track| track.payload.description.clone())}
                </p>
                <audio
                    id="audioPlayer"
                    controls=true
                    preload="none"
                    src=move || player.current_with(|track| track.payload.url.clone())
                    on:ended=move |_| music.next()
                ></audio>
                <div class="player-controls">
                    <button id="prevTrackBtn" class="nav-btn prev" title="Previous track" on:click=move |_| music.prev()>
                        "⏮"
                    </button>
                    <button id="nextTrackBtn" class="nav-btn next" title="Next track" on:click=move |_| music.next()>
                        "⏭"
                    </button>
                </div>
            </div>

            <div id="trackItems" class="track-items">
                <For
                    each=move || list.items.get().into_iter().enumerate()
                    key=|(idx, track)| (*idx, track.id)
                    children=move |(idx, track)| {
                        let is_active = move || list.is_selected(idx);
                        let description = track.payload.description.clone();
                        view! {
                            <div
                                class=move || active_class("track-item", is_active())
                                on:click=move |_| music.set_cursor(idx)
                            >
                                <div class="track-item-number">{idx + 1}</div>
                                <div class="track-item-info">
                                    <div class="track-item-title">{track.payload.title.clone()}</div>
                                    // Description only for the active track
                                    <div class="track-item-desc">
                                        {move || if is_active() { description.clone() } else { String::new() }}
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
