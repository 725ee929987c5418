//! Default Content
//!
//! The collections shipped with the page. Bump the matching seed version
//! in `config` when editing these so stored copies get replaced.

use crate::models::{image, track, Image, Track};

pub fn default_images() -> Vec<Image> {
    vec![
        image(1, "assets/visual_art/1.png", "3D model of my OC"),
        image(2, "assets/visual_art/2.png", "3D render - fragment of WIP environment for game"),
        image(3, "assets/visual_art/3.png", "fragment of my sketchbook"),
        image(4, "assets/visual_art/4.png", "fragment of my sketchbook"),
        image(5, "assets/visual_art/5.png", "fragment of my sketchbook"),
        image(6, "assets/visual_art/6.png", "fragment of my sketchbook"),
        image(7, "assets/visual_art/7.png", "fragment of my sketchbook"),
        image(8, "assets/visual_art/8.png", "fragment of my sketchbook"),
        image(9, "assets/visual_art/9.png", "fragment of my sketchbook"),
        image(10, "assets/visual_art/10.png", "My OC in digital"),
        image(11, "assets/visual_art/11.png", "fragment of my sketchbook"),
        image(12, "assets/visual_art/12.png", "Terry Davis, The smartest programmer that has ever lived"),
        image(13, "assets/visual_art/13.png", "Digital character concept"),
        image(14, "assets/visual_art/14.png", "fragment of my sketchbook"),
        image(15, "assets/visual_art/15.png", "fragment of my sketchbook"),
        image(16, "assets/visual_art/16.png", "fragment of my sketchbook"),
        image(17, "assets/visual_art/17.png", "fragment of my sketchbook"),
        image(18, "assets/visual_art/18.png", "Digital character concept"),
        image(19, "assets/visual_art/19.png", "fragment of my sketchbook"),
        image(20, "assets/visual_art/20.png", "Commisioned OC"),
        image(21, "assets/visual_art/21.png", "fragment of my sketchbook"),
        image(22, "assets/visual_art/22.png", "Quick clothes studies"),
        image(23, "assets/visual_art/23.png", "Comissioned CD cover of an album"),
    ]
}

pub fn default_tracks() -> Vec<Track> {
    vec![
        track(1, "assets/music/1.mp3", "Chase", "Chase scene soundtrack for indie game project"),
        track(2, "assets/music/2.mp3", "Cozy grassland", "Peaceful ambient track for indie game project"),
        track(3, "assets/music/3.mp3", "Goofy", "Playful and whimsical melody for indie game project"),
        track(4, "assets/music/4.mp3", "Bubbles", "Ethereal underwater-themed soundtrack for indie game project"),
        track(5, "assets/music/5.mp3", "Warrior cats", "Mysterious theme for indie game project"),
        track(6, "assets/music/6.mp3", "Alien shooter remix", "Beat with melody sampled from main theme of 'Alien shooter' game"),
        track(7, "assets/music/7.mp3", "Lurking", "Uneasiness inducing ambient beat"),
        track(8, "assets/music/8.mp3", "Why am i hearing myself", "Retro themed beat"),
    ]
}
