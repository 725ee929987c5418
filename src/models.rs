//! Frontend Models
//!
//! Payloads of the items each widget shows.

use collection_viewer::Item;
use serde::{Deserialize, Serialize};

/// Gallery image payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Image source (asset path or data URL)
    pub data_url: String,
    pub description: String,
}

/// Music track payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
    /// Audio source
    pub url: String,
    pub title: String,
    pub description: String,
}

pub type Image = Item<ImageData>;
pub type Track = Item<TrackData>;

pub fn image(id: u32, data_url: &str, description: &str) -> Image {
    Item::new(
        id,
        ImageData {
            data_url: data_url.to_string(),
            description: description.to_string(),
        },
    )
}

pub fn track(id: u32, url: &str, title: &str, description: &str) -> Track {
    Item::new(
        id,
        TrackData {
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_wire_format() {
        let img = image(4, "assets/visual_art/4.png", "fragment of my sketchbook");
        let json = serde_json::to_string(&img).unwrap();
        assert_eq!(
            json,
            r#"{"id":4,"dataUrl":"assets/visual_art/4.png","description":"fragment of my sketchbook"}"#
        );
    }

    #[test]
    fn test_track_wire_format() {
        let raw = r#"{"id":2,"url":"assets/music/2.mp3","title":"Cozy grassland","description":"ambient"}"#;
        let t: Track = serde_json::from_str(raw).unwrap();
        assert_eq!(t, track(2, "assets/music/2.mp3", "Cozy grassland", "ambient"));
    }
}
