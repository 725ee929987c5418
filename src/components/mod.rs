//! UI Components
//!
//! Leptos components for the page widgets.

mod gallery;
mod indicator_dots;
mod thumbnail_grid;
mod lightbox;
mod music_player;
mod margin_overlay;

pub use gallery::Gallery;
pub use indicator_dots::IndicatorDots;
pub use thumbnail_grid::ThumbnailGrid;
pub use lightbox::Lightbox;
pub use music_player::MusicPlayer;
pub use margin_overlay::MarginOverlay;

/// CSS class list with an optional `active` modifier
pub fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

/// `display` value for a panel that is shown as `shown_as` when visible
pub fn display(visible: bool, shown_as: &'static str) -> &'static str {
    if visible {
        shown_as
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_class() {
        assert_eq!(active_class("dot", true), "dot active");
        assert_eq!(active_class("thumb", false), "thumb");
    }

    #[test]
    fn test_display() {
        assert_eq!(display(true, "flex"), "flex");
        assert_eq!(display(false, "flex"), "none");
    }
}
