/// User interface module
///
/// Views are pure functions of state. Card-level views emit
/// `CardMessage`s and the application tags them with the card's key.

pub mod card;
pub mod carousel;
pub mod header;
pub mod lightbox;
pub mod strip;
pub mod style;

/// Window width at which the hover carousel replaces the thumbnail strip
pub const WIDE_BREAKPOINT: f32 = 1024.0;

/// Layout class derived from the window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Pointer-capable: inline carousel with hover reveal
    Wide,
    /// Touch or small screens: thumbnail strip and lightbox
    Narrow,
}

impl Layout {
    pub fn from_width(width: f32) -> Self {
        if width >= WIDE_BREAKPOINT {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}
