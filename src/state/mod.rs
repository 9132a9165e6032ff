/// State management module
///
/// This module handles all application state, including:
/// - The card catalog and its validation (catalog.rs, data.rs)
/// - Gallery contents and the shared carousel index (gallery.rs)
/// - Hover reveal and lightbox sessions (hover.rs, lightbox.rs)
/// - Per-card composition of the above (card.rs)
/// - Ambient navigation state (navigation.rs)

pub mod card;
pub mod catalog;
pub mod data;
pub mod gallery;
pub mod hover;
pub mod lightbox;
pub mod navigation;
