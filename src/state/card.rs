/// Per-card interaction state
///
/// One `CardState` per rendered card. It owns the card's props, its
/// gallery and the single carousel index shared by the inline view, the
/// thumbnail strip and the lightbox.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::data::{CardData, LinkKind};
use super::gallery::{Carousel, Gallery};
use super::hover::HoverState;
use super::lightbox::{LightboxSession, PressRegion};
use super::navigation::NavigationTarget;

/// Input events a card reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum CardMessage {
    Next,
    Previous,
    GoTo(usize),
    PointerEntered,
    PointerLeft,
    /// A thumbnail in the strip was pressed: select it and open the lightbox
    ThumbnailPressed(usize),
    LightboxPressed(PressRegion),
    CloseLightbox,
    /// The card body was pressed
    Activate,
    OpenLink(LinkKind),
}

/// Side effects a card asks the application to perform
#[derive(Debug, Clone, PartialEq)]
pub enum CardEffect {
    Navigate(NavigationTarget),
    OpenUrl(String),
}

#[derive(Debug, Clone)]
pub struct CardState {
    pub data: CardData,
    pub gallery: Gallery,
    pub carousel: Carousel,
    pub hover: HoverState,
    pub lightbox: LightboxSession,
    /// Downscaled previews for the strip, aligned with the gallery
    thumbnails: Vec<Option<PathBuf>>,
}

impl CardState {
    pub fn new(data: CardData) -> Self {
        let gallery = Gallery::new(data.image.clone(), data.images.clone());
        let carousel = Carousel::new(&gallery);
        let thumbnails = vec![None; gallery.len()];

        Self {
            data,
            gallery,
            carousel,
            hover: HoverState::default(),
            lightbox: LightboxSession::default(),
            thumbnails,
        }
    }

    /// Whether the whole card doubles as a navigation link
    pub fn is_link(&self) -> bool {
        self.data.navigation.is_some()
    }

    /// Image currently shown by both the inline view and the lightbox
    pub fn current_image(&self) -> &Path {
        self.gallery
            .get(self.carousel.index())
            .unwrap_or(self.data.image.as_path())
    }

    /// Whether next/previous buttons and dots are rendered at all
    pub fn has_navigation(&self) -> bool {
        !self.gallery.is_single()
    }

    /// Preview for strip entry `index`; falls back to the full image
    pub fn thumbnail(&self, index: usize) -> Option<&Path> {
        self.thumbnails
            .get(index)
            .and_then(|thumb| thumb.as_deref())
            .or_else(|| self.gallery.get(index))
    }

    pub fn set_thumbnails(&mut self, thumbnails: Vec<Option<PathBuf>>) {
        if thumbnails.len() == self.gallery.len() {
            self.thumbnails = thumbnails;
        } else {
            warn!(
                "Ignoring {} thumbnails for \"{}\" with {} images",
                thumbnails.len(),
                self.data.title,
                self.gallery.len()
            );
        }
    }

    /// React to one input event
    pub fn update(&mut self, message: CardMessage) -> Option<CardEffect> {
        debug!("card \"{}\": {:?}", self.data.title, message);

        match message {
            CardMessage::Next => {
                self.carousel.next();
                None
            }
            CardMessage::Previous => {
                self.carousel.previous();
                None
            }
            CardMessage::GoTo(index) => {
                if let Err(err) = self.carousel.go_to(index) {
                    warn!("{}", err);
                }
                None
            }
            CardMessage::PointerEntered => {
                self.hover.pointer_entered();
                None
            }
            CardMessage::PointerLeft => {
                self.hover.pointer_left();
                None
            }
            CardMessage::ThumbnailPressed(index) => {
                if let Err(err) = self.lightbox.open_at(&mut self.carousel, index) {
                    warn!("{}", err);
                }
                None
            }
            CardMessage::LightboxPressed(region) => {
                self.lightbox.press(region);
                None
            }
            CardMessage::CloseLightbox => {
                self.lightbox.close();
                None
            }
            CardMessage::Activate => {
                // The lightbox owns input while it is open
                if self.lightbox.is_open() {
                    return None;
                }
                self.data.navigation.map(CardEffect::Navigate)
            }
            CardMessage::OpenLink(kind) => self
                .data
                .links
                .get(kind)
                .map(|url| CardEffect::OpenUrl(url.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Links;
    use crate::state::navigation::tests::Recorder;
    use crate::state::navigation::{self, Route, Section};
    use chrono::Utc;

    const WORKFLOWS: NavigationTarget = NavigationTarget {
        section: Section::Projects,
        route: Route::Workflows,
    };

    fn data(title: &str, images: &[&str], navigation: Option<NavigationTarget>) -> CardData {
        CardData {
            title: title.to_string(),
            description: "A card".to_string(),
            features: Vec::new(),
            tags: Vec::new(),
            icons: Vec::new(),
            image: PathBuf::from("primary.png"),
            images: images.iter().map(PathBuf::from).collect(),
            links: Links::default(),
            navigation,
        }
    }

    fn apply(card: &mut CardState, message: CardMessage, recorder: &mut Recorder) {
        if let Some(CardEffect::Navigate(target)) = card.update(message) {
            navigation::activate(&target, recorder, Utc::now());
        }
    }

    #[test]
    fn test_thumbnail_opens_lightbox_at_index() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png", "c.png"], None));

        card.update(CardMessage::ThumbnailPressed(2));

        assert!(card.lightbox.is_open());
        assert_eq!(card.carousel.index(), 2);
        assert_eq!(card.current_image(), Path::new("c.png"));
    }

    #[test]
    fn test_lightbox_and_inline_share_index() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png", "c.png"], None));

        card.update(CardMessage::ThumbnailPressed(0));
        card.update(CardMessage::Next);
        card.update(CardMessage::LightboxPressed(PressRegion::Backdrop));

        assert!(!card.lightbox.is_open());
        assert_eq!(card.current_image(), Path::new("b.png"));

        card.update(CardMessage::Previous);
        card.update(CardMessage::Previous);
        assert_eq!(card.current_image(), Path::new("c.png"));
    }

    #[test]
    fn test_content_press_keeps_lightbox_open() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png"], None));
        card.update(CardMessage::ThumbnailPressed(1));

        card.update(CardMessage::LightboxPressed(PressRegion::Content));
        card.update(CardMessage::LightboxPressed(PressRegion::Controls));
        assert!(card.lightbox.is_open());

        card.update(CardMessage::CloseLightbox);
        assert!(!card.lightbox.is_open());
    }

    #[test]
    fn test_invalid_thumbnail_is_ignored() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png"], None));
        card.update(CardMessage::ThumbnailPressed(9));

        assert!(!card.lightbox.is_open());
        assert_eq!(card.carousel.index(), 0);
    }

    #[test]
    fn test_primary_only_card_has_no_navigation() {
        let mut card = CardState::new(data("Single", &[], None));

        assert_eq!(card.gallery.len(), 1);
        assert!(!card.has_navigation());
        assert_eq!(card.current_image(), Path::new("primary.png"));

        card.update(CardMessage::Next);
        card.update(CardMessage::ThumbnailPressed(0));
        assert!(card.lightbox.is_open());
        assert_eq!(card.current_image(), Path::new("primary.png"));
    }

    #[test]
    fn test_designated_card_navigates_once() {
        let mut card = CardState::new(data("N8N Workflows", &[], Some(WORKFLOWS)));
        let mut recorder = Recorder::default();

        assert!(card.is_link());
        apply(&mut card, CardMessage::Activate, &mut recorder);

        assert_eq!(recorder.sections, vec![Section::Projects]);
        assert_eq!(recorder.timestamps.len(), 1);
        assert_eq!(recorder.routes, vec![Route::Workflows]);
    }

    #[test]
    fn test_plain_card_triggers_nothing() {
        let mut card = CardState::new(data("N8N Workflows", &[], None));
        let mut recorder = Recorder::default();

        assert!(!card.is_link());
        apply(&mut card, CardMessage::Activate, &mut recorder);
        apply(&mut card, CardMessage::Next, &mut recorder);

        assert!(recorder.sections.is_empty());
        assert!(recorder.timestamps.is_empty());
        assert!(recorder.routes.is_empty());
    }

    #[test]
    fn test_carousel_controls_do_not_activate() {
        let mut card = CardState::new(data("N8N Workflows", &["a.png", "b.png"], Some(WORKFLOWS)));

        assert_eq!(card.update(CardMessage::Next), None);
        assert_eq!(card.update(CardMessage::GoTo(0)), None);
        assert_eq!(card.update(CardMessage::ThumbnailPressed(1)), None);
        assert_eq!(card.update(CardMessage::Activate), None);
    }

    #[test]
    fn test_hover_events() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png"], None));

        card.update(CardMessage::PointerEntered);
        assert!(card.hover.reveals_controls());
        card.update(CardMessage::PointerLeft);
        assert!(!card.hover.reveals_controls());
    }

    #[test]
    fn test_open_link_only_when_present() {
        let mut raw = data("Linked", &[], None);
        raw.links.source = Some("https://github.com/example/repo".to_string());
        let mut card = CardState::new(raw);

        assert_eq!(
            card.update(CardMessage::OpenLink(LinkKind::Source)),
            Some(CardEffect::OpenUrl("https://github.com/example/repo".to_string()))
        );
        assert_eq!(card.update(CardMessage::OpenLink(LinkKind::Live)), None);
    }

    #[test]
    fn test_thumbnails_fall_back_to_full_image() {
        let mut card = CardState::new(data("Gallery", &["a.png", "b.png"], None));
        assert_eq!(card.thumbnail(1), Some(Path::new("b.png")));

        card.set_thumbnails(vec![Some(PathBuf::from("thumb-a.jpg")), None]);
        assert_eq!(card.thumbnail(0), Some(Path::new("thumb-a.jpg")));
        assert_eq!(card.thumbnail(1), Some(Path::new("b.png")));

        card.set_thumbnails(vec![None]);
        assert_eq!(card.thumbnail(0), Some(Path::new("thumb-a.jpg")));
    }
}
