/// Lightbox session: the full-viewport image viewer
///
/// The session holds no index of its own. Opening it writes into the
/// card's `Carousel`, and while open it navigates that same carousel.

use super::gallery::{Carousel, GalleryError};
use tracing::debug;

/// Where a press landed while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRegion {
    /// The dimmed area around the content; dismisses the session
    Backdrop,
    /// The image itself; never dismisses
    Content,
    /// Navigation buttons and indicator dots; never dismisses
    Controls,
}

impl PressRegion {
    pub fn dismisses(&self) -> bool {
        matches!(self, PressRegion::Backdrop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxSession {
    #[default]
    Closed,
    Open,
}

impl LightboxSession {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxSession::Open)
    }

    /// Select image `index` on the shared carousel, then open.
    /// An invalid index leaves both the carousel and the session as they were.
    pub fn open_at(&mut self, carousel: &mut Carousel, index: usize) -> Result<(), GalleryError> {
        carousel.go_to(index)?;
        debug!("lightbox opened at {}", index);
        *self = LightboxSession::Open;
        Ok(())
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("lightbox closed");
        }
        *self = LightboxSession::Closed;
    }

    /// Handle a press inside the open session. Returns true when the
    /// press closed it.
    pub fn press(&mut self, region: PressRegion) -> bool {
        if self.is_open() && region.dismisses() {
            self.close();
            return true;
        }
        false
    }
}
