/// Gallery and carousel engine
///
/// A `Gallery` is the ordered, never-empty list of images belonging to one
/// card. The `Carousel` owns the single current index for that gallery;
/// the inline view and the lightbox both read and write this one value.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// How long the slide between two images takes
pub const TRANSITION_DURATION: Duration = Duration::from_millis(150);

/// Errors raised by gallery navigation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("image index {index} is out of range for a gallery of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered, immutable, non-empty image list
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<PathBuf>,
}

impl Gallery {
    /// Build a gallery from the primary image and the optional secondary
    /// list. An empty secondary list falls back to `[primary]`.
    pub fn new(primary: PathBuf, secondary: Vec<PathBuf>) -> Self {
        if secondary.is_empty() {
            Self { images: vec![primary] }
        } else {
            Self { images: secondary }
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when only one image exists; navigation controls are hidden
    pub fn is_single(&self) -> bool {
        self.images.len() == 1
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.images.iter().map(PathBuf::as_path)
    }
}

/// Direction of travel for the slide effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An in-flight slide between two images.
/// Purely cosmetic: it never gates navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub direction: Direction,
    pub started: Instant,
}

impl Transition {
    /// Progress in `[0.0, 1.0]` at the given instant
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= TRANSITION_DURATION
    }
}

/// Current position within one gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    transition: Option<Transition>,
}

impl Carousel {
    /// Start at the first image of `gallery`
    pub fn new(gallery: &Gallery) -> Self {
        Self {
            len: gallery.len(),
            index: 0,
            transition: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Advance one image, wrapping past the end
    pub fn next(&mut self) -> usize {
        let target = (self.index + 1) % self.len;
        self.move_to(target, Direction::Forward);
        self.index
    }

    /// Step back one image, wrapping past the start
    pub fn previous(&mut self) -> usize {
        let target = (self.index + self.len - 1) % self.len;
        self.move_to(target, Direction::Backward);
        self.index
    }

    /// Jump to `index`. Out-of-range requests are rejected and leave the
    /// carousel untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::OutOfRange { index, len: self.len });
        }

        let direction = if index >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(index, direction);
        Ok(())
    }

    /// Whether a slide is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .map(|transition| !transition.is_finished_at(now))
            .unwrap_or(false)
    }

    /// Drop the transition once it has run its course
    pub fn settle(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished_at(now)) {
            self.transition = None;
        }
    }

    fn move_to(&mut self, target: usize, direction: Direction) {
        if target == self.index {
            return;
        }

        debug!("carousel {} -> {} ({:?})", self.index, target, direction);

        // A newer request supersedes whatever slide is still running
        self.transition = Some(Transition {
            from: self.index,
            direction,
            started: Instant::now(),
        });
        self.index = target;
    }
}
