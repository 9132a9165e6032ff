/// Hover reveal for the inline carousel controls

/// Pointer presence over one card's image region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn pointer_entered(&mut self) {
        *self = HoverState::Hovered;
    }

    pub fn pointer_left(&mut self) {
        *self = HoverState::Idle;
    }

    /// Navigation buttons and dots are shown only while hovered
    pub fn reveals_controls(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverState::default();
        assert!(!hover.reveals_controls());

        hover.pointer_entered();
        assert_eq!(hover, HoverState::Hovered);
        assert!(hover.reveals_controls());

        hover.pointer_left();
        assert_eq!(hover, HoverState::Idle);
        assert!(!hover.reveals_controls());
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut hover = HoverState::default();
        hover.pointer_entered();
        hover.pointer_entered();
        assert!(hover.reveals_controls());

        hover.pointer_left();
        hover.pointer_left();
        assert!(!hover.reveals_controls());
    }
}
