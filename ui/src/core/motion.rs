//! Entrance motion for the landing cards.
//!
//! The two top-level cards slide up once on mount: transparent and offset
//! 50px down, then opaque and in place. The transition is declared as
//! data here and rendered as an inline `animation` shorthand; the
//! matching `slide-up` keyframes live in the shared theme.

/// Presentation states of an entrance transition. `Visible` is terminal;
/// there is no reverse transition and no cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
    Hidden,
    Visible,
}

/// Parameters of one slide-up entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideUp {
    /// Seconds after mount before the transition starts.
    pub delay_s: f32,
    /// Seconds the transition takes once started.
    pub duration_s: f32,
}

/// The IP-info card enters immediately.
pub const IP_CARD_ENTRANCE: SlideUp = SlideUp {
    delay_s: 0.0,
    duration_s: 0.5,
};

/// The QR-tools card follows, staggered behind the IP card.
pub const QR_CARD_ENTRANCE: SlideUp = SlideUp {
    delay_s: 0.3,
    duration_s: 0.5,
};

impl SlideUp {
    /// Keyframes name in the shared theme.
    pub const KEYFRAMES: &'static str = "slide-up";
    pub const EASING: &'static str = "ease-out";

    /// Inline style driving this entrance. Fill mode `both` keeps the
    /// block in the hidden keyframe through its delay and in the visible
    /// keyframe afterwards.
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}s {} {}s both;",
            Self::KEYFRAMES,
            self.duration_s,
            Self::EASING,
            self.delay_s
        )
    }

    /// Which presentation state the block has settled into `elapsed_s`
    /// seconds after mount. During the transition itself the block is
    /// still on its way to `Visible`, so only a finished transition
    /// reports visible.
    pub fn state_after(&self, elapsed_s: f32) -> EntranceState {
        if elapsed_s >= self.delay_s + self.duration_s {
            EntranceState::Visible
        } else {
            EntranceState::Hidden
        }
    }
}
