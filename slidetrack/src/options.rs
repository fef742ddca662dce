use crate::MountError;

/// Gap between cards (px) used when the host cannot report the layout gap.
pub const DEFAULT_CARD_GAP: f32 = 32.0;
/// Duration of the smooth-scroll transition (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 300;
/// Extra time added to the transition before a motion is considered finished (ms).
pub const DEFAULT_SETTLE_MARGIN_MS: u64 = 50;
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5_000;
/// Minimum horizontal travel (px) for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
/// Horizontal travel (px) after which a touch gesture suppresses page scrolling.
pub const DEFAULT_SWIPE_INTENT_THRESHOLD: f32 = 10.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Configuration for [`crate::Carousel`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can
/// keep carousel settings next to the rest of their page configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Fallback gap between cards. Only used when `Host::card_gap` returns `None`.
    ///
    /// Must match the stylesheet gap, otherwise slides drift out of alignment.
    pub card_gap: f32,

    pub transition_ms: u64,
    pub settle_margin_ms: u64,

    pub auto_advance: bool,
    pub auto_advance_ms: u64,

    pub swipe_threshold: f32,
    pub swipe_intent_threshold: f32,

    pub resize_debounce_ms: u64,

    /// Complete motions as soon as the host reports a native scroll-end event.
    ///
    /// The fixed-delay completion timer stays armed as a fallback either way.
    pub use_scrollend_event: bool,

    /// Slide shown at mount. Wrapped like any other navigation target.
    pub initial_index: i64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            card_gap: DEFAULT_CARD_GAP,
            transition_ms: DEFAULT_TRANSITION_MS,
            settle_margin_ms: DEFAULT_SETTLE_MARGIN_MS,
            auto_advance: true,
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_intent_threshold: DEFAULT_SWIPE_INTENT_THRESHOLD,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            use_scrollend_event: false,
            initial_index: 0,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_gap(mut self, card_gap: f32) -> Self {
        self.card_gap = card_gap;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_settle_margin_ms(mut self, settle_margin_ms: u64) -> Self {
        self.settle_margin_ms = settle_margin_ms;
        self
    }

    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    pub fn with_auto_advance_ms(mut self, auto_advance_ms: u64) -> Self {
        self.auto_advance_ms = auto_advance_ms;
        self
    }

    pub fn with_swipe_thresholds(mut self, swipe_threshold: f32, intent_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self.swipe_intent_threshold = intent_threshold;
        self
    }

    pub fn with_resize_debounce_ms(mut self, resize_debounce_ms: u64) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_initial_index(mut self, initial_index: i64) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Time from issuing a smooth scroll until the motion is treated as finished.
    pub fn settle_ms(&self) -> u64 {
        self.transition_ms.saturating_add(self.settle_margin_ms)
    }

    /// Checks the options for values the carousel cannot run with.
    pub fn validate(&self) -> Result<(), MountError> {
        if self.auto_advance && self.auto_advance_ms == 0 {
            return Err(MountError::ZeroAutoAdvancePeriod);
        }
        if !(self.card_gap.is_finite() && self.card_gap >= 0.0) {
            return Err(MountError::InvalidGap);
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_intent_threshold.is_finite()) {
            return Err(MountError::InvalidSwipeThreshold);
        }
        Ok(())
    }
}
