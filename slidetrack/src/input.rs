use crate::{Direction, FocusTarget, Key, Region};

/// How a previous/next control was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    Pointer,
    Key(Key),
}

/// Events a host forwards to [`crate::Carousel::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// A previous/next button was clicked or received a key press.
    Control {
        direction: Direction,
        activation: Activation,
    },
    /// An indicator dot was activated.
    Indicator(usize),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    TouchCancel,
    /// A key press anywhere on the page.
    KeyDown { key: Key, focus: FocusTarget },
    PointerEnter(Region),
    PointerLeave(Region),
    FocusIn,
    FocusOut,
    /// The viewport was resized.
    Resize,
    /// The track's scroll offset changed.
    Scroll,
    /// The track reported a native scroll-end event.
    ScrollEnd,
}

/// What the host should do with the native event after the carousel handled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// A navigation was accepted (not dropped by the in-flight guard).
    pub navigated: bool,
    /// The native event's default action should be suppressed.
    pub prevent_default: bool,
}

impl Response {
    pub(crate) fn navigated(navigated: bool) -> Self {
        Self {
            navigated,
            prevent_default: false,
        }
    }

    pub(crate) fn prevented(navigated: bool) -> Self {
        Self {
            navigated,
            prevent_default: true,
        }
    }
}

/// A horizontal touch gesture in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    start_x: f32,
    last_x: f32,
}

impl Swipe {
    pub fn new(x: f32) -> Self {
        Self {
            start_x: x,
            last_x: x,
        }
    }

    pub fn update(&mut self, x: f32) {
        self.last_x = x;
    }

    /// Signed travel; negative when the finger moved left.
    pub fn delta(&self) -> f32 {
        self.last_x - self.start_x
    }

    /// Whether the gesture is clearly horizontal and page scrolling should be suppressed.
    pub fn shows_intent(&self, intent_threshold: f32) -> bool {
        abs(self.delta()) > intent_threshold
    }

    /// Navigation direction, if the travel exceeds `threshold`.
    ///
    /// Moving the finger left pulls the next card in.
    pub fn direction(&self, threshold: f32) -> Option<Direction> {
        let delta = self.delta();
        if abs(delta) <= threshold {
            return None;
        }
        if delta < 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }
}

// Clears the sign bit; only needs `core`.
fn abs(v: f32) -> f32 {
    f32::from_bits(v.to_bits() & 0x7fff_ffff)
}
