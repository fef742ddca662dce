/// How a scroll command should be applied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Jump straight to the target offset.
    Instant,
    /// Animate to the target offset (e.g. CSS `scroll-behavior: smooth`).
    #[default]
    Smooth,
}

impl Behavior {
    pub fn from_animate(animate: bool) -> Self {
        if animate { Self::Smooth } else { Self::Instant }
    }

    pub fn is_smooth(self) -> bool {
        matches!(self, Self::Smooth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Keys the carousel reacts to. Anything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }

    pub fn arrow_direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Previous),
            Self::ArrowRight => Some(Direction::Next),
            _ => None,
        }
    }
}

/// Where keyboard focus was when a key event arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusTarget {
    /// A text input or textarea; arrow keys belong to the caret there.
    TextEntry,
    #[default]
    Other,
}

/// Part of the carousel a pointer can hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    Track,
    Control(Direction),
    Indicator(usize),
}

/// Rendered box of a card along the scroll axis, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardBox {
    /// Border-box width (e.g. `offsetWidth`).
    pub width: f32,
    pub margin_start: f32,
    pub margin_end: f32,
}

impl CardBox {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            margin_start: 0.0,
            margin_end: 0.0,
        }
    }

    pub fn with_margins(mut self, margin_start: f32, margin_end: f32) -> Self {
        self.margin_start = margin_start;
        self.margin_end = margin_end;
        self
    }

    /// Width including horizontal margins. Non-finite or negative parts count as zero.
    pub fn outer_width(&self) -> f32 {
        finite_or_zero(self.width)
            + finite_or_zero(self.margin_start)
            + finite_or_zero(self.margin_end)
    }
}

pub(crate) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// A scroll request for the host's track element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub offset: u64,
    pub behavior: Behavior,
}
