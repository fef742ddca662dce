use crate::CardBox;
use crate::types::finite_or_zero;

/// Cached card geometry along the scroll axis.
///
/// `card_width` includes the card's horizontal margins; `gap` is the space the track puts
/// between neighbouring cards. Offsets are derived as `index * (card_width + gap)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub card_width: f32,
    pub gap: f32,
}

impl Geometry {
    pub fn new(card_width: f32, gap: f32) -> Self {
        Self {
            card_width: finite_or_zero(card_width),
            gap: finite_or_zero(gap),
        }
    }

    /// Distance between the starts of two neighbouring cards.
    pub fn pitch(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Updates the card width from a fresh measurement.
    ///
    /// When no card box is available the last known width is kept. Returns the width in use.
    pub fn measure(&mut self, first_card: Option<CardBox>) -> f32 {
        if let Some(card) = first_card {
            self.card_width = card.outer_width();
        }
        self.card_width
    }

    /// Updates the gap, preferring the layout-reported value over `fallback`.
    pub fn set_gap(&mut self, measured: Option<f32>, fallback: f32) {
        self.gap = match measured {
            Some(g) if g.is_finite() && g >= 0.0 => g,
            _ => finite_or_zero(fallback),
        };
    }

    /// Absolute scroll offset for the card at `index`, rounded to whole pixels.
    pub fn offset_for(&self, index: usize) -> u64 {
        round_to_u64(index as f64 * self.pitch() as f64)
    }
}

// `f64::round` needs `std`; offsets are never negative so add-and-truncate is enough.
fn round_to_u64(v: f64) -> u64 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    (v + 0.5) as u64
}
