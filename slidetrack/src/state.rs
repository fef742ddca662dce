use crate::{AutoAdvanceStatus, Geometry};

/// A lightweight, serializable snapshot of a carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub count: usize,
    /// Offset the current slide is (or will be) aligned to.
    pub offset: u64,
    pub is_animating: bool,
    pub auto_advance: AutoAdvanceStatus,
    pub geometry: Geometry,
}

/// One indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

impl Indicator {
    /// Accessible label, e.g. `"Go to slide 3"`.
    pub fn label(&self) -> alloc::string::String {
        alloc::format!("Go to slide {}", self.index + 1)
    }
}
