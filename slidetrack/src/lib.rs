//! A headless, looping carousel controller.
//!
//! For adapter-level utilities (tween-emulated smooth scrolling, an event-loop driver), see
//! the `slidetrack-adapter` crate.
//!
//! The crate models a horizontally scrollable strip of fixed-width cards: looping index
//! navigation, a single in-flight motion at a time, auto-advance, swipe and keyboard input,
//! and realignment after viewport resizes.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide (via [`Host`]):
//! - the slide count and the first card's measured box
//! - a way to scroll the track and to set its offset directly
//! - input events and the current time in milliseconds
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod debounce;
mod error;
mod geometry;
mod host;
mod input;
mod motion;
mod navigation;
mod options;
mod state;
mod types;


pub use autoplay::{AutoAdvance, AutoAdvanceStatus};
pub use carousel::Carousel;
pub use debounce::Debounce;
pub use error::MountError;
pub use geometry::Geometry;
pub use host::Host;
pub use input::{Activation, Input, Response, Swipe};
pub use motion::{Finished, Motion, MotionPhase};
pub use navigation::{Navigation, wrap_index};
pub use options::{
    CarouselOptions, DEFAULT_AUTO_ADVANCE_MS, DEFAULT_CARD_GAP, DEFAULT_RESIZE_DEBOUNCE_MS,
    DEFAULT_SETTLE_MARGIN_MS, DEFAULT_SWIPE_INTENT_THRESHOLD, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TRANSITION_MS,
};
pub use state::{CarouselState, Indicator};
pub use types::{Behavior, CardBox, Direction, FocusTarget, Key, Region, ScrollCommand};
