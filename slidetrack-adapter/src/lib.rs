//! Adapter utilities for the `slidetrack` crate.
//!
//! The `slidetrack` crate is UI-agnostic and focuses on carousel state. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based smooth scrolling for surfaces that can only jump
//! - A driver that owns a carousel and its host behind a single-timer event loop surface
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod tween;

#[cfg(test)]
mod tests;

pub use driver::{DEFAULT_FRAME_MS, Driver, Smoothing};
pub use tween::{Easing, ScrollTween};
