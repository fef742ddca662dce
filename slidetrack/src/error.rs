use thiserror::Error;

/// Reasons a carousel refuses to mount.
///
/// Mounting is all-or-nothing: when any of these is returned, no state was created and the
/// host should leave the markup untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("carousel has no slides")]
    NoSlides,
    #[error("auto-advance is enabled with a zero period")]
    ZeroAutoAdvancePeriod,
    #[error("card gap must be finite and non-negative")]
    InvalidGap,
    #[error("swipe thresholds must be finite")]
    InvalidSwipeThreshold,
}
