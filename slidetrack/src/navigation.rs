/// Wraps any navigation target into `0..count` (positive modulo).
///
/// Returns `None` when `count == 0`.
pub fn wrap_index(target: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as i64;
    Some(target.rem_euclid(n) as usize)
}

/// The current slide of a carousel with a fixed number of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigation {
    current: usize,
    count: usize,
}

impl Navigation {
    /// Returns `None` for an empty slide set.
    pub fn new(count: usize, initial: i64) -> Option<Self> {
        let current = wrap_index(initial, count)?;
        Some(Self { current, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index `target` resolves to, without moving.
    pub fn resolve(&self, target: i64) -> usize {
        // `count > 0` is guaranteed by construction.
        target.rem_euclid(self.count as i64) as usize
    }

    /// Moves to `target` (wrapped) and returns the new index.
    pub fn set(&mut self, target: i64) -> usize {
        self.current = self.resolve(target);
        debug_assert!(self.current < self.count);
        self.current
    }

    pub fn relative(&self, step: i64) -> i64 {
        (self.current as i64).saturating_add(step)
    }
}
