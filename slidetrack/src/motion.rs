use crate::{Behavior, ScrollCommand};

/// What the motion driver is currently waiting for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionPhase {
    #[default]
    Idle,
    /// A scroll command was issued and has not completed yet. Navigation is locked.
    InFlight {
        target: u64,
        behavior: Behavior,
        started_ms: u64,
        deadline_ms: u64,
    },
    /// The track scrolled without a command (e.g. the user dragged it natively).
    /// Navigation stays unlocked; the settle only re-syncs indicators and auto-advance.
    Settling { deadline_ms: u64 },
}

/// A motion or settle that just ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finished {
    Motion { target: u64, started_ms: u64 },
    Settle,
}

/// Issues scroll commands and tracks their completion.
///
/// Completion is detected by a deadline (`transition + margin` after the command, pushed
/// out by every scroll event the host reports) or, when enabled, by a native scroll-end
/// event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    phase: MotionPhase,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, MotionPhase::InFlight { .. })
    }

    pub fn deadline(&self) -> Option<u64> {
        match self.phase {
            MotionPhase::Idle => None,
            MotionPhase::InFlight { deadline_ms, .. } | MotionPhase::Settling { deadline_ms } => {
                Some(deadline_ms)
            }
        }
    }

    /// Locks navigation and returns the command to hand to the host.
    ///
    /// Instant commands complete on the next poll; smooth ones after `settle_ms`.
    pub fn begin(
        &mut self,
        target: u64,
        behavior: Behavior,
        now_ms: u64,
        settle_ms: u64,
    ) -> ScrollCommand {
        debug_assert!(!self.is_animating(), "motion already in flight");
        let delay = if behavior.is_smooth() { settle_ms } else { 0 };
        self.phase = MotionPhase::InFlight {
            target,
            behavior,
            started_ms: now_ms,
            deadline_ms: now_ms.saturating_add(delay),
        };
        ScrollCommand {
            offset: target,
            behavior,
        }
    }

    /// Records a scroll event from the host.
    pub fn on_scroll_event(&mut self, now_ms: u64, settle_ms: u64) {
        let next = now_ms.saturating_add(settle_ms);
        match &mut self.phase {
            MotionPhase::InFlight { deadline_ms, .. } => {
                *deadline_ms = (*deadline_ms).max(next);
            }
            MotionPhase::Settling { deadline_ms } => {
                *deadline_ms = next;
            }
            MotionPhase::Idle => {
                self.phase = MotionPhase::Settling { deadline_ms: next };
            }
        }
    }

    /// Completes whatever is pending right away (native scroll-end event).
    pub fn on_scroll_end(&mut self) -> Option<Finished> {
        self.finish()
    }

    /// Completes the pending motion or settle once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<Finished> {
        match self.deadline() {
            Some(deadline) if now_ms >= deadline => self.finish(),
            _ => None,
        }
    }

    fn finish(&mut self) -> Option<Finished> {
        let finished = match self.phase {
            MotionPhase::Idle => return None,
            MotionPhase::InFlight {
                target, started_ms, ..
            } => Finished::Motion { target, started_ms },
            MotionPhase::Settling { .. } => Finished::Settle,
        };
        self.phase = MotionPhase::Idle;
        Some(finished)
    }
}
