/// Running/paused state of the auto-advance timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoAdvanceStatus {
    Running { next_due_ms: u64 },
    Paused,
    Disabled,
}

/// A single periodic timer that requests the next slide.
///
/// There is never more than one live schedule: starting, resuming or resetting replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvance {
    period_ms: u64,
    status: AutoAdvanceStatus,
}

impl AutoAdvance {
    pub fn new(enabled: bool, period_ms: u64, now_ms: u64) -> Self {
        if !enabled || period_ms == 0 {
            return Self {
                period_ms,
                status: AutoAdvanceStatus::Disabled,
            };
        }
        let mut timer = Self {
            period_ms,
            status: AutoAdvanceStatus::Paused,
        };
        timer.start(now_ms);
        timer
    }

    pub fn status(&self) -> AutoAdvanceStatus {
        self.status
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, AutoAdvanceStatus::Running { .. })
    }

    pub fn next_due(&self) -> Option<u64> {
        match self.status {
            AutoAdvanceStatus::Running { next_due_ms } => Some(next_due_ms),
            _ => None,
        }
    }

    /// Starts a fresh period anchored at `anchor_ms`.
    pub fn start(&mut self, anchor_ms: u64) {
        if self.status == AutoAdvanceStatus::Disabled {
            return;
        }
        self.status = AutoAdvanceStatus::Running {
            next_due_ms: anchor_ms.saturating_add(self.period_ms),
        };
    }

    pub fn pause(&mut self) {
        if self.status == AutoAdvanceStatus::Disabled {
            return;
        }
        self.status = AutoAdvanceStatus::Paused;
    }

    /// Returns `true` when a tick is due at `now_ms`.
    ///
    /// The schedule advances by whole periods: a tick the caller skips is not deferred, and
    /// several missed periods collapse into one tick.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let AutoAdvanceStatus::Running { next_due_ms } = self.status else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }
        let behind = now_ms - next_due_ms;
        let periods = behind / self.period_ms + 1;
        self.status = AutoAdvanceStatus::Running {
            next_due_ms: next_due_ms.saturating_add(periods.saturating_mul(self.period_ms)),
        };
        true
    }
}
