/// A trailing-edge debounce: fires once, `delay_ms` after the last `schedule`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    due_ms: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            due_ms: None,
        }
    }

    /// Cancels any pending deadline and schedules a new one.
    pub fn schedule(&mut self, now_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn deadline(&self) -> Option<u64> {
        self.due_ms
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
