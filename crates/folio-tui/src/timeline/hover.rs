//! Active-segment state with leave hysteresis.
//!
//! At most one segment is active at a time. Leaving a segment does not
//! deactivate immediately: the pointer usually crosses a separator on its way
//! into the neighboring segment, and the leave event lands a few milliseconds
//! before the next enter. Deactivation is therefore deferred by a short
//! linger window and cancelled by any enter that arrives first.
//!
//! Time-dependent transitions take an explicit `Instant` so tests drive
//! the clock.

use std::time::{Duration, Instant};

/// Hover/focus state for one widget instance.
///
/// Instances are independent; nothing here is shared across widgets.
#[derive(Debug, Clone)]
pub struct HoverState {
    /// Currently active segment index, if any.
    active: Option<usize>,
    /// Deadline of the single pending deactivation, if one is scheduled.
    pending_leave: Option<Instant>,
    /// Linger window applied on leave.
    linger: Duration,
}

impl HoverState {
    /// Create an idle state with the given linger window.
    pub fn new(linger: Duration) -> Self {
        Self {
            active: None,
            pending_leave: None,
            linger,
        }
    }

    /// The active segment index, or `None` when idle.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether a deactivation is scheduled but not yet applied.
    pub fn leave_pending(&self) -> bool {
        self.pending_leave.is_some()
    }

    /// Pointer or focus entered segment `index`.
    ///
    /// Cancels any pending deactivation first; enter always wins over a
    /// scheduled leave.
    pub fn enter(&mut self, index: usize) {
        self.pending_leave = None;
        self.active = Some(index);
    }

    /// Pointer or focus left the active segment.
    ///
    /// Schedules the transition to idle after the linger window instead of
    /// applying it immediately. A no-op when already idle.
    pub fn leave(&mut self, now: Instant) {
        if self.active.is_some() {
            self.pending_leave = Some(now + self.linger);
        }
    }

    /// Apply a pending deactivation whose deadline has passed.
    ///
    /// Called from the UI tick; between `leave` and the deadline the segment
    /// stays active, which is the whole point of the hysteresis.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.pending_leave {
            if now >= deadline {
                self.pending_leave = None;
                self.active = None;
            }
        }
    }

    /// Force an immediate transition to idle (the Escape path).
    pub fn clear(&mut self) {
        self.pending_leave = None;
        self.active = None;
    }
}
