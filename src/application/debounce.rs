// SPDX-License-Identifier: MPL-2.0
//! Debounce timer handle.
//!
//! The controller does not own a clock. Scheduling returns a ticket and the
//! shell reports the ticket back once the delay has elapsed; only the most
//! recently scheduled ticket is honored, so every keystroke invalidates the
//! previous timer.

use std::time::Duration;

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    next: u64,
    pending: Option<DebounceTicket>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a new timer, replacing any pending one.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.next += 1;
        let ticket = DebounceTicket(self.next);
        self.pending = Some(ticket);
        ticket
    }

    /// Consumes `ticket` if it is the pending timer.
    ///
    /// Returns `false` for replaced or cancelled timers.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
