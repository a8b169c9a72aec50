// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-slot debounce timer.
//!
//! The debouncer never sleeps or spawns anything. Callers pass the current
//! time in (a `Duration` since some fixed origin, e.g. `performance.now()`)
//! and get back a deadline to wake up at. That keeps it usable from WASM,
//! where `Instant` is unavailable, and makes the timing testable.

use std::time::Duration;

/// Holds at most one pending value and the time it becomes due.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replace any pending value; it becomes due `quiet` after `now`.
    pub fn schedule(&mut self, value: T, now: Duration) -> Duration {
        let deadline = now.saturating_add(self.quiet);
        self.pending = Some((value, deadline));
        deadline
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}
