// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::time::Instant;

/// This enum represents what happened when a task was handed to the debouncer:
/// - [`DebounceStatus::Scheduled`]: Nothing was pending, a new task is now pending.
/// - [`DebounceStatus::Rescheduled`]: A pending task was cancelled and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceStatus {
    Scheduled,
    Rescheduled,
}

/// A cancellable delayed task. Only the trailing edge of a burst survives: every call to
/// [`Self::schedule`] replaces whatever was pending, and pushes the deadline out to
/// `now + delay`. There is never more than one pending task.
///
/// The clock is passed in, rather than read, so the owner decides how to wait (eg:
/// [`tokio::time::sleep_until`] on [`Self::deadline`]) and tests don't have to sleep.
///
/// 1. Call [`Self::schedule`] with the current time on every input.
/// 2. When the clock reaches [`Self::deadline`], call [`Self::take_if_due`] to get the
///    payload that should be acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    pub delay: Duration,
    maybe_pending: Option<PendingTask<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTask<T> {
    deadline: Instant,
    payload: T,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            maybe_pending: None,
        }
    }

    pub fn schedule(&mut self, now: Instant, payload: T) -> DebounceStatus {
        let replaced = self.maybe_pending.replace(PendingTask {
            deadline: now + self.delay,
            payload,
        });
        match replaced {
            Some(_) => DebounceStatus::Rescheduled,
            None => DebounceStatus::Scheduled,
        }
    }

    /// Drops the pending task, if any, and returns its payload.
    pub fn cancel(&mut self) -> Option<T> { self.maybe_pending.take().map(|it| it.payload) }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.maybe_pending.as_ref().map(|it| it.deadline)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.maybe_pending.is_some() }

    /// Returns the payload if its deadline has been reached, and clears it.
    pub fn take_if_due(&mut self, now: Instant) -> Option<T> {
        let is_due = self
            .maybe_pending
            .as_ref()
            .is_some_and(|it| now >= it.deadline);
        if is_due { self.cancel() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_nothing_pending() {
        let mut debouncer = Debouncer::<&str>::new(DELAY);
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.take_if_due(Instant::now()), None);
    }

    #[test]
    fn test_fires_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        assert_eq!(debouncer.schedule(start, "a"), DebounceStatus::Scheduled);
        assert_eq!(debouncer.deadline(), Some(start + DELAY));

        assert_eq!(debouncer.take_if_due(start + DELAY / 2), None);
        assert!(debouncer.is_pending());

        assert_eq!(debouncer.take_if_due(start + DELAY), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.take_if_due(start + DELAY * 2), None);
    }

    #[test]
    fn test_only_trailing_edge_of_burst_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.schedule(start, "j");
        let step = Duration::from_millis(100);
        assert_eq!(
            debouncer.schedule(start + step, "jo"),
            DebounceStatus::Rescheduled
        );
        debouncer.schedule(start + step * 2, "joh");

        // The first deadline has passed, but it was pushed out by later keystrokes.
        assert_eq!(debouncer.take_if_due(start + DELAY), None);
        assert_eq!(debouncer.take_if_due(start + step * 2 + DELAY), Some("joh"));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.schedule(start, 1);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.take_if_due(start + DELAY), None);
    }
}
