use std::time::{Duration, Instant};

/// Host events that should lead to a re-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// A different document became active. Refreshed immediately.
    DocumentOpened,
    /// The stored document changed on disk.
    ContentModified,
    /// The user typed in the editor.
    EditorChanged,
}

/// Collapses bursts of refresh triggers into a single refresh.
///
/// Time is passed in by the caller so the debouncer works with any event
/// loop and is testable without sleeping.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_trigger: Option<Instant>,
    immediate: bool,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_trigger: None,
            immediate: false,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn trigger(&mut self, trigger: RefreshTrigger, now: Instant) {
        self.last_trigger = Some(now);
        if trigger == RefreshTrigger::DocumentOpened {
            self.immediate = true;
        }
    }

    /// Schedules a refresh that is due at once, e.g. on an explicit user request.
    pub fn force(&mut self, now: Instant) {
        self.last_trigger = Some(now);
        self.immediate = true;
    }

    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// True once a pending refresh is due.
    pub fn ready(&self, now: Instant) -> bool {
        match self.last_trigger {
            Some(_) if self.immediate => true,
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => false,
        }
    }

    /// Consumes a due refresh. Returns false if none is due yet.
    pub fn take(&mut self, now: Instant) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last_trigger = None;
        self.immediate = false;
        true
    }

    /// How long until the pending refresh is due, for sizing a poll timeout.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let last = self.last_trigger?;
        if self.immediate {
            return Some(Duration::ZERO);
        }
        Some(self.window.saturating_sub(now.saturating_duration_since(last)))
    }
}
