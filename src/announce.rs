//! Debounced accessibility announcements.
//!
//! At most one announcement is pending per picker: the first color change
//! arms a deadline and later changes before it fires are absorbed. The text
//! is built when the deadline fires, from whatever color the picker holds at
//! that moment.

use std::time::Duration;
use web_time::Instant;

use crate::constants::ANNOUNCE_DELAY;

/// Single-slot announcement timer.
#[derive(Debug, Clone)]
pub struct Announcer {
    /// Wait between the first change and the announcement
    delay: Duration,
    /// When the pending announcement fires, if one is scheduled
    deadline: Option<Instant>,
}

impl Announcer {
    /// Create an announcer with the default delay.
    pub fn new() -> Self {
        Self {
            delay: ANNOUNCE_DELAY,
            deadline: None,
        }
    }

    /// Set the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer at `now` unless an announcement is already pending.
    ///
    /// Returns true when a new announcement was scheduled.
    pub fn schedule(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.delay);
        log::trace!("Announcer: scheduled");
        true
    }

    /// Check the timer at `now`.
    ///
    /// Returns true exactly once per scheduled announcement, when its
    /// deadline has passed. The slot is free again afterwards.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Check if an announcement is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending announcement.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}

/// Announcement text for a formatted color
pub fn announcement_text(formatted: &str) -> String {
    format!("{} {}", crate::constants::ANNOUNCE_PREFIX, formatted)
}
