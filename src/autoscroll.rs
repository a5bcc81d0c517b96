//! Auto-scroll control state.
//!
//! The viewer moves its scroll container by a small step on every timer tick
//! while active. This module only models the state; the timer itself is the
//! `time::every` subscription built from [`AutoScroll::timer_period`], so the
//! number of live timers always follows the active flag (zero or one).

use std::num::IntErrorKind;
use std::time::Duration;
use tracing::debug;

/// Smallest accepted interval between ticks.
pub const MIN_SCROLL_INTERVAL_MS: u64 = 1;
/// Largest accepted interval between ticks.
pub const MAX_SCROLL_INTERVAL_MS: u64 = 10_000;

/// Milliseconds between two scroll ticks, always within
/// `MIN_SCROLL_INTERVAL_MS..=MAX_SCROLL_INTERVAL_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollInterval(u64);

impl ScrollInterval {
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(MIN_SCROLL_INTERVAL_MS, MAX_SCROLL_INTERVAL_MS))
    }

    /// Interpret free-form text from the interval field.
    ///
    /// Empty or non-numeric input yields `None` so the caller keeps the
    /// previous value. Out-of-range numbers, including ones too long for an
    /// `i64`, clamp to the nearest bound.
    pub fn parse_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return None,
            },
        };
        Some(Self::new(value.max(0) as u64))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl std::fmt::Display for ScrollInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Inactive,
    Active,
}

#[derive(Debug, Clone)]
pub struct AutoScroll {
    phase: ScrollPhase,
    interval: ScrollInterval,
    step_px: f32,
}

impl AutoScroll {
    pub fn new(interval: ScrollInterval, step_px: f32) -> Self {
        let step_px = if step_px.is_finite() && step_px > 0.0 {
            step_px
        } else {
            1.0
        };
        Self {
            phase: ScrollPhase::Inactive,
            interval,
            step_px,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, ScrollPhase::Active)
    }

    pub fn interval(&self) -> ScrollInterval {
        self.interval
    }

    pub fn step_px(&self) -> f32 {
        self.step_px
    }

    /// Flip the active flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.phase = match self.phase {
            ScrollPhase::Inactive => ScrollPhase::Active,
            ScrollPhase::Active => ScrollPhase::Inactive,
        };
        debug!(active = self.is_active(), "Auto-scroll toggled");
        self.is_active()
    }

    /// Force the inactive state. Returns whether a timer was running.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = ScrollPhase::Inactive;
        was_active
    }

    /// Replace the tick period. Returns `true` when a running timer has to be
    /// restarted with the new period.
    pub fn set_interval(&mut self, interval: ScrollInterval) -> bool {
        if interval == self.interval {
            return false;
        }
        debug!(
            old_ms = self.interval.as_millis(),
            new_ms = interval.as_millis(),
            active = self.is_active(),
            "Scroll interval changed"
        );
        self.interval = interval;
        self.is_active()
    }

    /// Period of the timer that should currently be running, if any.
    pub fn timer_period(&self) -> Option<Duration> {
        self.is_active().then(|| self.interval.as_duration())
    }
}
