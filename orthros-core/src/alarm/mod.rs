//! Alarm scheduling and trigger logic
//!
//! One alarm, matched against the clock by time-of-day only; the
//! calendar date never participates, so a dismissed alarm re-arms for
//! the same time the next day.

mod scheduler;

pub use scheduler::{Alarm, AlarmState, BuzzerState, SNOOZE_MINUTES};
