//! Runner cadence configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polling cadences and buzzer pattern timing, in milliseconds.
///
/// The defaults match the deployed firmware. Button presses shorter
/// than two button-poll intervals are rejected by the debouncer, so
/// `button_poll_ms` bounds the shortest press the clock can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunnerConfig {
    /// Interval between button samples
    pub button_poll_ms: u32,
    /// Interval between knob samples
    pub scalar_poll_ms: u32,
    /// Interval between time fetches
    pub time_poll_ms: u32,
    /// Buzzer on-phase length while the alarm beeps
    pub buzzer_on_ms: u32,
    /// Buzzer off-phase length while the alarm beeps
    pub buzzer_off_ms: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            button_poll_ms: 20,
            scalar_poll_ms: 20,
            time_poll_ms: 1000,
            buzzer_on_ms: 1000,
            buzzer_off_ms: 400,
        }
    }
}
