//! Buzzer output trait.

/// Trait for the alarm buzzer.
///
/// Tone frequency and duty are the implementation's concern; the core
/// only switches the sound on and off to shape the alarm pattern.
pub trait Buzzer {
    /// Turn the buzzer sound on or off.
    fn set_active(&mut self, on: bool);
}
