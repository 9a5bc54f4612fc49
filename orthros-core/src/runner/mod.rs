//! Tick-driven polling runner
//!
//! The single thread of control: accumulates elapsed time and, at the
//! configured cadences, feeds button samples, knob readings, and fresh
//! time values into the controller, and paces the buzzer while the
//! alarm beeps.

mod poll;

pub use poll::Runner;
