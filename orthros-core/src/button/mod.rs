//! Button debounce state machine
//!
//! A confirmation debounce: a push or release only counts once two
//! consecutive poll samples agree, so the temporal resolution equals the
//! caller's poll cadence. No timers are involved.

mod debounce;

pub use debounce::{Button, ButtonState, PushState, Transition};
