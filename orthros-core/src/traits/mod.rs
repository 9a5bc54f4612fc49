//! Hardware abstraction traits
//!
//! These traits define the interface between the control core and
//! hardware-specific implementations. The core never touches a
//! peripheral directly; the orchestrating layer injects implementations
//! of these capabilities.

pub mod buzzer;
pub mod input;
pub mod time;

pub use buzzer::Buzzer;
pub use input::{ButtonPins, ScalarInput, BUTTON_COUNT};
pub use time::TimeStore;
