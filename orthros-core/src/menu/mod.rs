//! Hierarchical settings menu controller
//!
//! The controller owns every user-facing mode transition: the live time
//! display, the settings pages, and the field-by-field time/date/alarm
//! editors. All redraws are issued here, at the moment the visible state
//! changes; nothing repaints periodically on its own.

mod controller;
mod fields;
mod screens;

pub use controller::{AlarmClock, Fault, MenuState};
pub use fields::{Advance, Retreat, TimeField};
