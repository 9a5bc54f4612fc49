//! Hardware-agnostic control core for the Orthros alarm clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (time store, buttons, knob, buzzer)
//! - Calendar/clock value model and arithmetic
//! - Button debounce state machine
//! - Alarm scheduling and trigger logic
//! - Hierarchical settings menu controller
//! - Tick-driven polling runner

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod button;
pub mod config;
pub mod datetime;
pub mod menu;
pub mod runner;
pub mod traits;
