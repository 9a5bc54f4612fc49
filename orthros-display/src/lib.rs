//! Character-display abstraction for the Orthros alarm clock
//!
//! This crate provides:
//! - `Screen`, a 16×2 character line buffer with dirty tracking
//! - `DisplayBackend` trait for hardware-specific display drivers
//!
//! # Architecture
//!
//! The control core writes padded lines into a `Screen` whenever the
//! visible state changes; nothing redraws periodically on its own. The
//! hardware layer implements `DisplayBackend` and flushes the buffer to
//! the device when the screen is dirty.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

pub use backend::{DisplayBackend, DisplayBackendExt, DisplayError};
pub use screen::{Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
