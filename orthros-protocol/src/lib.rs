//! RTC time-record contract for the Orthros alarm clock
//!
//! This crate defines the fixed 7-field record exchanged with the
//! real-time-clock chip. The record layout is a register-order contract
//! with the chip's time register block:
//!
//! ```text
//! ┌────────┬────────┬──────┬─────────────┬─────┬───────┬──────┐
//! │ SECOND │ MINUTE │ HOUR │ DAY-OF-WEEK │ DAY │ MONTH │ YEAR │
//! │ 0      │ 1      │ 2    │ 3           │ 4   │ 5     │ 6    │
//! └────────┴────────┴──────┴─────────────┴─────┴───────┴──────┘
//! ```
//!
//! The field order is bit-exact and must never change. BCD conversion is
//! the bus driver's concern; this crate carries plain binary field values.

#![no_std]
#![deny(unsafe_code)]

pub mod record;

pub use record::{
    RecordError, TimeRecord, RECORD_LEN, REG_DAY, REG_DAY_OF_WEEK, REG_HOUR, REG_MINUTE,
    REG_MONTH, REG_SECOND, REG_YEAR,
};
