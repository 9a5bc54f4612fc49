//! Calendar/clock value model
//!
//! `DateTime` is an immutable value: every transformation returns a new
//! value. The time fields are always meaningful; the date fields and the
//! day of week are only meaningful while the date-validity flag is set.

pub mod format;
mod value;

pub use format::{format_date, format_time, FormatError};
pub use value::{days_in_month, is_leap_year, DateTime, DayOfWeek, Hour12, Meridiem};
