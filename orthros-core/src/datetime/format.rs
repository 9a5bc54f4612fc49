//! Text formatting for `DateTime` values.
//!
//! Formatters append to a caller-provided `heapless::String` and check
//! the remaining capacity against the worst-case width up front: a
//! destination that cannot hold the widest possible output is refused
//! outright rather than truncated.

use core::fmt::Write;

use heapless::String;

use super::value::DateTime;

/// Worst-case width of "12:MM:SS AM"
const WIDTH_12H_SECONDS: usize = 11;

/// Worst-case width of "12:MM AM"
const WIDTH_12H: usize = 8;

/// Width of "HH:MM:SS"
const WIDTH_24H_SECONDS: usize = 8;

/// Width of "HH:MM"
const WIDTH_24H: usize = 5;

/// Width of "MM/DD/YY"
const WIDTH_DATE: usize = 8;

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Destination cannot hold the worst-case output
    BufferTooSmall,
}

/// Append the time portion of a value.
///
/// 12-hour output is "H:MM:SS AM"/"H:MM AM" with the hour not
/// zero-padded; 24-hour output is "HH:MM:SS"/"HH:MM".
pub fn format_time<const N: usize>(
    dt: &DateTime,
    out: &mut String<N>,
    twelve_hour: bool,
    with_seconds: bool,
) -> Result<(), FormatError> {
    let required = match (twelve_hour, with_seconds) {
        (true, true) => WIDTH_12H_SECONDS,
        (true, false) => WIDTH_12H,
        (false, true) => WIDTH_24H_SECONDS,
        (false, false) => WIDTH_24H,
    };
    if N.saturating_sub(out.len()) < required {
        return Err(FormatError::BufferTooSmall);
    }

    let result = if twelve_hour {
        let h12 = dt.hour12();
        if with_seconds {
            write!(
                out,
                "{}:{:02}:{:02} {}",
                h12.hour,
                dt.minute,
                dt.second,
                h12.meridiem.label()
            )
        } else {
            write!(out, "{}:{:02} {}", h12.hour, dt.minute, h12.meridiem.label())
        }
    } else if with_seconds {
        write!(out, "{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second)
    } else {
        write!(out, "{:02}:{:02}", dt.hour, dt.minute)
    };
    result.map_err(|_| FormatError::BufferTooSmall)
}

/// Append the date portion of a value as "MM/DD/YY".
pub fn format_date<const N: usize>(
    dt: &DateTime,
    out: &mut String<N>,
) -> Result<(), FormatError> {
    if N.saturating_sub(out.len()) < WIDTH_DATE {
        return Err(FormatError::BufferTooSmall);
    }

    write!(out, "{:02}/{:02}/{:02}", dt.month, dt.day, dt.year % 100)
        .map_err(|_| FormatError::BufferTooSmall)
}
