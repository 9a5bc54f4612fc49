//! The `DateTime` value type and its arithmetic.

use orthros_protocol::TimeRecord;

/// Days of the week, in the RTC's 1-7 encoding with 0 as the invalid
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayOfWeek {
    /// No day of week assigned
    #[default]
    Invalid = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl DayOfWeek {
    /// Decode the RTC's 1-7 encoding; anything else is the invalid
    /// sentinel.
    pub fn from_index(raw: u8) -> Self {
        match raw {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            7 => Self::Saturday,
            _ => Self::Invalid,
        }
    }

    /// The RTC encoding of this day
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Full day name, empty for the invalid sentinel
    pub fn name(self) -> &'static str {
        match self {
            Self::Invalid => "",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Three-letter day name, empty for the invalid sentinel
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Invalid => "",
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

/// AM/PM half of the 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// "AM" or "PM"
    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// 12-hour clock view of an hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hour12 {
    /// Hour, 1-12
    pub hour: u8,
    /// AM or PM
    pub meridiem: Meridiem,
}

/// A calendar/clock value.
///
/// The date fields (`day`, `month`, `year`, `day_of_week`) are only
/// meaningful while `date_valid` is set; operations that drop the date
/// also reset `day_of_week` to the invalid sentinel.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Seconds, 0-59
    pub second: u8,
    /// Minutes, 0-59
    pub minute: u8,
    /// Hours, 0-23
    pub hour: u8,
    /// Whether day/month/year carry a real date
    pub date_valid: bool,
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Two-digit year, 0-99
    pub year: u8,
    /// Day of week
    pub day_of_week: DayOfWeek,
}

impl Default for DateTime {
    /// Midnight with no date assigned
    fn default() -> Self {
        Self {
            second: 0,
            minute: 0,
            hour: 0,
            date_valid: false,
            day: 1,
            month: 1,
            year: 0,
            day_of_week: DayOfWeek::Invalid,
        }
    }
}

impl PartialEq for DateTime {
    /// Full equality: time, validity and day-of-week always compare;
    /// the date fields only compare when both sides carry a valid date.
    fn eq(&self, other: &Self) -> bool {
        self.second == other.second
            && self.minute == other.minute
            && self.hour == other.hour
            && self.date_valid == other.date_valid
            && (!self.date_valid
                || (self.day == other.day
                    && self.month == other.month
                    && self.year == other.year))
            && self.day_of_week == other.day_of_week
    }
}

impl Eq for DateTime {}

impl DateTime {
    /// A time-of-day value with no date
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            second,
            minute,
            hour,
            ..Self::default()
        }
    }

    /// Compare only the time portion (alarm matching)
    pub fn time_equals(&self, other: &Self) -> bool {
        self.hour == other.hour && self.minute == other.minute && self.second == other.second
    }

    /// 12-hour clock view of the hour field
    pub fn hour12(&self) -> Hour12 {
        let (hour, meridiem) = match self.hour {
            0 => (12, Meridiem::Am),
            h if h < 12 => (h, Meridiem::Am),
            12 => (12, Meridiem::Pm),
            h => (h - 12, Meridiem::Pm),
        };
        Hour12 { hour, meridiem }
    }

    /// Add a duration to the time portion, normalizing seconds into
    /// minutes and minutes into hours, with the hour wrapping modulo 24.
    ///
    /// This is time-of-day arithmetic only: the result never advances
    /// the calendar date, so its date is dropped even across a midnight
    /// rollover.
    #[must_use]
    pub fn add_duration(&self, hours: u32, minutes: u32, seconds: u32) -> Self {
        let mut second = u32::from(self.second) + seconds;
        let mut minute = u32::from(self.minute) + second / 60;
        second %= 60;

        minute += minutes;
        let mut hour = u32::from(self.hour) + minute / 60;
        minute %= 60;

        hour += hours;
        hour %= 24;

        Self {
            second: second as u8,
            minute: minute as u8,
            hour: hour as u8,
            date_valid: false,
            day_of_week: DayOfWeek::Invalid,
            ..*self
        }
    }
}

impl From<TimeRecord> for DateTime {
    /// Decode a time register record; a fetched record always carries a
    /// date.
    fn from(record: TimeRecord) -> Self {
        Self {
            second: record.second,
            minute: record.minute,
            hour: record.hour,
            date_valid: true,
            day: record.day,
            month: record.month,
            year: record.year,
            day_of_week: DayOfWeek::from_index(record.day_of_week),
        }
    }
}

impl From<&DateTime> for TimeRecord {
    fn from(dt: &DateTime) -> Self {
        Self {
            second: dt.second,
            minute: dt.minute,
            hour: dt.hour,
            day_of_week: dt.day_of_week.index(),
            day: dt.day,
            month: dt.month,
            year: dt.year,
        }
    }
}

/// Leap-year test over a full (four-digit) year
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a month, 0 for an invalid month
pub fn days_in_month(month: u8, leap_year: bool) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if leap_year {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
