//! Time-record encoding and decoding.
//!
//! A record is one byte per field, in register order: second, minute,
//! hour, day-of-week, day, month, year.

/// Register index of the seconds field
pub const REG_SECOND: usize = 0;

/// Register index of the minutes field
pub const REG_MINUTE: usize = 1;

/// Register index of the hours field
pub const REG_HOUR: usize = 2;

/// Register index of the day-of-week field
pub const REG_DAY_OF_WEEK: usize = 3;

/// Register index of the day-of-month field
pub const REG_DAY: usize = 4;

/// Register index of the month field
pub const REG_MONTH: usize = 5;

/// Register index of the two-digit year field
pub const REG_YEAR: usize = 6;

/// Record length in bytes
pub const RECORD_LEN: usize = 7;

/// Errors that can occur during record encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Destination buffer cannot hold a full record
    BufferTooSmall,
    /// Source buffer does not contain a full record
    Truncated,
}

/// One decoded time register block.
///
/// Field values are plain binary; the day-of-week field uses the chip's
/// 1-7 encoding with 0 left unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeRecord {
    /// Seconds, 0-59
    pub second: u8,
    /// Minutes, 0-59
    pub minute: u8,
    /// Hours, 0-23
    pub hour: u8,
    /// Day of week, 1-7
    pub day_of_week: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Two-digit year, 0-99
    pub year: u8,
}

impl TimeRecord {
    /// Encode this record into a byte buffer in register order.
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, RecordError> {
        if buffer.len() < RECORD_LEN {
            return Err(RecordError::BufferTooSmall);
        }

        buffer[REG_SECOND] = self.second;
        buffer[REG_MINUTE] = self.minute;
        buffer[REG_HOUR] = self.hour;
        buffer[REG_DAY_OF_WEEK] = self.day_of_week;
        buffer[REG_DAY] = self.day;
        buffer[REG_MONTH] = self.month;
        buffer[REG_YEAR] = self.year;

        Ok(RECORD_LEN)
    }

    /// Encode this record into a fresh byte array.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0u8; RECORD_LEN];
        // cannot fail, the array is exactly RECORD_LEN long
        let _ = self.encode(&mut bytes);
        bytes
    }

    /// Decode a record from a byte buffer in register order.
    pub fn decode(data: &[u8]) -> Result<Self, RecordError> {
        if data.len() < RECORD_LEN {
            return Err(RecordError::Truncated);
        }

        Ok(Self {
            second: data[REG_SECOND],
            minute: data[REG_MINUTE],
            hour: data[REG_HOUR],
            day_of_week: data[REG_DAY_OF_WEEK],
            day: data[REG_DAY],
            month: data[REG_MONTH],
            year: data[REG_YEAR],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TimeRecord {
        TimeRecord {
            second: 30,
            minute: 45,
            hour: 13,
            day_of_week: 4,
            day: 25,
            month: 6,
            year: 25,
        }
    }

    #[test]
    fn encode_uses_register_order() {
        let bytes = sample_record().to_bytes();
        assert_eq!(bytes, [30, 45, 13, 4, 25, 6, 25]);
    }

    #[test]
    fn decode_uses_register_order() {
        let record = TimeRecord::decode(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(record.second, 1);
        assert_eq!(record.minute, 2);
        assert_eq!(record.hour, 3);
        assert_eq!(record.day_of_week, 4);
        assert_eq!(record.day, 5);
        assert_eq!(record.month, 6);
        assert_eq!(record.year, 7);
    }

    #[test]
    fn round_trip() {
        let record = sample_record();
        let decoded = TimeRecord::decode(&record.to_bytes()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn encode_rejects_short_buffer() {
        let mut buffer = [0u8; RECORD_LEN - 1];
        assert_eq!(
            sample_record().encode(&mut buffer),
            Err(RecordError::BufferTooSmall)
        );
    }

    #[test]
    fn encode_reports_written_length() {
        let mut buffer = [0u8; RECORD_LEN + 3];
        assert_eq!(sample_record().encode(&mut buffer), Ok(RECORD_LEN));
    }

    #[test]
    fn decode_rejects_truncated_input() {
        assert_eq!(
            TimeRecord::decode(&[1, 2, 3]),
            Err(RecordError::Truncated)
        );
    }
}
