//! Time source/sink trait for the external clock chip.

use crate::datetime::DateTime;

/// Trait for the authoritative time store (the RTC).
///
/// Implementations own the bus transaction and the chip's byte
/// encoding; the core exchanges decoded values only. The persisted
/// representation follows the `orthros-protocol` record layout.
pub trait TimeStore {
    /// Implementation-specific failure (bus error, chip absent, ...)
    type Error;

    /// Fetch the current time.
    ///
    /// On failure the caller keeps its last known value and logs the
    /// failure; there is no retry.
    fn read_time(&mut self) -> Result<DateTime, Self::Error>;

    /// Persist a new time.
    ///
    /// A failure is logged by the caller but does not roll back the
    /// in-memory commit that preceded it.
    fn write_time(&mut self, time: &DateTime) -> Result<(), Self::Error>;
}
