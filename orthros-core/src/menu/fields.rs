//! Field selectors and their edit-sequence transition tables.
//!
//! Stepping is a lookup in an explicit table per sequence, never
//! arithmetic on the enum's ordinal, so the declaration order carries no
//! meaning. A selector outside the active sequence steps to a fault.

/// The currently-editable field within a multi-step edit sequence.
///
/// The time sequence runs Hour → Minute → Second → Confirm; the date
/// sequence runs DayOfWeek → Month → Day → Year → Confirm. `None` is
/// only valid outside editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    DayOfWeek,
    Month,
    Day,
    Year,
    Hour,
    Minute,
    Second,
    Confirm,
    /// Not editing
    None,
}

/// Outcome of advancing the selector with the confirm button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Move to the next field in the sequence
    Next(TimeField),
    /// Commit the draft
    Commit,
    /// Selector was not part of this sequence
    Fault,
}

/// Outcome of stepping the selector back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Retreat {
    /// Move to the previous field in the sequence
    Prev(TimeField),
    /// Leave the editor for the parent menu, discarding the draft
    Exit,
    /// Selector was not part of this sequence
    Fault,
}

impl TimeField {
    /// Forward step in the time sequence
    pub fn advance_time(self) -> Advance {
        match self {
            Self::Hour => Advance::Next(Self::Minute),
            Self::Minute => Advance::Next(Self::Second),
            Self::Second => Advance::Next(Self::Confirm),
            Self::Confirm => Advance::Commit,
            _ => Advance::Fault,
        }
    }

    /// Backward step in the time sequence.
    ///
    /// Backing out of the first field exits the editor; backing out of
    /// Confirm returns to the last substantive field.
    pub fn retreat_time(self) -> Retreat {
        match self {
            Self::Hour => Retreat::Exit,
            Self::Minute => Retreat::Prev(Self::Hour),
            Self::Second => Retreat::Prev(Self::Minute),
            Self::Confirm => Retreat::Prev(Self::Second),
            _ => Retreat::Fault,
        }
    }

    /// Forward step in the date sequence
    pub fn advance_date(self) -> Advance {
        match self {
            Self::DayOfWeek => Advance::Next(Self::Month),
            Self::Month => Advance::Next(Self::Day),
            Self::Day => Advance::Next(Self::Year),
            Self::Year => Advance::Next(Self::Confirm),
            Self::Confirm => Advance::Commit,
            _ => Advance::Fault,
        }
    }

    /// Backward step in the date sequence
    pub fn retreat_date(self) -> Retreat {
        match self {
            Self::DayOfWeek => Retreat::Exit,
            Self::Month => Retreat::Prev(Self::DayOfWeek),
            Self::Day => Retreat::Prev(Self::Month),
            Self::Year => Retreat::Prev(Self::Day),
            Self::Confirm => Retreat::Prev(Self::Year),
            _ => Retreat::Fault,
        }
    }
}
