//! The alarm state machine.

use crate::datetime::DateTime;

/// Minutes a snoozed alarm stays quiet
pub const SNOOZE_MINUTES: u32 = 10;

/// Alarm runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Armed, waiting for the alarm time
    Off,
    /// Actively signaling
    Beeping,
    /// Silenced, waiting for the snooze deadline
    Snoozed,
    /// Never fires
    Disabled,
}

/// What the buzzer should be doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerState {
    Beeping,
    Silent,
}

/// A single alarm: configured time, runtime state, and the snooze
/// deadline once one has been set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    time: DateTime,
    state: AlarmState,
    snoozed_until: DateTime,
}

impl Alarm {
    /// Create an alarm for the given time-of-day.
    ///
    /// The snooze deadline starts at the alarm time; it is unused until
    /// a snooze happens.
    pub fn new(time: DateTime, enabled: bool) -> Self {
        let state = if enabled {
            AlarmState::Off
        } else {
            AlarmState::Disabled
        };
        Self {
            time,
            state,
            snoozed_until: time,
        }
    }

    /// Configured alarm time (time portion only is meaningful)
    pub fn time(&self) -> &DateTime {
        &self.time
    }

    /// Current state
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Snooze deadline (time portion only is meaningful)
    pub fn snoozed_until(&self) -> &DateTime {
        &self.snoozed_until
    }

    /// Actively signaling right now
    pub fn is_beeping(&self) -> bool {
        self.state == AlarmState::Beeping
    }

    /// What the buzzer should be doing
    pub fn buzzer_state(&self) -> BuzzerState {
        if self.is_beeping() {
            BuzzerState::Beeping
        } else {
            BuzzerState::Silent
        }
    }

    /// Check whether the alarm fires at the given time.
    ///
    /// Fires from `Off` when the alarm time matches by time-of-day, and
    /// from `Snoozed` when the snooze deadline matches. Call this once
    /// per distinct observed time value; while already `Beeping` it
    /// never fires again.
    pub fn check_trigger(&mut self, now: &DateTime) -> bool {
        if self.state == AlarmState::Off && self.time.time_equals(now) {
            self.state = AlarmState::Beeping;
            return true;
        }
        if self.state == AlarmState::Snoozed && self.snoozed_until.time_equals(now) {
            self.state = AlarmState::Beeping;
            return true;
        }
        false
    }

    /// Silence a beeping alarm until a fixed offset from now.
    ///
    /// The deadline is computed once, here. No effect unless beeping.
    pub fn snooze(&mut self, now: &DateTime) {
        if self.state == AlarmState::Beeping {
            self.state = AlarmState::Snoozed;
            self.snoozed_until = now.add_duration(0, SNOOZE_MINUTES, 0);
        }
    }

    /// Stop a beeping alarm; it stays armed for the next day.
    ///
    /// No effect unless beeping.
    pub fn dismiss(&mut self) {
        if self.state == AlarmState::Beeping {
            self.state = AlarmState::Off;
        }
    }

    /// Turn the alarm off entirely, whatever its state.
    pub fn disable(&mut self) {
        self.state = AlarmState::Disabled;
    }

    /// Set a new alarm time and re-arm, even if previously disabled.
    pub fn set_time(&mut self, time: DateTime) {
        self.time = time;
        self.state = AlarmState::Off;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::DayOfWeek;

    #[test]
    fn new_alarm_state_follows_enabled_flag() {
        let time = DateTime::from_hms(6, 30, 0);
        assert_eq!(Alarm::new(time, true).state(), AlarmState::Off);
        assert_eq!(Alarm::new(time, false).state(), AlarmState::Disabled);
    }

    #[test]
    fn triggers_exactly_on_time_match() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);

        assert!(!alarm.check_trigger(&DateTime::from_hms(6, 29, 59)));
        assert_eq!(alarm.state(), AlarmState::Off);

        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
        assert_eq!(alarm.state(), AlarmState::Beeping);
    }

    #[test]
    fn no_retrigger_while_beeping() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
        assert!(!alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
        assert!(!alarm.check_trigger(&DateTime::from_hms(6, 30, 1)));
        assert_eq!(alarm.state(), AlarmState::Beeping);
    }

    #[test]
    fn date_is_irrelevant_to_the_match() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        let now = DateTime {
            date_valid: true,
            day: 25,
            month: 6,
            year: 25,
            day_of_week: DayOfWeek::Wednesday,
            ..DateTime::from_hms(6, 30, 0)
        };
        assert!(alarm.check_trigger(&now));
    }

    #[test]
    fn snooze_sets_deadline_ten_minutes_out() {
        let mut alarm = Alarm::new(DateTime::from_hms(7, 0, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(7, 0, 0)));

        alarm.snooze(&DateTime::from_hms(7, 0, 5));
        assert_eq!(alarm.state(), AlarmState::Snoozed);

        let deadline = alarm.snoozed_until();
        assert_eq!(
            (deadline.hour, deadline.minute, deadline.second),
            (7, 10, 5)
        );
        assert!(!deadline.date_valid);
        assert_eq!(deadline.day_of_week, DayOfWeek::Invalid);

        assert!(!alarm.check_trigger(&DateTime::from_hms(7, 10, 4)));
        assert!(alarm.check_trigger(&DateTime::from_hms(7, 10, 5)));
        assert_eq!(alarm.state(), AlarmState::Beeping);
    }

    #[test]
    fn snooze_wraps_across_the_hour() {
        let mut alarm = Alarm::new(DateTime::from_hms(23, 55, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(23, 55, 0)));
        alarm.snooze(&DateTime::from_hms(23, 55, 0));

        let deadline = alarm.snoozed_until();
        assert_eq!((deadline.hour, deadline.minute), (0, 5));
    }

    #[test]
    fn snooze_ignored_unless_beeping() {
        let mut alarm = Alarm::new(DateTime::from_hms(7, 0, 0), true);
        alarm.snooze(&DateTime::from_hms(7, 0, 5));
        assert_eq!(alarm.state(), AlarmState::Off);
    }

    #[test]
    fn dismiss_rearms_for_the_next_match() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));

        alarm.dismiss();
        assert_eq!(alarm.state(), AlarmState::Off);

        // same time next day fires again
        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
    }

    #[test]
    fn dismiss_ignored_unless_beeping() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), false);
        alarm.dismiss();
        assert_eq!(alarm.state(), AlarmState::Disabled);
    }

    #[test]
    fn disable_is_unconditional() {
        let mut alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
        alarm.disable();
        assert_eq!(alarm.state(), AlarmState::Disabled);
        assert!(!alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
    }

    #[test]
    fn set_time_rearms_a_disabled_alarm() {
        let mut alarm = Alarm::new(DateTime::from_hms(0, 0, 0), false);
        alarm.set_time(DateTime::from_hms(6, 30, 0));
        assert_eq!(alarm.state(), AlarmState::Off);

        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
        assert_eq!(alarm.buzzer_state(), BuzzerState::Beeping);

        alarm.dismiss();
        assert_eq!(alarm.buzzer_state(), BuzzerState::Silent);
        assert!(alarm.check_trigger(&DateTime::from_hms(6, 30, 0)));
    }
}
