//! Screen content for every menu page.
//!
//! Each function writes one complete page into the `Screen` buffer.
//! Line texts are a fixed contract with the deployed device and must
//! not be reworded.

use core::fmt::Write;

use heapless::String;
use orthros_display::{Screen, LINE_LEN};

use crate::alarm::{Alarm, AlarmState};
use crate::datetime::{format_date, format_time, DateTime};

use super::fields::TimeField;

/// Shown when an invalid field selector is reached
pub(crate) const FATAL_LINE: &str = "Error. Restart Device.";

type Line = String<LINE_LEN>;

/// The live clock page: time on top, date (or alarm peek) below.
pub(crate) fn time_display(
    screen: &mut Screen,
    time: &DateTime,
    alarm: &Alarm,
    show_alarm_time: bool,
) {
    let mut line1 = Line::new();
    let _ = format_time(time, &mut line1, true, true);
    screen.print_line_centered(0, &line1);

    let mut line2 = Line::new();
    if show_alarm_time {
        alarm_line(alarm, &mut line2);
    } else if !time.date_valid {
        let _ = line2.push_str("No Date Set");
    } else {
        let _ = write!(line2, "{} ", time.day_of_week.short_name());
        let _ = format_date(time, &mut line2);
    }
    screen.print_line_centered(1, &line2);
}

/// The alarm status line shown while the peek button is held.
fn alarm_line(alarm: &Alarm, out: &mut Line) {
    match alarm.state() {
        AlarmState::Disabled => {
            let _ = out.push_str("No Alarm Set");
        }
        AlarmState::Off | AlarmState::Beeping => {
            let _ = out.push_str("Alarm ");
            let _ = format_time(alarm.time(), out, true, false);
        }
        AlarmState::Snoozed => {
            let _ = out.push_str("Snoozed ");
            let _ = format_time(alarm.snoozed_until(), out, true, false);
        }
    }
}

pub(crate) fn main_settings(screen: &mut Screen) {
    screen.print_line(0, "1: Set Time/Date");
    screen.print_line(1, "2: Set Alarm");
}

pub(crate) fn time_date_selection(screen: &mut Screen) {
    screen.print_line(0, "1: Set Time");
    screen.print_line(1, "2: Set Date");
}

pub(crate) fn alarm_selection(screen: &mut Screen) {
    screen.print_line(0, "1: Set Alarm");
    screen.print_line(1, "2: Clear Alarm");
}

/// The time editor: draft time on top, active field label below.
pub(crate) fn setting_time(screen: &mut Screen, draft: &DateTime, field: TimeField) {
    let mut line = Line::new();
    let _ = format_time(draft, &mut line, true, true);
    screen.print_line_centered(0, &line);

    let label = match field {
        TimeField::Hour => "Set Hour",
        TimeField::Minute => "Set Minute",
        TimeField::Second => "Set Second",
        TimeField::Confirm => "Confirm Time",
        _ => FATAL_LINE,
    };
    screen.print_line_centered(1, label);
}

/// The date editor: active field label on top, draft date below.
pub(crate) fn setting_date(screen: &mut Screen, draft: &DateTime, field: TimeField) {
    let mut line = Line::new();
    let _ = write!(line, "{} ", draft.day_of_week.short_name());
    let _ = format_date(draft, &mut line);
    screen.print_line_centered(1, &line);

    let label = match field {
        TimeField::DayOfWeek => "Set Day of Week",
        TimeField::Month => "Set Month",
        TimeField::Day => "Set Day",
        TimeField::Year => "Set Year",
        TimeField::Confirm => "Confirm Date",
        _ => FATAL_LINE,
    };
    screen.print_line_centered(0, label);
}

/// The alarm-time editor: draft time on top, active field label below.
pub(crate) fn setting_alarm(screen: &mut Screen, draft: &DateTime, field: TimeField) {
    let mut line = Line::new();
    let _ = format_time(draft, &mut line, true, true);
    screen.print_line_centered(0, &line);

    let label = match field {
        TimeField::Hour => "Alarm Set Hour",
        TimeField::Minute => "Alarm Set Minute",
        TimeField::Second => "Alarm Set Second",
        TimeField::Confirm => "Confirm Alarm",
        _ => FATAL_LINE,
    };
    screen.print_line_centered(1, label);
}

/// The frozen fatal-fault line.
pub(crate) fn fatal_error(screen: &mut Screen, row: usize) {
    screen.print_line_centered(row, FATAL_LINE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::DayOfWeek;

    fn dated_time() -> DateTime {
        DateTime {
            date_valid: true,
            day: 25,
            month: 6,
            year: 25,
            day_of_week: DayOfWeek::Wednesday,
            ..DateTime::from_hms(7, 9, 5)
        }
    }

    #[test]
    fn time_display_shows_time_and_date() {
        let mut screen = Screen::new();
        let alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        time_display(&mut screen, &dated_time(), &alarm, false);

        assert_eq!(screen.line(0), Some("   7:09:05 AM   "));
        assert_eq!(screen.line(1), Some("  Wed 06/25/25  "));
    }

    #[test]
    fn time_display_without_date_says_so() {
        let mut screen = Screen::new();
        let alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        time_display(&mut screen, &DateTime::from_hms(0, 0, 0), &alarm, false);

        assert_eq!(screen.line(0), Some("  12:00:00 AM   "));
        assert_eq!(screen.line(1), Some("  No Date Set   "));
    }

    #[test]
    fn alarm_peek_line_by_state() {
        let mut screen = Screen::new();
        let time = dated_time();

        let alarm = Alarm::new(DateTime::from_hms(6, 30, 0), false);
        time_display(&mut screen, &time, &alarm, true);
        assert_eq!(screen.line(1), Some("  No Alarm Set  "));

        let alarm = Alarm::new(DateTime::from_hms(6, 30, 0), true);
        time_display(&mut screen, &time, &alarm, true);
        assert_eq!(screen.line(1), Some(" Alarm 6:30 AM  "));

        let mut alarm = Alarm::new(DateTime::from_hms(19, 0, 0), true);
        assert!(alarm.check_trigger(&DateTime::from_hms(19, 0, 0)));
        alarm.snooze(&DateTime::from_hms(19, 0, 0));
        time_display(&mut screen, &time, &alarm, true);
        assert_eq!(screen.line(1), Some("Snoozed 7:10 PM "));
    }

    #[test]
    fn menu_pages_use_the_fixed_texts() {
        let mut screen = Screen::new();

        main_settings(&mut screen);
        assert_eq!(screen.line(0), Some("1: Set Time/Date"));
        assert_eq!(screen.line(1), Some("2: Set Alarm    "));

        time_date_selection(&mut screen);
        assert_eq!(screen.line(0), Some("1: Set Time     "));
        assert_eq!(screen.line(1), Some("2: Set Date     "));

        alarm_selection(&mut screen);
        assert_eq!(screen.line(0), Some("1: Set Alarm    "));
        assert_eq!(screen.line(1), Some("2: Clear Alarm  "));
    }

    #[test]
    fn time_editor_labels_follow_the_field() {
        let mut screen = Screen::new();
        let draft = DateTime::from_hms(13, 59, 59);

        setting_time(&mut screen, &draft, TimeField::Hour);
        assert_eq!(screen.line(0), Some("   1:59:59 PM   "));
        assert_eq!(screen.line(1), Some("    Set Hour    "));

        setting_time(&mut screen, &draft, TimeField::Confirm);
        assert_eq!(screen.line(1), Some("  Confirm Time  "));
    }

    #[test]
    fn date_editor_puts_the_label_on_top() {
        let mut screen = Screen::new();
        let draft = dated_time();

        setting_date(&mut screen, &draft, TimeField::DayOfWeek);
        assert_eq!(screen.line(0), Some("Set Day of Week "));
        assert_eq!(screen.line(1), Some("  Wed 06/25/25  "));

        setting_date(&mut screen, &draft, TimeField::Year);
        assert_eq!(screen.line(0), Some("    Set Year    "));
    }

    #[test]
    fn date_editor_renders_an_unset_day_of_week_blank() {
        let mut screen = Screen::new();
        let mut draft = dated_time();
        draft.day_of_week = DayOfWeek::Invalid;

        setting_date(&mut screen, &draft, TimeField::Month);
        assert_eq!(screen.line(1), Some("    06/25/25    "));
    }

    #[test]
    fn alarm_editor_labels_follow_the_field() {
        let mut screen = Screen::new();
        let draft = DateTime::from_hms(6, 30, 0);

        setting_alarm(&mut screen, &draft, TimeField::Minute);
        assert_eq!(screen.line(1), Some("Alarm Set Minute"));

        setting_alarm(&mut screen, &draft, TimeField::Confirm);
        assert_eq!(screen.line(1), Some(" Confirm Alarm  "));
    }

    #[test]
    fn fatal_line_is_clipped_by_the_display() {
        let mut screen = Screen::new();
        fatal_error(&mut screen, 1);
        assert_eq!(screen.line(1), Some("Error. Restart D"));
    }
}
