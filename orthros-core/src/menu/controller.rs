//! The alarm-clock controller.
//!
//! Coordinates the live time, the alarm, and the menu state machine.
//! Inputs arrive as debounced button states and a normalized knob value;
//! outputs are screen writes and commits through the injected time
//! store.

use orthros_display::Screen;

use crate::alarm::{Alarm, BuzzerState};
use crate::button::ButtonState;
use crate::datetime::{days_in_month, is_leap_year, DateTime, DayOfWeek};
use crate::traits::TimeStore;

use super::fields::{Advance, Retreat, TimeField};
use super::screens;

/// Century offset applied to the two-digit year for leap-year tests
const YEAR_OFFSET: u32 = 2000;

/// Top-level menu mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Live clock display
    DisplayTime,
    /// "1: Set Time/Date" / "2: Set Alarm"
    MainSettings,
    /// "1: Set Time" / "2: Set Date"
    TimeDateSelection,
    /// Field-by-field time editor
    SettingTime,
    /// Field-by-field date editor
    SettingDate,
    /// "1: Set Alarm" / "2: Clear Alarm"
    AlarmSelection,
    /// Field-by-field alarm-time editor
    SettingAlarmTime,
}

/// Unrecoverable control-flow faults.
///
/// Reaching one means a field selector escaped its edit sequence, which
/// is a logic defect, not a runtime condition; the controller renders
/// the error line and freezes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Invalid selector in the time editor
    InvalidTimeField,
    /// Invalid selector in the date editor
    InvalidDateField,
    /// Invalid selector in the alarm editor
    InvalidAlarmField,
}

/// The edited-but-not-yet-committed value inside an editor
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct EditDraft {
    time: DateTime,
    field: TimeField,
}

/// The alarm clock: live time, alarm, and menu in one place.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmClock {
    current_time: DateTime,
    alarm: Alarm,
    state: MenuState,
    draft: EditDraft,
    show_alarm_time: bool,
    fault: Option<Fault>,
}

impl AlarmClock {
    /// Create a clock showing the given time, with the alarm unset.
    pub fn new(time: DateTime) -> Self {
        Self {
            current_time: time,
            alarm: Alarm::new(time, false),
            state: MenuState::DisplayTime,
            draft: EditDraft {
                time,
                field: TimeField::None,
            },
            show_alarm_time: false,
            fault: None,
        }
    }

    /// Create a clock from the time store's current value.
    ///
    /// A failed read is logged and the clock starts at midnight with no
    /// date.
    pub fn from_store<T: TimeStore>(store: &mut T) -> Self {
        let time = match store.read_time() {
            Ok(time) => time,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("initial time read failed, starting from midnight");
                DateTime::default()
            }
        };
        Self::new(time)
    }

    /// Current live time
    pub fn current_time(&self) -> &DateTime {
        &self.current_time
    }

    /// The alarm
    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    /// Mutable access to the alarm, for the embedding layer to restore
    /// or arm it outside the menu flow
    pub fn alarm_mut(&mut self) -> &mut Alarm {
        &mut self.alarm
    }

    /// Current menu mode
    pub fn menu_state(&self) -> MenuState {
        self.state
    }

    /// Whether any settings page is open
    pub fn in_settings_menu(&self) -> bool {
        self.state != MenuState::DisplayTime
    }

    /// Whether a field editor is open (the knob is live)
    pub fn is_editing(&self) -> bool {
        matches!(
            self.state,
            MenuState::SettingTime | MenuState::SettingDate | MenuState::SettingAlarmTime
        )
    }

    /// The fault the controller froze on, if any
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// What the buzzer should be doing
    pub fn buzzer_state(&self) -> BuzzerState {
        self.alarm.buzzer_state()
    }

    /// Fetch the time from the store and apply it.
    ///
    /// A failed read keeps the last known value. An unchanged value is a
    /// no-op, so the alarm trigger check runs once per distinct observed
    /// time.
    pub fn fetch_time<T: TimeStore>(&mut self, store: &mut T, screen: &mut Screen) {
        if self.fault.is_some() {
            return;
        }

        let new_time = match store.read_time() {
            Ok(time) => time,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("time read failed, keeping last known time");
                return;
            }
        };

        if self.current_time == new_time {
            return;
        }

        self.current_time = new_time;
        self.render_time_display(screen);
        self.alarm.check_trigger(&self.current_time);
    }

    /// Dispatch one round of debounced button states.
    ///
    /// Button roles: `menu_btn` opens/descends menus, `select_btn`
    /// selects and confirms (and peeks/dismisses on the clock page),
    /// `back_btn` steps back (and snoozes on the clock page).
    pub fn handle_buttons<T: TimeStore>(
        &mut self,
        menu_btn: ButtonState,
        select_btn: ButtonState,
        back_btn: ButtonState,
        store: &mut T,
        screen: &mut Screen,
    ) {
        if self.fault.is_some() {
            return;
        }

        match self.state {
            MenuState::DisplayTime => self.on_display_time(menu_btn, select_btn, back_btn, screen),
            MenuState::MainSettings => {
                self.on_main_settings(menu_btn, select_btn, back_btn, screen);
            }
            MenuState::TimeDateSelection => {
                self.on_time_date_selection(menu_btn, select_btn, back_btn, screen);
            }
            MenuState::SettingTime => self.on_setting_time(select_btn, back_btn, store, screen),
            MenuState::SettingDate => self.on_setting_date(select_btn, back_btn, store, screen),
            MenuState::AlarmSelection => {
                self.on_alarm_selection(menu_btn, select_btn, back_btn, screen);
            }
            MenuState::SettingAlarmTime => self.on_setting_alarm(select_btn, back_btn, screen),
        }
    }

    /// Apply one knob reading to the active editing field.
    ///
    /// Ignored outside the three editors and on the Confirm step.
    pub fn handle_scalar(&mut self, value: f32, screen: &mut Screen) {
        if self.fault.is_some() {
            return;
        }

        match self.state {
            MenuState::SettingTime => self.on_scalar_time(value, screen),
            MenuState::SettingDate => self.on_scalar_date(value, screen),
            MenuState::SettingAlarmTime => self.on_scalar_alarm(value, screen),
            _ => {}
        }
    }

    fn on_display_time(
        &mut self,
        menu_btn: ButtonState,
        select_btn: ButtonState,
        back_btn: ButtonState,
        screen: &mut Screen,
    ) {
        if menu_btn.just_pushed() && !self.alarm.is_beeping() {
            self.state = MenuState::MainSettings;
            screens::main_settings(screen);
        }

        if select_btn.is_held() && !self.alarm.is_beeping() {
            if !self.show_alarm_time {
                self.show_alarm_time = true;
                self.render_time_display(screen);
            }
        } else if self.show_alarm_time {
            self.show_alarm_time = false;
            self.render_time_display(screen);
        }

        if select_btn.just_pushed() && self.alarm.is_beeping() {
            self.alarm.dismiss();
            self.render_time_display(screen);
        }

        if back_btn.just_pushed() && self.alarm.is_beeping() {
            self.alarm.snooze(&self.current_time);
            self.render_time_display(screen);
        }
    }

    fn on_main_settings(
        &mut self,
        menu_btn: ButtonState,
        select_btn: ButtonState,
        back_btn: ButtonState,
        screen: &mut Screen,
    ) {
        if menu_btn.just_pushed() {
            self.state = MenuState::TimeDateSelection;
            screens::time_date_selection(screen);
        }
        if select_btn.just_pushed() {
            self.state = MenuState::AlarmSelection;
            screens::alarm_selection(screen);
        }
        if back_btn.just_pushed() {
            self.state = MenuState::DisplayTime;
            self.render_time_display(screen);
        }
    }

    fn on_time_date_selection(
        &mut self,
        menu_btn: ButtonState,
        select_btn: ButtonState,
        back_btn: ButtonState,
        screen: &mut Screen,
    ) {
        if menu_btn.just_pushed() {
            self.state = MenuState::SettingTime;
            self.draft = EditDraft {
                time: self.current_time,
                field: TimeField::Hour,
            };
            screens::setting_time(screen, &self.draft.time, self.draft.field);
        }
        if select_btn.just_pushed() {
            self.state = MenuState::SettingDate;
            self.draft = EditDraft {
                time: self.current_time,
                field: TimeField::DayOfWeek,
            };
            screens::setting_date(screen, &self.draft.time, self.draft.field);
        }
        if back_btn.just_pushed() {
            self.state = MenuState::MainSettings;
            screens::main_settings(screen);
        }
    }

    fn on_setting_time<T: TimeStore>(
        &mut self,
        select_btn: ButtonState,
        back_btn: ButtonState,
        store: &mut T,
        screen: &mut Screen,
    ) {
        if select_btn.just_pushed() {
            match self.draft.field.advance_time() {
                Advance::Next(next) => {
                    self.draft.field = next;
                    screens::setting_time(screen, &self.draft.time, next);
                }
                Advance::Commit => {
                    self.current_time = self.draft.time;
                    self.write_back(store);
                    self.state = MenuState::DisplayTime;
                    self.render_time_display(screen);
                }
                Advance::Fault => {
                    return self.raise_fault(Fault::InvalidTimeField, 1, screen);
                }
            }
        }

        if back_btn.just_pushed() {
            match self.draft.field.retreat_time() {
                Retreat::Prev(prev) => {
                    self.draft.field = prev;
                    screens::setting_time(screen, &self.draft.time, prev);
                }
                Retreat::Exit => {
                    self.state = MenuState::TimeDateSelection;
                    screens::time_date_selection(screen);
                }
                Retreat::Fault => self.raise_fault(Fault::InvalidTimeField, 1, screen),
            }
        }
    }

    fn on_setting_date<T: TimeStore>(
        &mut self,
        select_btn: ButtonState,
        back_btn: ButtonState,
        store: &mut T,
        screen: &mut Screen,
    ) {
        if select_btn.just_pushed() {
            match self.draft.field.advance_date() {
                Advance::Next(next) => {
                    self.draft.field = next;
                    screens::setting_date(screen, &self.draft.time, next);
                }
                Advance::Commit => {
                    self.current_time = self.draft.time;
                    self.write_back(store);
                    self.state = MenuState::DisplayTime;
                    self.render_time_display(screen);
                }
                Advance::Fault => {
                    return self.raise_fault(Fault::InvalidDateField, 0, screen);
                }
            }
        }

        if back_btn.just_pushed() {
            match self.draft.field.retreat_date() {
                Retreat::Prev(prev) => {
                    self.draft.field = prev;
                    screens::setting_date(screen, &self.draft.time, prev);
                }
                Retreat::Exit => {
                    self.state = MenuState::TimeDateSelection;
                    screens::time_date_selection(screen);
                }
                Retreat::Fault => self.raise_fault(Fault::InvalidDateField, 0, screen),
            }
        }
    }

    fn on_alarm_selection(
        &mut self,
        menu_btn: ButtonState,
        select_btn: ButtonState,
        back_btn: ButtonState,
        screen: &mut Screen,
    ) {
        if menu_btn.just_pushed() {
            self.state = MenuState::SettingAlarmTime;
            self.draft = EditDraft {
                time: *self.alarm.time(),
                field: TimeField::Hour,
            };
            screens::setting_alarm(screen, &self.draft.time, self.draft.field);
        }
        if select_btn.just_pushed() {
            self.state = MenuState::DisplayTime;
            self.alarm.disable();
            self.render_time_display(screen);
        }
        if back_btn.just_pushed() {
            self.state = MenuState::MainSettings;
            screens::main_settings(screen);
        }
    }

    fn on_setting_alarm(
        &mut self,
        select_btn: ButtonState,
        back_btn: ButtonState,
        screen: &mut Screen,
    ) {
        if select_btn.just_pushed() {
            match self.draft.field.advance_time() {
                Advance::Next(next) => {
                    self.draft.field = next;
                    screens::setting_alarm(screen, &self.draft.time, next);
                }
                Advance::Commit => {
                    self.alarm.set_time(self.draft.time);
                    self.state = MenuState::DisplayTime;
                    self.render_time_display(screen);
                }
                Advance::Fault => {
                    return self.raise_fault(Fault::InvalidAlarmField, 1, screen);
                }
            }
        }

        if back_btn.just_pushed() {
            match self.draft.field.retreat_time() {
                Retreat::Prev(prev) => {
                    self.draft.field = prev;
                    screens::setting_alarm(screen, &self.draft.time, prev);
                }
                Retreat::Exit => {
                    self.state = MenuState::AlarmSelection;
                    screens::alarm_selection(screen);
                }
                Retreat::Fault => self.raise_fault(Fault::InvalidAlarmField, 1, screen),
            }
        }
    }

    fn on_scalar_time(&mut self, value: f32, screen: &mut Screen) {
        match self.draft.field {
            TimeField::Hour => self.draft.time.hour = scale_to_field(value, 0.0, 24.0, 23),
            TimeField::Minute => self.draft.time.minute = scale_to_field(value, 0.0, 60.0, 59),
            TimeField::Second => self.draft.time.second = scale_to_field(value, 0.0, 60.0, 59),
            _ => return,
        }
        screens::setting_time(screen, &self.draft.time, self.draft.field);
    }

    fn on_scalar_date(&mut self, value: f32, screen: &mut Screen) {
        match self.draft.field {
            TimeField::DayOfWeek => {
                self.draft.time.day_of_week =
                    DayOfWeek::from_index(scale_to_field(value, 1.0, 8.0, 7));
            }
            TimeField::Month => self.draft.time.month = scale_to_field(value, 1.0, 13.0, 12),
            TimeField::Day => {
                // the day's range follows the currently-drafted month and year
                let leap = is_leap_year(YEAR_OFFSET + u32::from(self.draft.time.year));
                let max_day = days_in_month(self.draft.time.month, leap);
                self.draft.time.day =
                    scale_to_field(value, 1.0, f32::from(max_day) + 1.0, max_day);
            }
            TimeField::Year => self.draft.time.year = scale_to_field(value, 0.0, 100.0, 99),
            _ => return,
        }
        self.draft.time.date_valid = true;
        screens::setting_date(screen, &self.draft.time, self.draft.field);
    }

    fn on_scalar_alarm(&mut self, value: f32, screen: &mut Screen) {
        match self.draft.field {
            TimeField::Hour => self.draft.time.hour = scale_to_field(value, 0.0, 24.0, 23),
            TimeField::Minute => self.draft.time.minute = scale_to_field(value, 0.0, 60.0, 59),
            TimeField::Second => self.draft.time.second = scale_to_field(value, 0.0, 60.0, 59),
            _ => return,
        }
        screens::setting_alarm(screen, &self.draft.time, self.draft.field);
    }

    /// Repaint the clock page; does nothing while another page is open.
    fn render_time_display(&self, screen: &mut Screen) {
        if self.state == MenuState::DisplayTime {
            screens::time_display(screen, &self.current_time, &self.alarm, self.show_alarm_time);
        }
    }

    fn write_back<T: TimeStore>(&mut self, store: &mut T) {
        if store.write_time(&self.current_time).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("time write-back failed, keeping in-memory time");
        }
    }

    fn raise_fault(&mut self, fault: Fault, row: usize, screen: &mut Screen) {
        #[cfg(feature = "defmt")]
        defmt::error!("invalid field selector reached, freezing controller");
        screens::fatal_error(screen, row);
        self.fault = Some(fault);
    }
}

/// Linearly map a value from one range onto another; a degenerate input
/// range yields the midpoint of the output range.
fn scale_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return (out_min + out_max) * 0.5;
    }
    let normalized = (value - in_min) / (in_max - in_min);
    normalized * (out_max - out_min) + out_min
}

/// Map a normalized knob value onto `[out_min, out_max_exclusive)`,
/// truncate, and clamp to `max`. The clamp-after-scale shape means the
/// top value is only reachable from a narrow band near full scale; this
/// is the deployed contract.
fn scale_to_field(value: f32, out_min: f32, out_max_exclusive: f32, max: u8) -> u8 {
    (scale_range(value, 0.0, 1.0, out_min, out_max_exclusive) as u8).min(max)
}
