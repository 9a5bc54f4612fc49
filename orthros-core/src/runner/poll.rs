//! The polling loop body.

use orthros_display::Screen;

use crate::alarm::BuzzerState;
use crate::button::Button;
use crate::config::RunnerConfig;
use crate::menu::AlarmClock;
use crate::traits::{ButtonPins, Buzzer, ScalarInput, TimeStore, BUTTON_COUNT};

/// The polling orchestrator.
///
/// Owns the controller and the per-button debouncers. The embedding
/// layer calls [`Runner::tick`] from its main loop with the elapsed
/// time; everything else is cadence bookkeeping here. All operations
/// are synchronous and terminating; nothing blocks or suspends.
#[derive(Debug)]
pub struct Runner {
    clock: AlarmClock,
    buttons: [Button; BUTTON_COUNT],
    config: RunnerConfig,
    button_elapsed_ms: u32,
    scalar_elapsed_ms: u32,
    time_elapsed_ms: u32,
    buzzer_elapsed_ms: u32,
    buzzer_on: bool,
}

impl Runner {
    /// Runner with the default cadences
    pub fn new(clock: AlarmClock) -> Self {
        Self::with_config(clock, RunnerConfig::default())
    }

    /// Runner with explicit cadences
    pub fn with_config(clock: AlarmClock, config: RunnerConfig) -> Self {
        Self {
            clock,
            buttons: [Button::new(); BUTTON_COUNT],
            config,
            button_elapsed_ms: 0,
            scalar_elapsed_ms: 0,
            time_elapsed_ms: 0,
            buzzer_elapsed_ms: 0,
            buzzer_on: false,
        }
    }

    /// The controller
    pub fn clock(&self) -> &AlarmClock {
        &self.clock
    }

    /// Advance the loop by `elapsed_ms` milliseconds.
    ///
    /// Cadences that have come due fire once each, in a fixed order:
    /// time fetch, buttons, knob, buzzer. A press shorter than two
    /// button-poll intervals is rejected by the debouncers, and the
    /// knob is only read while an editor is open.
    pub fn tick<T, P, S, B>(
        &mut self,
        elapsed_ms: u32,
        store: &mut T,
        pins: &mut P,
        scalar: &mut S,
        buzzer: &mut B,
        screen: &mut Screen,
    ) where
        T: TimeStore,
        P: ButtonPins,
        S: ScalarInput,
        B: Buzzer,
    {
        self.time_elapsed_ms = self.time_elapsed_ms.saturating_add(elapsed_ms);
        self.button_elapsed_ms = self.button_elapsed_ms.saturating_add(elapsed_ms);
        self.scalar_elapsed_ms = self.scalar_elapsed_ms.saturating_add(elapsed_ms);
        self.buzzer_elapsed_ms = self.buzzer_elapsed_ms.saturating_add(elapsed_ms);

        if self.time_elapsed_ms >= self.config.time_poll_ms {
            self.time_elapsed_ms = 0;
            self.clock.fetch_time(store, screen);
        }

        if self.button_elapsed_ms >= self.config.button_poll_ms {
            self.button_elapsed_ms = 0;
            let samples = pins.sample();
            let menu_btn = self.buttons[0].poll(samples[0]);
            let select_btn = self.buttons[1].poll(samples[1]);
            let back_btn = self.buttons[2].poll(samples[2]);
            self.clock
                .handle_buttons(menu_btn, select_btn, back_btn, store, screen);
        }

        if self.scalar_elapsed_ms >= self.config.scalar_poll_ms {
            self.scalar_elapsed_ms = 0;
            if self.clock.is_editing() {
                self.clock.handle_scalar(scalar.read(), screen);
            }
        }

        self.drive_buzzer(buzzer);
    }

    /// Shape the buzzer pattern: asymmetric on/off while beeping,
    /// forced silent otherwise.
    fn drive_buzzer<B: Buzzer>(&mut self, buzzer: &mut B) {
        if self.clock.buzzer_state() == BuzzerState::Beeping {
            if self.buzzer_on && self.buzzer_elapsed_ms >= self.config.buzzer_on_ms {
                self.buzzer_on = false;
                self.buzzer_elapsed_ms = 0;
                buzzer.set_active(false);
            }
            if !self.buzzer_on && self.buzzer_elapsed_ms >= self.config.buzzer_off_ms {
                self.buzzer_on = true;
                self.buzzer_elapsed_ms = 0;
                buzzer.set_active(true);
            }
        } else if self.buzzer_on {
            self.buzzer_on = false;
            buzzer.set_active(false);
        }
    }
}
