//! The per-button debounce machine.

/// Debounced push state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PushState {
    /// Button confirmed up
    #[default]
    Released,
    /// One pressed sample seen, awaiting confirmation
    MaybePushed,
    /// Button confirmed down
    Pushed,
    /// One released sample seen, awaiting confirmation
    MaybeReleased,
}

/// Logical transition produced by the most recent poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Push confirmed this poll
    JustPushed,
    /// Release confirmed this poll
    JustReleased,
    /// Nothing confirmed this poll
    #[default]
    NoTransition,
}

/// Combined debouncer state, recomputed on every poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    /// Current push state
    pub push_state: PushState,
    /// Transition reported by the most recent poll
    pub transition: Transition,
}

impl ButtonState {
    /// Released, no transition
    pub const fn new() -> Self {
        Self {
            push_state: PushState::Released,
            transition: Transition::NoTransition,
        }
    }

    /// Process one raw sample and return the next state.
    ///
    /// The transition always resets before being possibly overwritten,
    /// so it reflects only the poll that produced this state. A lone
    /// sample that disagrees with its neighbors is a rejected glitch.
    #[must_use]
    pub fn step(self, pressed: bool) -> Self {
        use PushState::*;
        use Transition::*;

        let (push_state, transition) = match (self.push_state, pressed) {
            (Released, true) => (MaybePushed, NoTransition),
            (Released, false) => (Released, NoTransition),
            (MaybePushed, true) => (Pushed, JustPushed),
            (MaybePushed, false) => (Released, NoTransition),
            (Pushed, true) => (Pushed, NoTransition),
            (Pushed, false) => (MaybeReleased, NoTransition),
            (MaybeReleased, true) => (Pushed, NoTransition),
            (MaybeReleased, false) => (Released, JustReleased),
        };

        Self {
            push_state,
            transition,
        }
    }

    /// Push confirmed on the most recent poll
    pub fn just_pushed(&self) -> bool {
        self.transition == Transition::JustPushed
    }

    /// Button confirmed down
    pub fn is_held(&self) -> bool {
        self.push_state == PushState::Pushed
    }
}

/// A button being debounced across polls.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    state: ButtonState,
}

impl Button {
    /// New button in the released state
    pub const fn new() -> Self {
        Self {
            state: ButtonState::new(),
        }
    }

    /// Feed one raw sample; returns the updated state.
    pub fn poll(&mut self, pressed: bool) -> ButtonState {
        self.state = self.state.step(pressed);
        self.state
    }

    /// State after the most recent poll
    pub fn state(&self) -> ButtonState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(samples: &[bool]) -> heapless::Vec<ButtonState, 64> {
        let mut button = Button::new();
        samples.iter().map(|&s| button.poll(s)).collect()
    }

    #[test]
    fn push_confirmed_on_second_agreeing_sample() {
        let states = run(&[true, true, true]);
        assert_eq!(states[0].push_state, PushState::MaybePushed);
        assert_eq!(states[0].transition, Transition::NoTransition);
        assert_eq!(states[1].push_state, PushState::Pushed);
        assert_eq!(states[1].transition, Transition::JustPushed);
        assert_eq!(states[2].transition, Transition::NoTransition);
    }

    #[test]
    fn isolated_sample_is_a_rejected_glitch() {
        let states = run(&[false, true, false, false]);
        assert!(states.iter().all(|s| s.transition == Transition::NoTransition));
        assert_eq!(states[3].push_state, PushState::Released);
    }

    #[test]
    fn release_requires_two_agreeing_samples() {
        let states = run(&[true, true, false, true, false, false]);
        // bounce while held does not release
        assert_eq!(states[2].push_state, PushState::MaybeReleased);
        assert_eq!(states[3].push_state, PushState::Pushed);
        assert_eq!(states[3].transition, Transition::NoTransition);
        // two agreeing samples do
        assert_eq!(states[5].push_state, PushState::Released);
        assert_eq!(states[5].transition, Transition::JustReleased);
    }

    #[test]
    fn full_press_cycle_emits_one_push_and_one_release() {
        let states = run(&[true, true, true, true, false, false]);
        let pushes = states.iter().filter(|s| s.just_pushed()).count();
        let releases = states
            .iter()
            .filter(|s| s.transition == Transition::JustReleased)
            .count();
        assert_eq!(pushes, 1);
        assert_eq!(releases, 1);
    }

    #[test]
    fn held_state_tracks_confirmed_push_only() {
        let mut button = Button::new();
        assert!(!button.poll(true).is_held());
        assert!(button.poll(true).is_held());
        assert!(!button.poll(false).is_held());
    }

    proptest! {
        /// A push is reported exactly on the second of two consecutive
        /// pressed samples following a release, and never otherwise.
        #[test]
        fn transitions_need_two_agreeing_samples(samples in prop::collection::vec(any::<bool>(), 1..64)) {
            let mut button = Button::new();
            let mut prev_sample = false;
            for &sample in &samples {
                let state = button.poll(sample);
                match state.transition {
                    Transition::JustPushed => prop_assert!(sample && prev_sample),
                    Transition::JustReleased => prop_assert!(!sample && !prev_sample),
                    Transition::NoTransition => {}
                }
                prop_assert_eq!(state.is_held(), state.push_state == PushState::Pushed);
                prev_sample = sample;
            }
        }

        /// Pushes and releases strictly alternate, starting with a push.
        #[test]
        fn pushes_and_releases_alternate(samples in prop::collection::vec(any::<bool>(), 1..128)) {
            let mut button = Button::new();
            let mut down = false;
            for &sample in &samples {
                match button.poll(sample).transition {
                    Transition::JustPushed => {
                        prop_assert!(!down);
                        down = true;
                    }
                    Transition::JustReleased => {
                        prop_assert!(down);
                        down = false;
                    }
                    Transition::NoTransition => {}
                }
            }
        }
    }
}
