#![forbid(unsafe_code)]

//! Presentation state machine.
//!
//! A validating input is always in one of eight composite visual states:
//! an [`Interaction`] (driven by host focus, pointer and enabled signals)
//! crossed with a [`Validity`] (driven by the validation engine).
//!
//! The interaction axis is derived from three flags, so any signal order
//! lands in a consistent state:
//!
//! | enabled | focused | pointer over | interaction |
//! |---------|---------|--------------|-------------|
//! | no      | any     | any          | `Disabled`  |
//! | yes     | yes     | any          | `Focused`   |
//! | yes     | no      | yes          | `PointerOver` |
//! | yes     | no      | no           | `Normal`    |

use rux_core::HostSignal;

/// Interaction axis of the visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    #[default]
    Normal,
    PointerOver,
    Focused,
    Disabled,
}

/// Validity axis of the visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validity {
    #[default]
    Ok,
    Error,
}

/// Composite visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    pub interaction: Interaction,
    pub validity: Validity,
}

impl VisualState {
    /// All eight composite states.
    pub const ALL: [VisualState; 8] = {
        use Interaction::*;
        use Validity::*;
        [
            VisualState::new(Normal, Ok),
            VisualState::new(PointerOver, Ok),
            VisualState::new(Focused, Ok),
            VisualState::new(Disabled, Ok),
            VisualState::new(Normal, Error),
            VisualState::new(PointerOver, Error),
            VisualState::new(Focused, Error),
            VisualState::new(Disabled, Error),
        ]
    };

    #[must_use]
    pub const fn new(interaction: Interaction, validity: Validity) -> Self {
        Self {
            interaction,
            validity,
        }
    }

    /// Stable state name for mapping onto host visual states.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match (self.interaction, self.validity) {
            (Interaction::Normal, Validity::Ok) => "Normal",
            (Interaction::PointerOver, Validity::Ok) => "PointerOver",
            (Interaction::Focused, Validity::Ok) => "Focused",
            (Interaction::Disabled, Validity::Ok) => "Disabled",
            (Interaction::Normal, Validity::Error) => "NormalError",
            (Interaction::PointerOver, Validity::Error) => "PointerOverError",
            (Interaction::Focused, Validity::Error) => "FocusedError",
            (Interaction::Disabled, Validity::Error) => "DisabledError",
        }
    }

    /// Whether the validity axis shows an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self.validity, Validity::Error)
    }
}

/// Tracks host flags and the validity axis; yields the composite state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStateMachine {
    enabled: bool,
    focused: bool,
    pointer_over: bool,
    validity: Validity,
}

impl Default for VisualStateMachine {
    fn default() -> Self {
        Self {
            enabled: true,
            focused: false,
            pointer_over: false,
            validity: Validity::Ok,
        }
    }
}

impl VisualStateMachine {
    /// Initial state: enabled, unfocused, pointer outside, `Normal × Ok`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current composite state.
    #[must_use]
    pub fn state(&self) -> VisualState {
        let interaction = if !self.enabled {
            Interaction::Disabled
        } else if self.focused {
            Interaction::Focused
        } else if self.pointer_over {
            Interaction::PointerOver
        } else {
            Interaction::Normal
        };
        VisualState::new(interaction, self.validity)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    /// Apply a host signal. Returns `true` if the composite state changed.
    ///
    /// [`HostSignal::HintTapped`] has no effect on the visual state.
    pub fn apply(&mut self, signal: HostSignal) -> bool {
        let before = self.state();
        match signal {
            HostSignal::PointerEntered => self.pointer_over = true,
            HostSignal::PointerExited => self.pointer_over = false,
            HostSignal::GotFocus => self.focused = true,
            HostSignal::LostFocus => self.focused = false,
            HostSignal::EnabledChanged(enabled) => self.enabled = enabled,
            HostSignal::HintTapped => {}
        }
        self.state() != before
    }

    /// Set the validity axis. Returns `true` if the composite state changed.
    pub fn set_error(&mut self, error: bool) -> bool {
        let validity = if error { Validity::Error } else { Validity::Ok };
        let changed = self.validity != validity;
        self.validity = validity;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_normal_ok() {
        let sm = VisualStateMachine::new();
        assert_eq!(sm.state(), VisualState::new(Interaction::Normal, Validity::Ok));
        assert_eq!(sm.state().name(), "Normal");
    }

    #[test]
    fn pointer_enter_and_exit() {
        let mut sm = VisualStateMachine::new();
        assert!(sm.apply(HostSignal::PointerEntered));
        assert_eq!(sm.state().interaction, Interaction::PointerOver);
        assert!(sm.apply(HostSignal::PointerExited));
        assert_eq!(sm.state().interaction, Interaction::Normal);
    }

    #[test]
    fn pointer_ignored_while_focused() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::GotFocus);
        assert!(!sm.apply(HostSignal::PointerEntered));
        assert_eq!(sm.state().interaction, Interaction::Focused);
        assert!(!sm.apply(HostSignal::PointerExited));
        assert_eq!(sm.state().interaction, Interaction::Focused);
    }

    #[test]
    fn losing_focus_with_pointer_over_goes_to_pointer_over() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::PointerEntered);
        sm.apply(HostSignal::GotFocus);
        sm.apply(HostSignal::LostFocus);
        assert_eq!(sm.state().interaction, Interaction::PointerOver);
    }

    #[test]
    fn losing_focus_without_pointer_goes_to_normal() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::GotFocus);
        sm.apply(HostSignal::LostFocus);
        assert_eq!(sm.state().interaction, Interaction::Normal);
    }

    #[test]
    fn disabled_overrides_everything() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::PointerEntered);
        sm.apply(HostSignal::GotFocus);
        assert!(sm.apply(HostSignal::EnabledChanged(false)));
        assert_eq!(sm.state().interaction, Interaction::Disabled);
        assert!(!sm.apply(HostSignal::LostFocus));
        assert!(!sm.apply(HostSignal::GotFocus));
        assert_eq!(sm.state().interaction, Interaction::Disabled);
    }

    #[test]
    fn reenabling_restores_derived_interaction() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::EnabledChanged(false));
        sm.apply(HostSignal::PointerEntered);
        sm.apply(HostSignal::EnabledChanged(true));
        assert_eq!(sm.state().interaction, Interaction::PointerOver);
    }

    #[test]
    fn hint_tap_does_not_change_visual_state() {
        let mut sm = VisualStateMachine::new();
        assert!(!sm.apply(HostSignal::HintTapped));
    }

    #[test]
    fn validity_axis_is_independent() {
        let mut sm = VisualStateMachine::new();
        sm.apply(HostSignal::GotFocus);
        assert!(sm.set_error(true));
        assert_eq!(sm.state().name(), "FocusedError");
        assert!(!sm.set_error(true));
        sm.apply(HostSignal::EnabledChanged(false));
        assert_eq!(sm.state().name(), "DisabledError");
        assert!(sm.set_error(false));
        assert_eq!(sm.state().name(), "Disabled");
    }

    #[test]
    fn all_states_have_distinct_names() {
        let mut names: Vec<_> = VisualState::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn error_flag_matches_validity_axis() {
        let errors = VisualState::ALL.iter().filter(|s| s.is_error()).count();
        assert_eq!(errors, 4);
    }
}
