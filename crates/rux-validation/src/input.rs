#![forbid(unsafe_code)]

//! Validating text-input control model.
//!
//! [`ValidatingInput`] is the headless half of a validating text box. It
//! owns the text, the rules and the validation engine, and derives the
//! presentation facts a host needs: the composite visual state, whether the
//! error hint is visible, and the error-detail surface.
//!
//! Presentation state is only touched on evaluations whose `changed` flag is
//! set, so repeated keystrokes that keep the same error set cause no
//! redundant hint or surface updates.
//!
//! # Example
//!
//! ```
//! use rux_core::HostSignal;
//! use rux_validation::{ValidatingInput, ValidatorRule};
//!
//! let mut input = ValidatingInput::default()
//!     .with_rule(ValidatorRule::predicate(|s| s.contains('@'), "need @"));
//!
//! assert!(input.is_valid());
//! input.set_text("a");
//! assert!(!input.is_valid());
//! assert!(input.hint_visible());
//! assert_eq!(input.error_detail().content(), "● need @");
//!
//! input.handle_signal(HostSignal::LostFocus);
//! assert!(!input.error_detail().is_open());
//! ```

use rux_core::HostSignal;

use crate::config::ValidationConfig;
use crate::detail::ErrorDetail;
use crate::engine::{Evaluation, ValidationEngine};
use crate::hint::ErrorHint;
use crate::rule::ValidatorRule;
use crate::visual::{VisualState, VisualStateMachine};

/// Headless validating text input.
#[derive(Debug, Clone, Default)]
pub struct ValidatingInput {
    text: String,
    rules: Vec<ValidatorRule>,
    engine: ValidationEngine,
    visual: VisualStateMachine,
    detail: ErrorDetail,
    hint_visible: bool,
    config: ValidationConfig,
}

impl ValidatingInput {
    /// Create a pristine input with the given configuration.
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // --- Builder methods ---

    /// Add a rule (builder).
    #[must_use]
    pub fn with_rule(mut self, rule: ValidatorRule) -> Self {
        self.push_rule(rule);
        self
    }

    /// Add several rules (builder).
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ValidatorRule>) -> Self {
        self.rules.extend(rules);
        self.revalidate();
        self
    }

    /// Set the initial text without dirtying the input (builder).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // --- Accessors ---

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn rules(&self) -> &[ValidatorRule] {
        &self.rules
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.engine.is_dirty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.engine.is_valid()
    }

    /// Active error messages in rule-declaration order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        self.engine.errors()
    }

    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.visual.state()
    }

    #[must_use]
    pub fn error_detail(&self) -> &ErrorDetail {
        &self.detail
    }

    /// Mutable access, e.g. to take the "just opened" flag.
    pub fn error_detail_mut(&mut self) -> &mut ErrorDetail {
        &mut self.detail
    }

    /// Whether the error hint should be shown.
    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn hint(&self) -> &ErrorHint {
        &self.config.hint
    }

    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    // --- Host notifications ---

    /// The text changed (user input). Marks the input dirty.
    pub fn set_text(&mut self, text: impl Into<String>) -> Evaluation {
        self.text = text.into();
        let eval = self.engine.on_text_changed(&self.text, &self.rules);
        self.apply_evaluation(&eval);
        eval
    }

    /// Mark the input dirty without changing its text, e.g. on submit, so
    /// an untouched field shows its errors.
    pub fn mark_dirty(&mut self) -> Evaluation {
        let eval = self.engine.on_mark_dirty(&self.text, &self.rules);
        self.apply_evaluation(&eval);
        eval
    }

    /// Replace the whole rule set and re-evaluate.
    pub fn set_rules(&mut self, rules: Vec<ValidatorRule>) -> Evaluation {
        self.rules = rules;
        self.revalidate()
    }

    /// Append a rule and re-evaluate.
    pub fn push_rule(&mut self, rule: ValidatorRule) -> Evaluation {
        self.rules.push(rule);
        self.revalidate()
    }

    /// Remove all rules and re-evaluate.
    pub fn clear_rules(&mut self) -> Evaluation {
        self.rules.clear();
        self.revalidate()
    }

    /// Return to pristine: not dirty, valid, hint hidden, detail closed and
    /// empty. The text is kept.
    pub fn reset_dirty(&mut self) -> Evaluation {
        let eval = self.engine.on_reset_dirty();
        self.apply_evaluation(&eval);
        self.detail.clear();
        eval
    }

    /// Apply a focus, pointer, enablement or hint-tap signal.
    ///
    /// Returns `true` if the visual state or the detail surface's open
    /// state changed.
    pub fn handle_signal(&mut self, signal: HostSignal) -> bool {
        let was_open = self.detail.is_open();
        let visual_changed = self.visual.apply(signal);

        match signal {
            HostSignal::GotFocus => {
                if self.config.open_detail_on_focus
                    && self.visual.is_enabled()
                    && self.shows_error()
                {
                    self.detail.open();
                }
            }
            HostSignal::LostFocus => self.detail.close(),
            HostSignal::EnabledChanged(false) => self.detail.close(),
            HostSignal::HintTapped => {
                if self.hint_visible {
                    self.detail.toggle();
                }
            }
            HostSignal::PointerEntered
            | HostSignal::PointerExited
            | HostSignal::EnabledChanged(true) => {}
        }

        crate::trace!(signal = signal.name(), state = self.visual.state().name(), "host signal");
        visual_changed || was_open != self.detail.is_open()
    }

    fn revalidate(&mut self) -> Evaluation {
        let eval = self.engine.on_validator_set_changed(&self.text, &self.rules);
        self.apply_evaluation(&eval);
        eval
    }

    fn shows_error(&self) -> bool {
        self.engine.is_dirty() && !self.engine.is_valid()
    }

    fn apply_evaluation(&mut self, eval: &Evaluation) {
        if !eval.changed {
            return;
        }
        self.hint_visible = !eval.errors.is_empty();
        self.visual.set_error(self.shows_error());
        self.detail.update(
            &eval.errors,
            &self.config.bullet,
            self.config.open_detail_on_error,
        );
    }
}

/// True when every input is valid, e.g. to enable a submit action.
pub fn all_valid<'a>(inputs: impl IntoIterator<Item = &'a ValidatingInput>) -> bool {
    inputs.into_iter().all(ValidatingInput::is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::{Interaction, Validity};

    fn email_input() -> ValidatingInput {
        ValidatingInput::default().with_rule(ValidatorRule::predicate(|s| s.contains('@'), "need @"))
    }

    #[test]
    fn starts_pristine() {
        let input = email_input();
        assert!(!input.is_dirty());
        assert!(input.is_valid());
        assert!(!input.hint_visible());
        assert!(!input.error_detail().is_open());
        assert_eq!(input.visual_state().name(), "Normal");
    }

    #[test]
    fn initial_text_does_not_dirty() {
        let input = email_input().with_text("no at sign");
        assert_eq!(input.text(), "no at sign");
        assert!(!input.is_dirty());
        assert!(input.is_valid());
    }

    #[test]
    fn invalid_text_shows_hint_and_detail() {
        let mut input = email_input();
        let eval = input.set_text("a");
        assert!(eval.changed);
        assert!(input.is_dirty());
        assert!(input.hint_visible());
        assert!(input.error_detail().is_open());
        assert_eq!(input.error_detail().content(), "● need @");
        assert_eq!(input.visual_state().validity, Validity::Error);
    }

    #[test]
    fn fixing_text_hides_hint_and_closes_detail() {
        let mut input = email_input();
        input.set_text("a");
        input.set_text("a@");
        assert!(input.is_valid());
        assert!(!input.hint_visible());
        assert!(!input.error_detail().is_open());
        assert_eq!(input.visual_state().validity, Validity::Ok);
    }

    #[test]
    fn unchanged_evaluation_leaves_closed_detail_closed() {
        let mut input = email_input();
        input.set_text("a");
        input.handle_signal(HostSignal::HintTapped);
        assert!(!input.error_detail().is_open());
        let eval = input.set_text("ab");
        assert!(!eval.changed);
        assert!(!input.error_detail().is_open());
    }

    #[test]
    fn auto_open_can_be_disabled() {
        let mut input = ValidatingInput::new(ValidationConfig::new().with_open_detail_on_error(false))
            .with_rule(ValidatorRule::required("required"));
        input.set_text("");
        assert!(input.hint_visible());
        assert!(!input.error_detail().is_open());
        input.handle_signal(HostSignal::HintTapped);
        assert!(input.error_detail().is_open());
    }

    #[test]
    fn focus_gain_opens_detail_when_invalid() {
        let mut input = email_input();
        input.set_text("a");
        input.handle_signal(HostSignal::LostFocus);
        assert!(!input.error_detail().is_open());
        assert!(input.handle_signal(HostSignal::GotFocus));
        assert!(input.error_detail().is_open());
        assert_eq!(input.visual_state().name(), "FocusedError");
    }

    #[test]
    fn focus_gain_while_pristine_keeps_detail_closed() {
        let mut input = email_input();
        input.handle_signal(HostSignal::GotFocus);
        assert!(!input.error_detail().is_open());
        assert_eq!(input.visual_state().name(), "Focused");
    }

    #[test]
    fn hint_tap_is_ignored_without_errors() {
        let mut input = email_input();
        input.set_text("a@");
        assert!(!input.handle_signal(HostSignal::HintTapped));
        assert!(!input.error_detail().is_open());
    }

    #[test]
    fn disabling_closes_detail() {
        let mut input = email_input();
        input.set_text("a");
        assert!(input.handle_signal(HostSignal::EnabledChanged(false)));
        assert!(!input.error_detail().is_open());
        assert_eq!(input.visual_state().interaction, Interaction::Disabled);
        assert_eq!(input.visual_state().name(), "DisabledError");
    }

    #[test]
    fn reset_returns_to_pristine_presentation() {
        let mut input = email_input();
        input.set_text("a");
        let eval = input.reset_dirty();
        assert!(eval.changed);
        assert!(!input.is_dirty());
        assert!(input.is_valid());
        assert!(!input.hint_visible());
        assert!(!input.error_detail().is_open());
        assert!(input.error_detail().content().is_empty());
        assert_eq!(input.visual_state().validity, Validity::Ok);
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn mark_dirty_shows_errors_of_initial_text() {
        let mut input = email_input().with_text("x");
        assert!(input.is_valid());
        assert!(!input.hint_visible());

        let eval = input.mark_dirty();
        assert!(eval.changed);
        assert!(input.is_dirty());
        assert!(!input.is_valid());
        assert!(input.hint_visible());
        assert_eq!(input.errors(), ["need @"]);
        assert_eq!(input.error_detail().content(), "● need @");
        assert_eq!(input.visual_state().validity, Validity::Error);
        assert_eq!(input.text(), "x");

        assert!(!input.mark_dirty().changed);
    }

    #[test]
    fn adding_rule_revalidates_dirty_input() {
        let mut input = email_input();
        input.set_text("a@b.c");
        assert!(input.is_valid());
        let eval = input.push_rule(ValidatorRule::predicate(|s| !s.contains('.'), "no dots"));
        assert!(eval.changed);
        assert_eq!(input.errors(), ["no dots"]);
        assert!(input.hint_visible());
    }

    #[test]
    fn replacing_rules_purges_stale_messages() {
        let mut input = email_input();
        input.set_text("a");
        assert_eq!(input.errors(), ["need @"]);
        let eval = input.set_rules(vec![ValidatorRule::required("required")]);
        assert!(eval.changed);
        assert!(input.is_valid());
        assert!(!input.hint_visible());
    }

    #[test]
    fn clearing_rules_makes_input_valid() {
        let mut input = email_input();
        input.set_text("a");
        input.clear_rules();
        assert!(input.is_valid());
        assert!(input.rules().is_empty());
    }

    #[test]
    fn rules_added_while_pristine_do_not_show_errors() {
        let mut input = ValidatingInput::default();
        input.push_rule(ValidatorRule::required("required"));
        assert!(input.is_valid());
        assert!(!input.hint_visible());
    }

    #[test]
    fn custom_bullet_is_used() {
        let mut input = ValidatingInput::new(ValidationConfig::new().with_bullet("* "))
            .with_rules([
                ValidatorRule::predicate(|s| !s.contains('!'), "no shouting"),
                ValidatorRule::predicate(|s| !s.contains('.'), "no dots"),
            ]);
        input.set_text("!.");
        assert_eq!(input.error_detail().content(), "* no shouting\n* no dots");
    }

    #[test]
    fn all_valid_aggregates_inputs() {
        let mut a = email_input();
        let mut b = email_input();
        assert!(all_valid([&a, &b]));
        a.set_text("x@");
        b.set_text("x");
        assert!(!all_valid([&a, &b]));
        b.set_text("y@");
        assert!(all_valid([&a, &b]));
        assert!(all_valid(std::iter::empty()));
    }
}
