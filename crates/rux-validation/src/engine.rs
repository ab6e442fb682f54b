#![forbid(unsafe_code)]

//! Validation-state engine.
//!
//! The engine owns the dirty flag and the active error set of one input
//! control. It never stores the text: the host passes the current text on
//! every call.
//!
//! # Invariants
//!
//! 1. **Pristine is valid**: while not dirty, the result is always valid with
//!    no errors, whatever the rules say.
//! 2. **Full scan**: every rule is evaluated on every dirty evaluation, in
//!    declaration order. There is no early return.
//! 3. **De-duplication**: a message appears at most once; the first failing
//!    rule that produces it fixes its position.
//! 4. **No sticky messages**: a message is present only while some rule
//!    currently produces it.
//! 5. **Change reporting**: `changed` is true only when the validity flag or
//!    the error-set membership differs from the previous evaluation, or on
//!    the first dirty evaluation after creation or reset.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Rule reports failure | Message added to `errors`, never an `Err` |
//! | Rule function panics | Panic propagates to the host |
//! | Empty rule list | Always valid |

use crate::rule::ValidatorRule;

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Active error messages, de-duplicated, in rule-declaration order.
    pub errors: Vec<String>,
    /// Whether the externally visible state differs from the previous
    /// evaluation. Hosts use this to skip redundant presentation work.
    pub changed: bool,
}

/// Per-control validation state.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    dirty: bool,
    errors: Vec<String>,
    /// Set once a dirty evaluation has run since creation or the last
    /// pristine evaluation.
    evaluated_dirty: bool,
}

impl ValidationEngine {
    /// Create a pristine engine: not dirty, valid, no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the control has received a text change since creation or
    /// the last reset.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the active error set is empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The active error set.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Compute validity and errors for `text` with an explicit dirty flag.
    ///
    /// This does not touch the engine's own dirty flag; the `on_*` methods
    /// pass it in.
    pub fn evaluate(&mut self, text: &str, rules: &[ValidatorRule], is_dirty: bool) -> Evaluation {
        let _span = crate::debug_span!("validation_evaluate", rules = rules.len(), is_dirty).entered();

        if !is_dirty {
            let changed = !self.errors.is_empty();
            self.errors.clear();
            self.evaluated_dirty = false;
            crate::trace!(rules = rules.len(), changed, "pristine evaluation");
            return Evaluation {
                is_valid: true,
                errors: Vec::new(),
                changed,
            };
        }

        let mut errors: Vec<String> = Vec::new();
        for rule in rules {
            if let Some(message) = rule.check(text)
                && !errors.iter().any(|e| *e == *message)
            {
                errors.push(message.into_owned());
            }
        }

        let changed = !self.evaluated_dirty || !same_members(&self.errors, &errors);
        self.evaluated_dirty = true;
        self.errors = errors;

        let is_valid = self.errors.is_empty();
        crate::trace!(
            rules = rules.len(),
            errors = self.errors.len(),
            changed,
            "dirty evaluation"
        );
        if changed {
            crate::debug!(is_valid, errors = self.errors.len(), "validation state changed");
        }

        Evaluation {
            is_valid,
            errors: self.errors.clone(),
            changed,
        }
    }

    /// Host notification: the text changed.
    ///
    /// Marks the engine dirty (first time only) and re-evaluates.
    pub fn on_text_changed(&mut self, text: &str, rules: &[ValidatorRule]) -> Evaluation {
        if !self.dirty {
            self.dirty = true;
            crate::debug!("input became dirty");
        }
        self.evaluate(text, rules, true)
    }

    /// Host notification: mark the input dirty without a text change, e.g.
    /// when a form is submitted with an untouched field.
    pub fn on_mark_dirty(&mut self, text: &str, rules: &[ValidatorRule]) -> Evaluation {
        if !self.dirty {
            self.dirty = true;
            crate::debug!("input marked dirty");
        }
        self.evaluate(text, rules, true)
    }

    /// Host notification: rules were added, removed or replaced.
    ///
    /// Re-evaluates with the current dirty flag, so messages of removed
    /// rules are purged even without a text change.
    pub fn on_validator_set_changed(&mut self, text: &str, rules: &[ValidatorRule]) -> Evaluation {
        self.evaluate(text, rules, self.dirty)
    }

    /// Host notification: return to pristine.
    ///
    /// Clears the dirty flag and all derived state. `changed` reports
    /// whether errors were visible before the reset.
    pub fn on_reset_dirty(&mut self) -> Evaluation {
        if self.dirty {
            crate::debug!("input reset to pristine");
        }
        self.dirty = false;
        self.evaluate("", &[], false)
    }
}

/// Set equality over two de-duplicated message lists.
fn same_members(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|m| b.contains(m))
}
