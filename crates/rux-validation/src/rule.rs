#![forbid(unsafe_code)]

//! Validator rules.
//!
//! A [`ValidatorRule`] maps input text to `None` (pass) or an error message
//! (fail). Two shapes are supported:
//!
//! - [`ValidatorRule::predicate`]: a `text -> bool` check plus a fixed
//!   message; fails when the check returns `false`.
//! - [`ValidatorRule::message`]: a `text -> Option<String>` function; fails
//!   when it returns `Some`, and the returned string is the message.
//!
//! Both shapes live behind one type so a rule list may mix them.
//!
//! # Example
//!
//! ```
//! use rux_validation::ValidatorRule;
//!
//! let needs_at = ValidatorRule::predicate(|s| s.contains('@'), "need @");
//! assert_eq!(needs_at.check("a").as_deref(), Some("need @"));
//! assert_eq!(needs_at.check("a@b"), None);
//!
//! let no_dots = ValidatorRule::message(|s| s.contains('.').then(|| "no dots".to_string()));
//! assert_eq!(no_dots.check("a.b").as_deref(), Some("no dots"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&str) -> bool + Send + Sync;
type MessageFn = dyn Fn(&str) -> Option<String> + Send + Sync;

#[derive(Clone)]
enum RuleKind {
    Predicate {
        check: Arc<PredicateFn>,
        message: Arc<str>,
    },
    Message(Arc<MessageFn>),
}

/// A single validation rule.
///
/// Cloning is cheap: the function is shared, not copied.
#[derive(Clone)]
pub struct ValidatorRule {
    kind: RuleKind,
}

impl ValidatorRule {
    /// Rule that fails with `message` whenever `check` returns `false`.
    pub fn predicate<F>(check: F, message: impl Into<Arc<str>>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: RuleKind::Predicate {
                check: Arc::new(check),
                message: message.into(),
            },
        }
    }

    /// Rule whose function returns the error message on failure.
    pub fn message<F>(func: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            kind: RuleKind::Message(Arc::new(func)),
        }
    }

    /// Rule that fails with `message` when the text is blank.
    pub fn required(message: impl Into<Arc<str>>) -> Self {
        Self::predicate(|s| !s.trim().is_empty(), message)
    }

    /// Evaluate the rule against `text`.
    ///
    /// Returns the error message when the rule fails. A panicking rule
    /// function propagates to the caller.
    #[must_use]
    pub fn check(&self, text: &str) -> Option<Cow<'_, str>> {
        match &self.kind {
            RuleKind::Predicate { check, message } => {
                if check(text) {
                    None
                } else {
                    Some(Cow::Borrowed(&**message))
                }
            }
            RuleKind::Message(func) => func(text).map(Cow::Owned),
        }
    }

    /// The fixed message of a predicate rule, `None` for message rules.
    #[must_use]
    pub fn fixed_message(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::Predicate { message, .. } => Some(&**message),
            RuleKind::Message(_) => None,
        }
    }
}

impl fmt::Debug for ValidatorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Predicate { message, .. } => f
                .debug_struct("ValidatorRule::Predicate")
                .field("message", message)
                .finish_non_exhaustive(),
            RuleKind::Message(_) => f
                .debug_struct("ValidatorRule::Message")
                .finish_non_exhaustive(),
        }
    }
}
