#![forbid(unsafe_code)]

//! rux public facade crate.
//!
//! Re-exports the types a host needs to drive validating text inputs and
//! inline-formatted labels, plus a prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use rux::prelude::*;
//!
//! let mut email = ValidatingInput::default()
//!     .with_rule(ValidatorRule::required("Email is required"))
//!     .with_rule(ValidatorRule::predicate(|s| s.contains('@'), "Not an email"));
//!
//! assert!(email.is_valid()); // pristine
//! email.set_text("someone");
//! assert_eq!(email.errors(), ["Not an email"]);
//! assert_eq!(email.visual_state().name(), "NormalError");
//!
//! email.set_text("someone@example.com");
//! assert_eq!(rux::validated_text(&email).unwrap(), "someone@example.com");
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use rux_core::HostSignal;

// --- Style re-exports ------------------------------------------------------

pub use rux_style::{PackedRgba, Style, StyleFlags};

// --- Validation re-exports -------------------------------------------------

pub use rux_validation::{
    ErrorDetail, ErrorHint, Evaluation, Interaction, ValidatingInput, ValidationConfig,
    ValidationEngine, ValidatorRule, Validity, ValidityIndicator, VisualState,
    VisualStateMachine, all_valid, format_error_list,
};

// --- Markup re-exports -----------------------------------------------------

#[cfg(feature = "markup")]
pub use rux_markup::{
    ColorTransformer, DefaultTransformer, Element, Inline, InlineFormatter, LinkTransformer,
    MarkupError, SpanFormat, StyledRun, Transformer, TransformerExt, format_inline, parse_inline,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for rux hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input was submitted while failing validation.
    Invalid { errors: Vec<String> },
    /// Formatting markup is not well-formed.
    #[cfg(feature = "markup")]
    Markup(MarkupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { errors } => write!(f, "invalid input: {}", errors.join("; ")),
            #[cfg(feature = "markup")]
            Self::Markup(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "markup")]
            Self::Markup(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "markup")]
impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Self::Markup(err)
    }
}

/// Standard result type for rux APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// The input's text if it currently passes validation.
///
/// A pristine input counts as valid.
pub fn validated_text(input: &ValidatingInput) -> Result<&str> {
    if input.is_valid() {
        Ok(input.text())
    } else {
        Err(Error::Invalid {
            errors: input.errors().to_vec(),
        })
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, HostSignal, Result, Style, ValidatingInput, ValidationConfig, ValidatorRule,
        VisualState, all_valid,
    };

    #[cfg(feature = "markup")]
    pub use crate::{DefaultTransformer, Inline, Transformer, TransformerExt, format_inline};

    pub use crate::{core, style, validation};

    #[cfg(feature = "markup")]
    pub use crate::markup;
}

pub use rux_core as core;
#[cfg(feature = "markup")]
pub use rux_markup as markup;
pub use rux_style as style;
pub use rux_validation as validation;
