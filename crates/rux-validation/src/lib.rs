#![forbid(unsafe_code)]

//! Headless validation state for validating text-input controls.
//!
//! - [`ValidatorRule`] - a `text -> Option<message>` rule (predicate or
//!   message form)
//! - [`ValidationEngine`] - dirty flag, active error set, change reporting
//! - [`VisualStateMachine`] - interaction × validity composite state
//! - [`ErrorDetail`] - open state and bulleted content of the error surface
//! - [`ValidatingInput`] - the control model tying the above together
//!
//! Nothing here renders. The host toolkit draws the control and feeds text
//! changes and [`HostSignal`](rux_core::HostSignal)s in.
//!
//! # Example
//! ```
//! use rux_validation::{ValidationEngine, ValidatorRule};
//!
//! let rules = vec![ValidatorRule::predicate(|s| s.contains('@'), "need @")];
//! let mut engine = ValidationEngine::new();
//!
//! let eval = engine.on_text_changed("a", &rules);
//! assert!(!eval.is_valid);
//! assert_eq!(eval.errors, vec!["need @"]);
//!
//! let eval = engine.on_text_changed("a@", &rules);
//! assert!(eval.is_valid && eval.changed);
//! ```

pub mod config;
pub mod detail;
pub mod engine;
pub mod hint;
pub mod input;
pub mod rule;
pub mod visual;

pub use config::ValidationConfig;
pub use detail::{ErrorDetail, format_error_list};
pub use engine::{Evaluation, ValidationEngine};
pub use hint::{ErrorHint, ValidityIndicator};
pub use input::{ValidatingInput, all_valid};
pub use rule::ValidatorRule;
pub use visual::{Interaction, Validity, VisualState, VisualStateMachine};

#[allow(unused_imports)]
pub(crate) use rux_core::{debug, debug_span, trace};
