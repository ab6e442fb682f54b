#![forbid(unsafe_code)]

//! Per-control configuration.

use crate::detail::DEFAULT_BULLET;
use crate::hint::ErrorHint;

/// Configuration for a [`ValidatingInput`](crate::ValidatingInput).
///
/// Passed in at construction; there is no global lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Error hint glyph and color.
    pub hint: ErrorHint,
    /// Prefix placed before each message in the detail surface.
    pub bullet: String,
    /// Open the detail surface whenever an evaluation produces errors.
    pub open_detail_on_error: bool,
    /// Open the detail surface on focus gain while dirty and invalid.
    pub open_detail_on_focus: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            hint: ErrorHint::default(),
            bullet: DEFAULT_BULLET.to_string(),
            open_detail_on_error: true,
            open_detail_on_focus: true,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hint(mut self, hint: ErrorHint) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    #[must_use]
    pub fn with_open_detail_on_error(mut self, open: bool) -> Self {
        self.open_detail_on_error = open;
        self
    }

    #[must_use]
    pub fn with_open_detail_on_focus(mut self, open: bool) -> Self {
        self.open_detail_on_focus = open;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_detail_both_ways() {
        let cfg = ValidationConfig::default();
        assert!(cfg.open_detail_on_error);
        assert!(cfg.open_detail_on_focus);
        assert_eq!(cfg.bullet, "● ");
    }

    #[test]
    fn builders_chain() {
        let cfg = ValidationConfig::new()
            .with_bullet("* ")
            .with_open_detail_on_error(false)
            .with_hint(ErrorHint::new().with_glyph("!"));
        assert_eq!(cfg.bullet, "* ");
        assert!(!cfg.open_detail_on_error);
        assert_eq!(cfg.hint.glyph, "!");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let cfg: ValidationConfig =
            serde_json::from_str(r#"{ "bullet": "- ", "open_detail_on_focus": false }"#).unwrap();
        assert_eq!(cfg.bullet, "- ");
        assert!(!cfg.open_detail_on_focus);
        assert!(cfg.open_detail_on_error);
        assert_eq!(cfg.hint, ErrorHint::default());
    }
}
