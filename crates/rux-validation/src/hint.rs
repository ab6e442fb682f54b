#![forbid(unsafe_code)]

//! Error hint and validity indicator configuration.
//!
//! Both are cosmetic: they carry what the host should draw, never how.

use rux_style::PackedRgba;

/// Default hint color (red).
pub const ERROR_HINT_COLOR_DEFAULT: PackedRgba = PackedRgba::RED;

/// Default hint glyph.
pub const ERROR_HINT_GLYPH_DEFAULT: &str = "⚠";

/// Glyph and color of the error hint shown while errors are active.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ErrorHint {
    pub glyph: String,
    pub color: PackedRgba,
}

impl Default for ErrorHint {
    fn default() -> Self {
        Self {
            glyph: ERROR_HINT_GLYPH_DEFAULT.to_string(),
            color: ERROR_HINT_COLOR_DEFAULT,
        }
    }
}

impl ErrorHint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph (default: "⚠").
    #[must_use]
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// Set the color (default: red).
    #[must_use]
    pub fn with_color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }
}

/// Maps a validity flag to a glyph and color, e.g. for a summary next to a
/// submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidityIndicator {
    pub valid_glyph: String,
    pub invalid_glyph: String,
    pub valid_color: PackedRgba,
    pub invalid_color: PackedRgba,
}

impl Default for ValidityIndicator {
    fn default() -> Self {
        Self {
            valid_glyph: "✓".to_string(),
            invalid_glyph: "X".to_string(),
            valid_color: PackedRgba::GREEN,
            invalid_color: PackedRgba::RED,
        }
    }
}

impl ValidityIndicator {
    #[must_use]
    pub fn glyph(&self, valid: bool) -> &str {
        if valid {
            &self.valid_glyph
        } else {
            &self.invalid_glyph
        }
    }

    #[must_use]
    pub fn color(&self, valid: bool) -> PackedRgba {
        if valid {
            self.valid_color
        } else {
            self.invalid_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_defaults_to_red_warning() {
        let hint = ErrorHint::default();
        assert_eq!(hint.glyph, "⚠");
        assert_eq!(hint.color, PackedRgba::RED);
    }

    #[test]
    fn hint_builders_override() {
        let hint = ErrorHint::new()
            .with_glyph("!")
            .with_color(PackedRgba::rgb(200, 0, 0));
        assert_eq!(hint.glyph, "!");
        assert_eq!(hint.color, PackedRgba::rgb(200, 0, 0));
    }

    #[test]
    fn indicator_maps_validity() {
        let ind = ValidityIndicator::default();
        assert_eq!(ind.glyph(true), "✓");
        assert_eq!(ind.glyph(false), "X");
        assert_eq!(ind.color(true), PackedRgba::GREEN);
        assert_eq!(ind.color(false), PackedRgba::RED);
    }
}
