#![forbid(unsafe_code)]

//! Style primitives shared by rux controls.
//!
//! A [`Style`] is a sparse set of overrides: unset fields inherit from
//! whatever the host applies underneath. Styles compose with
//! [`Style::merge`], where the argument wins for every field it sets.
//!
//! # Example
//! ```
//! use rux_style::{PackedRgba, Style, StyleFlags};
//!
//! let base = Style::new().bold();
//! let merged = base.merge(&Style::new().fg(PackedRgba::RED).italic());
//! assert!(merged.has_attr(StyleFlags::BOLD));
//! assert!(merged.has_attr(StyleFlags::ITALIC));
//! assert_eq!(merged.fg, Some(PackedRgba::RED));
//! ```

pub mod color;

pub use color::PackedRgba;

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u8 {
        /// Bold / increased weight.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
    }
}

/// Sparse text style: foreground, background and attribute overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<PackedRgba>,
    /// Background color override.
    pub bg: Option<PackedRgba>,
    /// Attribute flags to add.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style (no overrides).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn add_attr(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attr(StyleFlags::BOLD)
    }

    /// Add dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attr(StyleFlags::DIM)
    }

    /// Add italic.
    #[must_use]
    pub fn italic(self) -> Self {
        self.add_attr(StyleFlags::ITALIC)
    }

    /// Add underline.
    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attr(StyleFlags::UNDERLINE)
    }

    /// Whether every flag in `flags` is set.
    #[must_use]
    pub fn has_attr(&self, flags: StyleFlags) -> bool {
        self.attrs.is_some_and(|a| a.contains(flags))
    }

    /// True if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none_or(|a| a.is_empty())
    }

    /// Layer `other` on top of `self`.
    ///
    /// Colors set in `other` replace ours; attribute flags are unioned.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        let attrs = match (self.attrs, other.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs,
        }
    }
}
