//! Packed RGBA colors and named-color lookup.

/// A 32-bit RGBA color packed as `0xRRGGBBAA`.
///
/// This is straight alpha storage (channels are not pre-multiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green, the named-color green (half intensity).
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// Opaque full-intensity green.
    pub const LIME: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Look up a color by name (case-insensitive).
    ///
    /// Returns `None` for names outside the basic palette.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "lime" => Self::LIME,
            "yellow" => Self::rgb(255, 255, 0),
            "blue" => Self::BLUE,
            "magenta" | "fuchsia" | "purple" => Self::rgb(255, 0, 255),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "white" => Self::WHITE,
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "navy" => Self::rgb(0, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "maroon" => Self::rgb(128, 0, 0),
            _ => return None,
        };
        Some(color)
    }

    /// Parse `#rgb` or `#rrggbb` hex notation.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
                let r = digits.next()? as u8;
                let g = digits.next()? as u8;
                let b = digits.next()? as u8;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse either a named color or hex notation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim_start().starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_name(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip_through_packing() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(PackedRgba::rgb(10, 20, 30).a(), 255);
    }

    #[test]
    fn green_constant_matches_named_green() {
        assert_eq!(PackedRgba::from_name("green"), Some(PackedRgba::GREEN));
        assert_eq!(PackedRgba::GREEN, PackedRgba::rgb(0, 128, 0));
        assert_eq!(PackedRgba::from_name("lime"), Some(PackedRgba::LIME));
        assert_ne!(PackedRgba::GREEN, PackedRgba::LIME);
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(PackedRgba::from_name("Red"), Some(PackedRgba::RED));
        assert_eq!(PackedRgba::from_name("  BLUE "), Some(PackedRgba::BLUE));
        assert_eq!(PackedRgba::from_name("chartreuse"), None);
    }

    #[test]
    fn hex_short_and_long() {
        assert_eq!(PackedRgba::from_hex("#f00"), Some(PackedRgba::RED));
        assert_eq!(
            PackedRgba::from_hex("#00ff80"),
            Some(PackedRgba::rgb(0, 255, 128))
        );
        assert_eq!(PackedRgba::from_hex("#ggg"), None);
        assert_eq!(PackedRgba::from_hex("#1234"), None);
        assert_eq!(PackedRgba::from_hex("fff"), None);
    }

    #[test]
    fn parse_dispatches_on_prefix() {
        assert_eq!(PackedRgba::parse("#fff"), Some(PackedRgba::WHITE));
        assert_eq!(PackedRgba::parse("white"), Some(PackedRgba::WHITE));
    }
}
