//! Element transformers.
//!
//! A [`Transformer`] decides what formatting each markup element stands
//! for. Returning `None` marks the element as unrecognized: it still becomes
//! a span (so its text is kept) but carries no formatting.
//!
//! Any `Fn(&Element) -> Option<SpanFormat>` closure is a transformer.
//! Transformers chain with [`TransformerExt::or`]:
//!
//! ```
//! use rux_markup::{ColorTransformer, DefaultTransformer, TransformerExt, format_inline};
//!
//! let both = DefaultTransformer.or(ColorTransformer);
//! let text = format_inline("<format><bold>a</bold><red>b</red></format>", &both);
//! assert_eq!(text.flatten().len(), 2);
//! ```

use rux_style::{PackedRgba, Style};

/// A parsed markup element (name and attributes, no children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub(crate) fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        Self { name, attributes }
    }

    /// Qualified name as written, e.g. `x:bold`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without namespace prefix, e.g. `bold`.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.rsplit_once(':').map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Case-insensitive comparison of the local name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.local_name().eq_ignore_ascii_case(name)
    }

    /// Attribute value by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Formatting applied by a recognized element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanFormat {
    pub style: Style,
    pub link: Option<String>,
}

impl SpanFormat {
    #[must_use]
    pub fn styled(style: Style) -> Self {
        Self { style, link: None }
    }

    /// A hyperlink span. Links are underlined.
    #[must_use]
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            style: Style::new().underline(),
            link: Some(url.into()),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Maps elements to formatting.
pub trait Transformer {
    /// Formatting for `element`, or `None` if unrecognized.
    fn transform(&self, element: &Element) -> Option<SpanFormat>;
}

impl<F> Transformer for F
where
    F: Fn(&Element) -> Option<SpanFormat>,
{
    fn transform(&self, element: &Element) -> Option<SpanFormat> {
        self(element)
    }
}

/// Combinators for transformers.
pub trait TransformerExt: Transformer + Sized {
    /// Try `self` first, then `other`.
    fn or<T: Transformer>(self, other: T) -> Or<Self, T> {
        Or(self, other)
    }
}

impl<T: Transformer> TransformerExt for T {}

/// See [`TransformerExt::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<A: Transformer, B: Transformer> Transformer for Or<A, B> {
    fn transform(&self, element: &Element) -> Option<SpanFormat> {
        self.0
            .transform(element)
            .or_else(|| self.1.transform(element))
    }
}

/// Recognizes `bold`, `italic` and `underline` (case-insensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransformer;

impl Transformer for DefaultTransformer {
    fn transform(&self, element: &Element) -> Option<SpanFormat> {
        let style = match element.local_name().to_ascii_lowercase().as_str() {
            "bold" => Style::new().bold(),
            "italic" => Style::new().italic(),
            "underline" => Style::new().underline(),
            _ => return None,
        };
        Some(SpanFormat::styled(style))
    }
}

/// Recognizes `red`, `green` and `blue` foreground colors, and
/// `<color value="..." background="...">` with named or `#rgb`/`#rrggbb`
/// colors.
///
/// A `color` element with neither attribute parsable is left unrecognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTransformer;

impl Transformer for ColorTransformer {
    fn transform(&self, element: &Element) -> Option<SpanFormat> {
        let name = element.local_name().to_ascii_lowercase();
        match name.as_str() {
            "red" | "green" | "blue" => {
                let color = PackedRgba::from_name(&name)?;
                Some(SpanFormat::styled(Style::new().fg(color)))
            }
            "color" => {
                let fg = element.attribute("value").and_then(PackedRgba::parse);
                let bg = element.attribute("background").and_then(PackedRgba::parse);
                if fg.is_none() && bg.is_none() {
                    return None;
                }
                let mut style = Style::new();
                if let Some(fg) = fg {
                    style = style.fg(fg);
                }
                if let Some(bg) = bg {
                    style = style.bg(bg);
                }
                Some(SpanFormat::styled(style))
            }
            _ => None,
        }
    }
}

/// Recognizes `<a href="...">` hyperlinks.
///
/// An `a` element without `href` is left unrecognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTransformer;

impl Transformer for LinkTransformer {
    fn transform(&self, element: &Element) -> Option<SpanFormat> {
        if !element.is("a") {
            return None;
        }
        let href = element.attribute("href")?;
        Some(SpanFormat::link(href).with_style(Style::new().fg(PackedRgba::BLUE).underline()))
    }
}
