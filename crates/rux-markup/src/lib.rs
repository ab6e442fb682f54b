#![forbid(unsafe_code)]

//! Inline rich text from a small XML micro-markup.
//!
//! Source text is a single `<format>` element whose children are text and
//! nested elements. Each element is handed to a [`Transformer`], which says
//! what formatting it stands for. Unrecognized elements keep their text but
//! add no formatting.
//!
//! - [`parse_inline`] - strict: returns a [`MarkupError`] on malformed input
//! - [`format_inline`] - lenient: malformed input renders as raw text
//! - [`InlineFormatter`] - holds text and transformer, recomputes on change
//!
//! # Example
//! ```
//! use rux_markup::{DefaultTransformer, format_inline};
//! use rux_style::StyleFlags;
//!
//! let inline = format_inline(
//!     "<format>Hello <bold>bold</bold> world</format>",
//!     &DefaultTransformer,
//! );
//! let runs = inline.flatten();
//! assert_eq!(runs.len(), 3);
//! assert!(runs[1].style.has_attr(StyleFlags::BOLD));
//! assert_eq!(inline.to_plain_text(), "Hello bold world");
//!
//! // Not well-formed: the source is shown as-is.
//! let raw = format_inline("<format>oops", &DefaultTransformer);
//! assert_eq!(raw.to_plain_text(), "<format>oops");
//! ```

pub mod error;
pub mod inline;
pub mod parser;
pub mod transform;

use std::fmt;
use std::sync::Arc;

pub use error::MarkupError;
pub use inline::{Inline, Span, StyledRun};
pub use parser::MAX_DEPTH;
pub use transform::{
    ColorTransformer, DefaultTransformer, Element, LinkTransformer, Or, SpanFormat, Transformer,
    TransformerExt,
};

#[allow(unused_imports)]
pub(crate) use rux_core::debug;

/// Required local name of the root element.
pub const ROOT_ELEMENT: &str = "format";

/// Parse `source` into an inline tree.
///
/// The root element must be `format` (local name, any case). The root is
/// passed to the transformer like any other element.
pub fn parse_inline<T>(source: &str, transformer: &T) -> Result<Inline, MarkupError>
where
    T: Transformer + ?Sized,
{
    let (name, span) = parser::parse_document(source, transformer)?;
    let local = name.rsplit_once(':').map_or(name.as_str(), |(_, local)| local);
    if !local.eq_ignore_ascii_case(ROOT_ELEMENT) {
        return Err(MarkupError::WrongRoot { found: name });
    }
    Ok(Inline::Span(span))
}

/// Like [`parse_inline`], but never fails: on any error the whole source
/// becomes a single unformatted run.
pub fn format_inline<T>(source: &str, transformer: &T) -> Inline
where
    T: Transformer + ?Sized,
{
    match parse_inline(source, transformer) {
        Ok(inline) => inline,
        Err(_err) => {
            debug!(error = %_err, "markup not well-formed, showing raw text");
            Inline::Run(source.to_string())
        }
    }
}

/// A transformer that can be shared with an [`InlineFormatter`].
pub type SharedTransformer = Arc<dyn Transformer + Send + Sync>;

/// Text plus transformer, with the formatted output cached.
///
/// The output is recomputed whenever the text or transformer changes while
/// both are set. Clearing either one keeps the last output.
pub struct InlineFormatter {
    text: Option<String>,
    transformer: Option<SharedTransformer>,
    output: Option<Inline>,
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self {
            text: None,
            transformer: Some(Arc::new(DefaultTransformer)),
            output: None,
        }
    }
}

impl fmt::Debug for InlineFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineFormatter")
            .field("text", &self.text)
            .field("has_transformer", &self.transformer.is_some())
            .field("output", &self.output)
            .finish()
    }
}

impl InlineFormatter {
    /// A formatter with the [`DefaultTransformer`] and no text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_text`](Self::set_text).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Builder form of [`set_transformer`](Self::set_transformer).
    #[must_use]
    pub fn with_transformer(mut self, transformer: impl Transformer + Send + Sync + 'static) -> Self {
        self.set_transformer(transformer);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.refresh();
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn set_transformer(&mut self, transformer: impl Transformer + Send + Sync + 'static) {
        self.set_shared_transformer(Arc::new(transformer));
    }

    /// Use a transformer shared with other formatters.
    pub fn set_shared_transformer(&mut self, transformer: SharedTransformer) {
        self.transformer = Some(transformer);
        self.refresh();
    }

    pub fn clear_transformer(&mut self) {
        self.transformer = None;
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Formatted output, if it has ever been computed.
    #[must_use]
    pub fn inline(&self) -> Option<&Inline> {
        self.output.as_ref()
    }

    fn refresh(&mut self) {
        if let (Some(text), Some(transformer)) = (&self.text, &self.transformer) {
            self.output = Some(format_inline(text, &**transformer));
        }
    }
}
