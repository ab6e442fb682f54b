//! Inline rich-text tree.
//!
//! [`Inline`] mirrors the structure of the source markup: a [`Span`] per
//! element, a `Run` per text node. Hosts that build native rich-text
//! objects walk the tree; hosts that only draw flat styled runs call
//! [`Inline::flatten`].

use rux_style::Style;

/// A node in the formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text.
    Run(String),
    /// A formatted group of child inlines.
    Span(Span),
}

/// A formatted group: style and optional link applied to all children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub style: Style,
    pub link: Option<String>,
    pub children: Vec<Inline>,
}

/// A leaf run with the style and link accumulated from its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
    pub link: Option<String>,
}

impl Span {
    /// An unstyled span with no children.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }
}

impl Inline {
    /// Concatenated text of all runs, markup removed.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Run(text) => out.push_str(text),
            Self::Span(span) => {
                for child in &span.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Flatten to leaf runs in document order.
    ///
    /// Styles merge from outer to inner; the innermost link wins. Empty
    /// runs are dropped.
    #[must_use]
    pub fn flatten(&self) -> Vec<StyledRun> {
        let mut out = Vec::new();
        self.flatten_into(Style::new(), None, &mut out);
        out
    }

    fn flatten_into(&self, style: Style, link: Option<&str>, out: &mut Vec<StyledRun>) {
        match self {
            Self::Run(text) => {
                if !text.is_empty() {
                    out.push(StyledRun {
                        text: text.clone(),
                        style,
                        link: link.map(str::to_string),
                    });
                }
            }
            Self::Span(span) => {
                let style = style.merge(&span.style);
                let link = span.link.as_deref().or(link);
                for child in &span.children {
                    child.flatten_into(style, link, out);
                }
            }
        }
    }

    /// The span, if this node is one.
    #[must_use]
    pub fn as_span(&self) -> Option<&Span> {
        match self {
            Self::Span(span) => Some(span),
            Self::Run(_) => None,
        }
    }
}
