#![forbid(unsafe_code)]

//! Error-detail surface state.
//!
//! The host shows the full error list in a tooltip, flyout or popup of its
//! choosing. [`ErrorDetail`] decides whether that surface is open and what
//! text it carries; the host only mirrors it.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Update with no errors | Content emptied, surface closed |
//! | Open with blank content | No-op |
//! | Toggle with blank content | No-op |

/// Default bullet prefix placed before each message.
pub const DEFAULT_BULLET: &str = "● ";

/// Join messages into detail text: one bulleted message per line, no
/// trailing newline after the last.
///
/// ```
/// use rux_validation::detail::format_error_list;
///
/// let text = format_error_list(&["required", "need @"], "● ");
/// assert_eq!(text, "● required\n● need @");
/// ```
#[must_use]
pub fn format_error_list<S: AsRef<str>>(errors: &[S], bullet: &str) -> String {
    let mut out = String::new();
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(bullet);
        out.push_str(error.as_ref());
    }
    out
}

/// Open/closed state and content of the error-detail surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    open: bool,
    content: String,
    just_opened: bool,
}

impl ErrorDetail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current detail text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content from a fresh error list.
    ///
    /// Opens the surface when `errors` is non-empty and `open_on_error` is
    /// set; closes it whenever the content ends up blank.
    pub fn update<S: AsRef<str>>(&mut self, errors: &[S], bullet: &str, open_on_error: bool) {
        self.content = format_error_list(errors, bullet);
        if !errors.is_empty() && open_on_error {
            self.open();
        }
        if self.content.trim().is_empty() {
            self.close();
        }
    }

    /// Open the surface if it has something to show.
    pub fn open(&mut self) {
        if !self.open && !self.content.trim().is_empty() {
            self.open = true;
            self.just_opened = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.just_opened = false;
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Empty the content and close.
    pub fn clear(&mut self) {
        self.content.clear();
        self.close();
    }

    /// Check and clear the "just opened" flag (for screen reader
    /// announcements).
    pub fn take_just_opened(&mut self) -> bool {
        std::mem::take(&mut self.just_opened)
    }
}
