//! Markup parse errors.

/// Errors that can occur while parsing formatting markup.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The source contains no root element.
    NoRoot,
    /// The root element is not `<format>`.
    WrongRoot { found: String },
    /// Input ended inside a tag, comment or element.
    UnexpectedEnd { position: usize },
    /// A character that is not allowed at this point.
    UnexpectedChar { found: char, position: usize },
    /// A closing tag does not match the open element.
    MismatchedTag {
        expected: String,
        found: String,
        position: usize,
    },
    /// An element or attribute name is missing or malformed.
    InvalidName { position: usize },
    /// The same attribute appears twice on one element.
    DuplicateAttribute { name: String, position: usize },
    /// A namespace prefix with no `xmlns:` declaration in scope.
    UndeclaredPrefix { prefix: String, position: usize },
    /// An unknown or malformed `&...;` reference.
    InvalidEntity { entity: String, position: usize },
    /// Non-whitespace content after the root element.
    TrailingContent { position: usize },
    /// Nesting depth limit exceeded.
    DepthLimitExceeded { position: usize },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoot => write!(f, "no root element"),
            Self::WrongRoot { found } => {
                write!(f, "root element must be <format>, found <{}>", found)
            }
            Self::UnexpectedEnd { position } => {
                write!(f, "unexpected end of input at position {}", position)
            }
            Self::UnexpectedChar { found, position } => {
                write!(f, "unexpected character {:?} at position {}", found, position)
            }
            Self::MismatchedTag {
                expected,
                found,
                position,
            } => write!(
                f,
                "mismatched tag at position {}: expected </{}>, found </{}>",
                position, expected, found
            ),
            Self::InvalidName { position } => {
                write!(f, "invalid name at position {}", position)
            }
            Self::DuplicateAttribute { name, position } => {
                write!(f, "duplicate attribute '{}' at position {}", name, position)
            }
            Self::UndeclaredPrefix { prefix, position } => {
                write!(f, "undeclared namespace prefix '{}' at position {}", prefix, position)
            }
            Self::InvalidEntity { entity, position } => {
                write!(f, "invalid entity '&{};' at position {}", entity, position)
            }
            Self::TrailingContent { position } => {
                write!(f, "content after root element at position {}", position)
            }
            Self::DepthLimitExceeded { position } => {
                write!(f, "nesting depth limit exceeded at position {}", position)
            }
        }
    }
}

impl std::error::Error for MarkupError {}
