//! Parser for the formatting micro-markup.
//!
//! The accepted language is a small XML subset:
//!
//! - elements with attributes (`<a href="...">`), self-closing elements
//! - text, with the five predefined entities and numeric character references
//! - `<![CDATA[...]]>` sections (literal text)
//! - comments and processing instructions (ignored)
//!
//! Whitespace in text is preserved. Line endings are normalized to `\n`.
//! Document type declarations are rejected.
//!
//! Prefixed names (`x:bold`) need an `xmlns:x` declaration on the element or
//! an ancestor. The `xml` prefix is always bound.

use std::borrow::Cow;

use crate::error::MarkupError;
use crate::inline::{Inline, Span};
use crate::transform::{Element, Transformer};

/// Maximum element nesting depth.
pub const MAX_DEPTH: usize = 50;

/// Parse `source` into an element name and its span, running `transformer`
/// on every element.
pub(crate) fn parse_document<T>(
    source: &str,
    transformer: &T,
) -> Result<(String, Span), MarkupError>
where
    T: Transformer + ?Sized,
{
    let src: Cow<'_, str> = if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(source)
    };
    let mut parser = Parser {
        src: &src,
        pos: 0,
        prefixes: Vec::new(),
        transformer,
    };
    parser.document()
}

struct Parser<'s, 't, T: ?Sized> {
    src: &'s str,
    pos: usize,
    /// Namespace prefixes declared by the open elements, innermost last.
    prefixes: Vec<String>,
    transformer: &'t T,
}

impl<T: Transformer + ?Sized> Parser<'_, '_, T> {
    fn document(&mut self) -> Result<(String, Span), MarkupError> {
        self.skip_misc()?;
        if self.at_end() {
            return Err(MarkupError::NoRoot);
        }
        if self.starts_with("<!") {
            return Err(MarkupError::UnexpectedChar {
                found: '!',
                position: self.pos + 1,
            });
        }
        if !self.starts_with("<") {
            return Err(self.unexpected());
        }

        let root = self.element(0)?;

        self.skip_misc()?;
        if !self.at_end() {
            return Err(MarkupError::TrailingContent { position: self.pos });
        }
        Ok(root)
    }

    /// Parse one element starting at `<`.
    fn element(&mut self, depth: usize) -> Result<(String, Span), MarkupError> {
        let start = self.pos;
        if depth >= MAX_DEPTH {
            return Err(MarkupError::DepthLimitExceeded { position: start });
        }
        self.expect('<')?;
        let name = self.name()?;

        let mut attributes: Vec<(String, String)> = Vec::new();
        let mut attribute_positions: Vec<usize> = Vec::new();
        let self_closing = loop {
            let had_space = self.skip_whitespace();
            match self.peek() {
                None => return Err(MarkupError::UnexpectedEnd { position: self.pos }),
                Some('/') => {
                    self.bump();
                    self.expect('>')?;
                    break true;
                }
                Some('>') => {
                    self.bump();
                    break false;
                }
                Some(_) if !had_space => return Err(self.unexpected()),
                Some(_) => {
                    let attr_pos = self.pos;
                    let attr_name = self.name()?;
                    self.skip_whitespace();
                    self.expect('=')?;
                    self.skip_whitespace();
                    let value = self.attribute_value()?;
                    if attributes.iter().any(|(n, _)| *n == attr_name) {
                        return Err(MarkupError::DuplicateAttribute {
                            name: attr_name,
                            position: attr_pos,
                        });
                    }
                    attributes.push((attr_name, value));
                    attribute_positions.push(attr_pos);
                }
            }
        };

        let scope = self.prefixes.len();
        for ((attr_name, _), &pos) in attributes.iter().zip(&attribute_positions) {
            if let Some(("xmlns", declared)) = split_qname(attr_name, pos)? {
                self.prefixes.push(declared.to_string());
            }
        }
        if let Some((prefix, _)) = split_qname(&name, start + 1)? {
            self.require_declared(prefix, start + 1)?;
        }
        for ((attr_name, _), &pos) in attributes.iter().zip(&attribute_positions) {
            match split_qname(attr_name, pos)? {
                Some(("xmlns", _)) | None => {}
                Some((prefix, _)) => self.require_declared(prefix, pos)?,
            }
        }

        let element = Element::new(name, attributes);
        let format = self.transformer.transform(&element).unwrap_or_default();
        let name = element.name().to_string();
        let mut span = Span {
            style: format.style,
            link: format.link,
            children: Vec::new(),
        };
        if self_closing {
            self.prefixes.truncate(scope);
            return Ok((name, span));
        }

        let mut text = String::new();
        loop {
            if self.at_end() {
                return Err(MarkupError::UnexpectedEnd { position: self.pos });
            }
            if self.starts_with("</") {
                let close_pos = self.pos;
                self.pos += 2;
                let close = self.name()?;
                self.skip_whitespace();
                self.expect('>')?;
                if close != name {
                    return Err(MarkupError::MismatchedTag {
                        expected: name,
                        found: close,
                        position: close_pos,
                    });
                }
                flush_text(&mut text, &mut span);
                self.prefixes.truncate(scope);
                return Ok((name, span));
            } else if self.starts_with("<!--") {
                self.skip_delimited("<!--", "-->")?;
            } else if self.starts_with("<![CDATA[") {
                let data = self.delimited("<![CDATA[", "]]>")?;
                text.push_str(data);
            } else if self.starts_with("<?") {
                self.skip_delimited("<?", "?>")?;
            } else if self.starts_with("<!") {
                return Err(MarkupError::UnexpectedChar {
                    found: '!',
                    position: self.pos + 1,
                });
            } else if self.starts_with("<") {
                flush_text(&mut text, &mut span);
                let (_, child) = self.element(depth + 1)?;
                span.children.push(Inline::Span(child));
            } else if self.starts_with("&") {
                text.push(self.reference()?);
            } else {
                let rest = self.rest();
                let end = rest.find(['<', '&']).unwrap_or(rest.len());
                text.push_str(&rest[..end]);
                self.pos += end;
            }
        }
    }

    fn name(&mut self) -> Result<String, MarkupError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_name_start(c) => self.bump(),
            Some(_) => return Err(MarkupError::InvalidName { position: start }),
            None => return Err(MarkupError::UnexpectedEnd { position: start }),
        }
        while let Some(c) = self.peek() {
            if !is_name_char(c) {
                break;
            }
            self.bump();
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn attribute_value(&mut self) -> Result<String, MarkupError> {
        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            Some(_) => return Err(self.unexpected()),
            None => return Err(MarkupError::UnexpectedEnd { position: self.pos }),
        };
        self.bump();

        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(MarkupError::UnexpectedEnd { position: self.pos }),
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(value);
                }
                Some('<') => return Err(self.unexpected()),
                Some('&') => value.push(self.reference()?),
                // Attribute-value normalization: whitespace characters become spaces.
                Some('\t' | '\n') => {
                    value.push(' ');
                    self.bump();
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Parse `&name;` or `&#...;` at the cursor.
    fn reference(&mut self) -> Result<char, MarkupError> {
        let start = self.pos;
        self.expect('&')?;
        let rest = self.rest();
        let Some(end) = rest.find(';') else {
            return Err(MarkupError::InvalidEntity {
                entity: rest.chars().take(16).collect(),
                position: start,
            });
        };
        let entity = &rest[..end];
        let resolved = match entity {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity.strip_prefix('#').and_then(char_reference),
        };
        let Some(ch) = resolved else {
            return Err(MarkupError::InvalidEntity {
                entity: entity.to_string(),
                position: start,
            });
        };
        self.pos += end + 1;
        Ok(ch)
    }

    fn require_declared(&self, prefix: &str, position: usize) -> Result<(), MarkupError> {
        if prefix == "xml" || self.prefixes.iter().any(|p| p == prefix) {
            Ok(())
        } else {
            Err(MarkupError::UndeclaredPrefix {
                prefix: prefix.to_string(),
                position,
            })
        }
    }

    /// Whitespace, comments and processing instructions outside the root.
    fn skip_misc(&mut self) -> Result<(), MarkupError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_delimited("<!--", "-->")?;
            } else if self.starts_with("<?") {
                self.skip_delimited("<?", "?>")?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_delimited(&mut self, open: &str, close: &str) -> Result<(), MarkupError> {
        self.delimited(open, close).map(|_| ())
    }

    /// Consume `open ... close` and return the inner text.
    fn delimited(&mut self, open: &str, close: &str) -> Result<&str, MarkupError> {
        let start = self.pos;
        let body_start = start + open.len();
        let src = self.src;
        let Some(len) = src[body_start..].find(close) else {
            return Err(MarkupError::UnexpectedEnd { position: start });
        };
        self.pos = body_start + len + close.len();
        Ok(&src[body_start..body_start + len])
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !matches!(c, ' ' | '\t' | '\n' | '\r') {
                break;
            }
            self.bump();
        }
        self.pos > start
    }

    fn expect(&mut self, want: char) -> Result<(), MarkupError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(_) => Err(self.unexpected()),
            None => Err(MarkupError::UnexpectedEnd { position: self.pos }),
        }
    }

    fn unexpected(&self) -> MarkupError {
        match self.peek() {
            Some(found) => MarkupError::UnexpectedChar {
                found,
                position: self.pos,
            },
            None => MarkupError::UnexpectedEnd { position: self.pos },
        }
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }
}

fn flush_text(text: &mut String, span: &mut Span) {
    if !text.is_empty() {
        span.children.push(Inline::Run(std::mem::take(text)));
    }
}

/// Decode the digits of `&#...;` or `&#x...;`.
fn char_reference(num: &str) -> Option<char> {
    let (digits, radix) = match num.strip_prefix('x') {
        Some(hex) => (hex, 16),
        None => (num, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code).filter(|&c| is_xml_char(c))
}

/// The XML `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Split a qualified name into prefix and local part. `None` when unprefixed.
fn split_qname(name: &str, position: usize) -> Result<Option<(&str, &str)>, MarkupError> {
    match name.split_once(':') {
        None => Ok(None),
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() && !local.contains(':') => {
            Ok(Some((prefix, local)))
        }
        Some(_) => Err(MarkupError::InvalidName { position }),
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || c == '-' || c == '.'
}
