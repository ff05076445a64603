//! Segment parser for the `{name}` placeholder grammar.
//!
//! A template string is an alternation of literal text and placeholders of
//! the form `{name}`, `{name!conversion}` or `{name:format_spec}`. Doubled
//! braces (`{{` and `}}`) escape literal braces. Parsing produces an ordered
//! sequence of [`Segment`]s that the formatter substitutes over.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// A single substitution point inside a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Placeholder identifier, e.g. `name` in `{name}`.
    pub name: String,
    /// Conversion flag, e.g. `r` in `{name!r}`.
    pub conversion: Option<char>,
    /// Format spec, e.g. `>10` in `{name:>10}`.
    pub format_spec: Option<String>,
}

/// A run of literal text followed by an optional placeholder.
///
/// The final segment of a template usually carries no placeholder; such a
/// segment is literal-only and is never substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub literal: String,
    pub placeholder: Option<Placeholder>,
}

/// Conversion flags accepted after `!`.
const CONVERSIONS: &[char] = &['s', 'r'];

/// Parses a template string into an ordered sequence of segments.
///
/// # Arguments
/// * `template` - Template string to parse
///
/// # Returns
/// * `Result<Vec<Segment>>` - The parsed segments or a parse error
pub fn parse(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                let placeholder = parse_placeholder(&mut chars, position)?;
                segments.push(Segment {
                    literal: std::mem::take(&mut literal),
                    placeholder: Some(placeholder),
                });
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(Error::ParseError(format!(
                        "single '}}' without a matching '{{' at byte {position}"
                    )));
                }
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() || segments.is_empty() {
        segments.push(Segment { literal, placeholder: None });
    }

    Ok(segments)
}

/// Parses one placeholder body, starting right after the opening `{`.
fn parse_placeholder(
    chars: &mut Peekable<CharIndices<'_>>,
    open_position: usize,
) -> Result<Placeholder> {
    let mut field = String::new();
    loop {
        match chars.next() {
            None => {
                return Err(Error::ParseError(format!(
                    "unterminated placeholder opened at byte {open_position}, expected '}}'"
                )))
            }
            Some((_, '}')) => break,
            Some((position, '{')) => {
                return Err(Error::ParseError(format!(
                    "'{{' inside a placeholder at byte {position}; nested placeholders are not supported"
                )))
            }
            Some((_, ch)) => field.push(ch),
        }
    }

    // Split `name[!conversion][:format_spec]`. The format spec is opaque
    // text, so everything after the first ':' belongs to it.
    let (head, format_spec) = match field.find(':') {
        Some(index) => (&field[..index], Some(field[index + 1..].to_string())),
        None => (field.as_str(), None),
    };

    let (name, conversion) = match head.find('!') {
        Some(index) => {
            let conversion = &head[index + 1..];
            let mut flags = conversion.chars();
            match (flags.next(), flags.next()) {
                (Some(flag), None) if CONVERSIONS.contains(&flag) => {
                    (&head[..index], Some(flag))
                }
                (Some(flag), None) => {
                    return Err(Error::ParseError(format!(
                        "unknown conversion '!{flag}' in placeholder opened at byte {open_position}"
                    )))
                }
                _ => {
                    return Err(Error::ParseError(format!(
                        "expected a single conversion character after '!' in placeholder opened at byte {open_position}"
                    )))
                }
            }
        }
        None => (head, None),
    };

    validate_name(name, open_position)?;

    Ok(Placeholder { name: name.to_string(), conversion, format_spec })
}

/// Checks that a placeholder name is a non-empty, non-positional identifier.
fn validate_name(name: &str, open_position: usize) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ParseError(format!(
            "empty placeholder '{{}}' at byte {open_position}"
        )));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::UnsupportedPlaceholderError(name.to_string()));
    }
    if !is_valid_name(name) {
        return Err(Error::ParseError(format!(
            "invalid placeholder name '{name}' at byte {open_position}"
        )));
    }
    Ok(())
}

/// Returns whether `name` is a valid placeholder identifier: a letter or
/// underscore followed by letters, digits or underscores.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
