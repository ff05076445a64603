//! Partial string formatting over the `{name}` placeholder grammar.
//!
//! [`PartialFormatter`] substitutes every placeholder whose name is present
//! in the supplied value map and re-emits every other placeholder as a bare
//! `{name}`, so the output remains a valid template for a later pass with
//! more values. Repeated application with cumulatively more keys converges
//! to the same string as a single application with the union of the keys.

pub mod parser;

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::ioutils::path_to_str;
pub use parser::{parse, Placeholder, Segment};

/// Trait for string formatting engines used during template processing.
pub trait TemplateFormatter {
    /// Formats a template string with the given values.
    ///
    /// # Arguments
    /// * `template` - Template string to format
    /// * `values` - Named substitution values
    ///
    /// # Returns
    /// * `Result<String>` - Formatted string
    fn format(&self, template: &str, values: &Map<String, Value>) -> Result<String>;

    /// Formats a path with the given values.
    ///
    /// # Arguments
    /// * `template_path` - Path to format
    /// * `values` - Named substitution values
    ///
    /// # Returns
    /// * `Result<String>` - Formatted path as string
    fn format_path(
        &self,
        template_path: &Path,
        values: &Map<String, Value>,
    ) -> Result<String>;
}

/// Formatter that fills in known placeholder values and leaves unknown
/// placeholders syntactically intact. Stateless and reusable across any
/// number of independent template strings.
pub struct PartialFormatter;

impl PartialFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PartialFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFormatter for PartialFormatter {
    fn format(&self, template: &str, values: &Map<String, Value>) -> Result<String> {
        let segments = parse(template)?;

        // Unknown names get a passthrough value of "{name}" in a local copy
        // of the map; the caller's map is never mutated.
        let mut augmented: Option<Map<String, Value>> = None;
        for segment in &segments {
            if let Some(placeholder) = &segment.placeholder {
                if !values.contains_key(&placeholder.name) {
                    augmented.get_or_insert_with(|| values.clone()).insert(
                        placeholder.name.clone(),
                        Value::String(format!("{{{}}}", placeholder.name)),
                    );
                }
            }
        }
        let effective = augmented.as_ref().unwrap_or(values);

        let mut output = String::new();
        for segment in &segments {
            output.push_str(&segment.literal);
            let Some(placeholder) = &segment.placeholder else { continue };

            if let Some(value) = values.get(&placeholder.name) {
                let rendered = apply_conversion(value, placeholder.conversion);
                let rendered = match &placeholder.format_spec {
                    Some(spec) => apply_format_spec(&rendered, spec)?,
                    None => rendered,
                };
                output.push_str(&rendered);
            } else if let Some(passthrough) = effective.get(&placeholder.name) {
                // Passthrough values are inserted as literal text, so any
                // conversion or format spec on an unresolved placeholder is
                // dropped.
                output.push_str(passthrough.as_str().unwrap_or_default());
            }
        }

        Ok(output)
    }

    fn format_path(
        &self,
        template_path: &Path,
        values: &Map<String, Value>,
    ) -> Result<String> {
        let path_str = path_to_str(template_path)?;
        self.format(path_str, values)
    }
}

/// Returns the placeholder names that remain unresolved in `template`, in
/// order of appearance.
pub fn unresolved_names(template: &str) -> Result<Vec<String>> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|segment| segment.placeholder.map(|p| p.name))
        .collect())
}

/// Stringifies a value and applies the conversion flag.
///
/// `!s` is the identity on the stringified value; `!r` quotes it. Strings
/// render verbatim, any other JSON value renders as its canonical JSON text.
fn apply_conversion(value: &Value, conversion: Option<char>) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match conversion {
        Some('r') => format!("{rendered:?}"),
        _ => rendered,
    }
}

/// Applies the supported format-spec subset `[[fill]align][0][width][.precision]`
/// to an already-stringified value.
fn apply_format_spec(value: &str, spec: &str) -> Result<String> {
    if spec.is_empty() {
        return Ok(value.to_string());
    }

    let chars: Vec<char> = spec.chars().collect();
    let mut index = 0;
    let mut fill = ' ';
    let mut align = '<';

    if chars.len() >= 2 && matches!(chars[1], '<' | '>' | '^') {
        fill = chars[0];
        align = chars[1];
        index = 2;
    } else if matches!(chars[0], '<' | '>' | '^') {
        align = chars[0];
        index = 1;
    }

    if index < chars.len() && chars[index] == '0' {
        fill = '0';
        align = '>';
        index += 1;
    }

    let mut width = 0usize;
    while index < chars.len() && chars[index].is_ascii_digit() {
        width = width * 10 + chars[index].to_digit(10).unwrap_or(0) as usize;
        index += 1;
    }

    let mut precision: Option<usize> = None;
    if index < chars.len() && chars[index] == '.' {
        index += 1;
        let mut digits = 0usize;
        let mut seen = false;
        while index < chars.len() && chars[index].is_ascii_digit() {
            digits = digits * 10 + chars[index].to_digit(10).unwrap_or(0) as usize;
            index += 1;
            seen = true;
        }
        if !seen {
            return Err(Error::ParseError(format!(
                "format spec '{spec}' is missing a precision after '.'"
            )));
        }
        precision = Some(digits);
    }

    if index != chars.len() {
        return Err(Error::ParseError(format!("unsupported format spec '{spec}'")));
    }

    let mut result: String = match precision {
        Some(precision) => value.chars().take(precision).collect(),
        None => value.to_string(),
    };

    let length = result.chars().count();
    if length < width {
        let padding = width - length;
        match align {
            '>' => result = format!("{}{}", fill.to_string().repeat(padding), result),
            '^' => {
                let left = padding / 2;
                let right = padding - left;
                result = format!(
                    "{}{}{}",
                    fill.to_string().repeat(left),
                    result,
                    fill.to_string().repeat(right)
                );
            }
            _ => result.push_str(&fill.to_string().repeat(padding)),
        }
    }

    Ok(result)
}
