//! Personalization engine — renders a per-recipient message body from a
//! base template and the recipient's substitution values.
//!
//! Placeholders use `{name}` syntax; `{{` and `}}` are literal-brace
//! escapes. Rendering is a pure function of its inputs.

use std::collections::HashMap;

use thiserror::Error;

/// Errors produced while rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder has no matching substitution value.
    #[error("missing personalization field: {0}")]
    MissingField(String),

    /// A `{` or `}` without a matching partner (and not doubled).
    #[error("unmatched brace in template")]
    UnmatchedBrace,
}

/// Substitute every `{name}` placeholder in `template` with the matching
/// value from `substitutions`.
pub fn render(
    template: &str,
    substitutions: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => name.push(inner),
                        None => return Err(TemplateError::UnmatchedBrace),
                    }
                }
                match substitutions.get(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::MissingField(name)),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnmatchedBrace);
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
