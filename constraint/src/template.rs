//! Message template parsing.
//!
//! Templates use the familiar positional syntax: `{0}` inserts the first
//! argument, `{1,number}` or `{2,date,short}` add a format type and style.
//! A single quote starts a quoted literal section, `''` is a literal quote.

use cmv_core::Text;
use regex_lite::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors produced while parsing a template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Invalid language tag '{language}'")]
    InvalidLanguage { language: String },

    #[error("Unterminated quote starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("Unmatched '{{' at offset {offset}")]
    UnmatchedOpenBrace { offset: usize },

    #[error("Unmatched '}}' at offset {offset}")]
    UnmatchedCloseBrace { offset: usize },

    #[error("Invalid argument '{{{argument}}}' at offset {offset}")]
    InvalidArgument { offset: usize, argument: String },

    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

fn pattern(
    cell: &'static OnceLock<Result<Regex, regex_lite::Error>>,
    source: &str,
) -> Result<&'static Regex, TemplateError> {
    cell.get_or_init(|| Regex::new(source))
        .as_ref()
        .map_err(|e| TemplateError::Pattern {
            message: e.to_string(),
        })
}

fn argument_pattern() -> Result<&'static Regex, TemplateError> {
    static ARGUMENT: OnceLock<Result<Regex, regex_lite::Error>> = OnceLock::new();
    pattern(
        &ARGUMENT,
        r"(?s)^\s*(\d+)\s*(,\s*(number|date|time|choice)\s*(,.*)?)?$",
    )
}

fn language_pattern() -> Result<&'static Regex, TemplateError> {
    static LANGUAGE: OnceLock<Result<Regex, regex_lite::Error>> = OnceLock::new();
    pattern(&LANGUAGE, r"^[a-zA-Z]{2,8}(-[a-zA-Z0-9]{1,8})*$")
}

/// Check a language tag such as `en` or `de-CH`.
pub fn validate_language(language: &str) -> Result<(), TemplateError> {
    if language_pattern()?.is_match(language) {
        Ok(())
    } else {
        Err(TemplateError::InvalidLanguage {
            language: language.to_string(),
        })
    }
}

/// Parse a template and return the argument indices it uses, in order.
pub fn parse_template(template: &str) -> Result<Vec<usize>, TemplateError> {
    let mut indices = Vec::new();
    let mut chars = template.char_indices().peekable();
    let mut quote_start = None;

    while let Some((offset, c)) = chars.next() {
        match c {
            '\'' => {
                if chars.peek().map(|&(_, next)| next) == Some('\'') {
                    chars.next();
                } else if quote_start.is_some() {
                    quote_start = None;
                } else {
                    quote_start = Some(offset);
                }
            }
            _ if quote_start.is_some() => {}
            '{' => {
                let mut depth = 1;
                let mut end = None;
                for (inner, c) in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                end = Some(inner);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let end = end.ok_or(TemplateError::UnmatchedOpenBrace { offset })?;
                let argument = &template[offset + 1..end];
                indices.push(parse_argument(offset, argument)?);
            }
            '}' => return Err(TemplateError::UnmatchedCloseBrace { offset }),
            _ => {}
        }
    }

    match quote_start {
        Some(offset) => Err(TemplateError::UnterminatedQuote { offset }),
        None => Ok(indices),
    }
}

fn parse_argument(offset: usize, argument: &str) -> Result<usize, TemplateError> {
    let invalid = || TemplateError::InvalidArgument {
        offset,
        argument: argument.to_string(),
    };
    let captures = argument_pattern()?.captures(argument).ok_or_else(invalid)?;
    captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(invalid)
}

/// Validate one localized template text.
pub fn check_text(text: &Text) -> Result<Vec<usize>, TemplateError> {
    validate_language(&text.language)?;
    parse_template(&text.value)
}
