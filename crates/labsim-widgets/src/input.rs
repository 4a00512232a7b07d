//! Validation of free-text user input.

use thiserror::Error;

/// Rejected user input. Always surfaced as a message next to the field;
/// the widget state is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("enter a value first")]
    Blank,

    #[error("`{0}` is not a number")]
    NotNumeric(String),
}

/// Trimmed non-empty text, or [`InputError::Blank`]
pub fn non_blank(text: &str) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank);
    }
    Ok(trimmed)
}

/// Parse a non-negative integer out of user text
pub fn parse_number(text: &str) -> Result<u32, InputError> {
    let trimmed = non_blank(text)?;
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::NotNumeric(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_rejected() {
        assert_eq!(non_blank("   "), Err(InputError::Blank));
        assert_eq!(parse_number(""), Err(InputError::Blank));
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(parse_number(" 42 "), Ok(42));
        assert_eq!(
            parse_number("4x"),
            Err(InputError::NotNumeric("4x".into()))
        );
    }
}
