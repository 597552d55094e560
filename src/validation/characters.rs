use log::{debug, warn};

use crate::validation::errors::ValidationError;

/// Whether `c` belongs to the expression alphabet: ASCII digits, `+ - * /` and parentheses.
#[inline]
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '(' | ')' | '+' | '-' | '*' | '/')
}

/// # Errors
///
/// Returns an error naming the first character outside the expression alphabet.
/// Whitespace, decimal points and commas are all rejected.
pub fn check_characters(expression: &str) -> Result<(), ValidationError> {
    let invalid = expression
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_allowed(c));

    if let Some((position, character)) = invalid {
        warn!(
            "Expression '{}' contains invalid character '{}' at position {}",
            expression, character, position
        );
        return Err(ValidationError::InvalidCharacter {
            character,
            position,
        });
    }

    debug!("All characters allowed");
    Ok(())
}
