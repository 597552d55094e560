//! Input validation run over the whole expression before any evaluation

mod characters;
mod errors;
mod parentheses;

pub use characters::{check_characters, is_allowed};
pub use errors::ValidationError;
pub use parentheses::check_parentheses;

use log::debug;

/// Validate an expression: allowed alphabet first, then parenthesis balance.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacter`] for the first character outside
/// `0-9 ( ) + - * /`, or [`ValidationError::UnbalancedParentheses`] if a `)` has
/// no matching `(` or an `(` is never closed.
pub fn validate_expression(expression: &str) -> Result<(), ValidationError> {
    debug!("Validating expression: '{}'", expression);

    check_characters(expression)?;
    check_parentheses(expression)?;

    debug!("Expression validation successful");
    Ok(())
}
