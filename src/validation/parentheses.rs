use log::{debug, warn};

use crate::validation::errors::ValidationError;

/// # Errors
///
/// Returns an error if the running open count drops below zero, reporting the
/// offending `)`, or if it is nonzero at the end, reporting the end of input.
pub fn check_parentheses(expression: &str) -> Result<(), ValidationError> {
    let mut open: usize = 0;

    for (position, c) in expression.chars().enumerate() {
        match c {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    warn!("Unmatched ')' at position {} in '{}'", position, expression);
                    return Err(ValidationError::UnbalancedParentheses { position });
                }
                open -= 1;
            }
            _ => {}
        }
    }

    if open != 0 {
        warn!("{} unclosed '(' in '{}'", open, expression);
        return Err(ValidationError::UnbalancedParentheses {
            position: expression.chars().count(),
        });
    }

    debug!("Parentheses balanced");
    Ok(())
}
