//! Stackcalc - evaluate arithmetic expressions over digits, `+ - * /` and parentheses
//!
//! Expressions are validated in full before any evaluation, then scanned once
//! left to right. Each parenthesis level gets its own token stack that is
//! reduced to a single value when the level closes.

pub mod errors;
pub mod evaluator;
pub mod validation;

// Re-export the main public API
pub use errors::CalculatorError;
pub use evaluator::{Controller, EvalError};
pub use validation::{ValidationError, validate_expression};

use log::debug;
use rayon::prelude::*;

/// Evaluate an expression such as `"(3+3)*4-2"`.
///
/// # Arguments
///
/// * `expression` - Digits, `+ - * /` and parentheses, with no whitespace
///
/// # Errors
///
/// This function will return an error if:
/// * The expression contains a character outside the allowed alphabet
/// * The parentheses are unbalanced
/// * A division meets a zero divisor
///
/// # Examples
///
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("(3+3)*4-2").ok(), Some(22.0));
/// assert!(evaluate("1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f32, CalculatorError> {
    validate_expression(expression)?;

    let value = Controller::new().evaluate(expression)?;
    debug!("'{}' evaluated to {}", expression, value);
    Ok(value)
}

/// Evaluate independent expressions in parallel, keeping input order.
pub fn evaluate_all<S>(expressions: &[S]) -> Vec<Result<f32, CalculatorError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate(expression.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests;
