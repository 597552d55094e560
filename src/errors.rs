use thiserror::Error;

use crate::evaluator::EvalError;
use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}
