//! Stack-based evaluation: one sub-evaluator per open parenthesis level

mod controller;
mod errors;
mod sub_evaluator;
mod token;

pub use controller::Controller;
pub use errors::EvalError;
pub use sub_evaluator::SubEvaluator;
pub use token::{Operator, Token};
