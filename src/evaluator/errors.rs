use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot parse numeral: '{0}'")]
    NumeralParseError(String),
    #[error("Inconsistent expression structure: {0}")]
    StructuralError(String),
}
