use thiserror::Error;

/// Errors raised while checking an expression before evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },
}
