use log::{debug, warn};

use crate::evaluator::errors::EvalError;
use crate::evaluator::token::{Operator, Token};

/// Token stack for a single parenthesis level
#[derive(Debug, Clone)]
pub struct SubEvaluator {
    id: usize,
    stack: Vec<Token>,
    last_operator: Option<Operator>,
}

/// Parse numeral text as a 64-bit float and narrow it to 32 bits.
///
/// Digit text beyond the f64 range is rejected. Folded infinities are
/// rendered as `inf`/`-inf` without digits and still parse.
fn parse_numeral(text: &str) -> Result<f32, EvalError> {
    let value = text
        .parse::<f64>()
        .map_err(|_| EvalError::NumeralParseError(text.to_string()))?;

    if value.is_infinite() && text.bytes().any(|b| b.is_ascii_digit()) {
        warn!("Numeral '{}' is out of range", text);
        return Err(EvalError::NumeralParseError(text.to_string()));
    }

    Ok(value as f32)
}

/// Fold `number` into the running `total`.
///
/// `-` and `/` take `number` as the left operand: tokens are popped newest
/// first, so `number` is the one scanned earlier.
fn combine(operator: Option<Operator>, total: f32, number: f32) -> Result<f32, EvalError> {
    match operator {
        None => Ok(number),
        Some(Operator::Add) => Ok(total + number),
        Some(Operator::Sub) => Ok(number - total),
        Some(Operator::Mul) => Ok(total * number),
        Some(Operator::Div) => {
            if total == 0.0 {
                debug!("Division by zero attempted: {} / {}", number, total);
                Err(EvalError::DivisionByZero)
            } else {
                Ok(number / total)
            }
        }
    }
}

impl SubEvaluator {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            stack: Vec::new(),
            last_operator: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Operator most recently pushed at this level, if any
    pub fn last_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    pub fn push(&mut self, token: Token) {
        debug!("Level {}: push {}", self.id, token);
        if let Token::Operator(op) = token {
            self.last_operator = Some(op);
        }
        self.stack.push(token);
    }

    /// Consume the whole stack and collapse it to one value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when a `/` meets a zero accumulator,
    /// [`EvalError::NumeralParseError`] for unparsable numeral text, and
    /// [`EvalError::StructuralError`] if tokens remain below an opening marker.
    pub fn reduce(&mut self) -> Result<f32, EvalError> {
        let mut total: f32 = 0.0;
        let mut pending: Option<Operator> = None;

        while let Some(token) = self.stack.pop() {
            match token {
                Token::Open => break,
                Token::Close => continue,
                Token::Operator(op) => pending = Some(op),
                Token::Number(text) => {
                    let number = parse_numeral(&text)?;
                    total = combine(pending.take(), total, number)?;
                }
            }
        }

        if !self.stack.is_empty() {
            warn!(
                "Level {}: {} tokens left below opening marker",
                self.id,
                self.stack.len()
            );
            return Err(EvalError::StructuralError(format!(
                "level {} has tokens outside its parentheses",
                self.id
            )));
        }

        debug!("Level {}: reduced to {}", self.id, total);
        Ok(total)
    }
}
