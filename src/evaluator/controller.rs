use log::{debug, warn};

use crate::evaluator::errors::EvalError;
use crate::evaluator::sub_evaluator::SubEvaluator;
use crate::evaluator::token::{Operator, Token};

/// Scans an expression and routes its tokens to per-level sub-evaluators.
///
/// The controller assumes validated input; use [`crate::evaluate`] for the
/// checked entry point. A controller holds the state of one evaluation and is
/// consumed by it.
#[derive(Debug, Default)]
pub struct Controller {
    levels: Vec<SubEvaluator>,
    numeral: String,
    open_parentheses: usize,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sub-evaluators, including the top level once created
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Numeral text scanned but not yet pushed
    pub fn pending_numeral(&self) -> &str {
        &self.numeral
    }

    /// Innermost live level, creating the top level on first use
    fn active(&mut self) -> &mut SubEvaluator {
        if self.levels.is_empty() {
            return self.open_level();
        }
        let index = self.levels.len() - 1;
        &mut self.levels[index]
    }

    fn open_level(&mut self) -> &mut SubEvaluator {
        let id = self.levels.len() + 1;
        debug!("Opening level {}", id);
        self.levels.push(SubEvaluator::new(id));
        &mut self.levels[id - 1]
    }

    fn flush_numeral(&mut self) {
        if self.numeral.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.numeral);
        self.active().push(Token::Number(text));
    }

    fn resolve_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        self.flush_numeral();
        let level = self.active();

        if let Some(previous) = level.last_operator()
            && op.reduces_after(previous)
        {
            debug!("Level {}: '{}' after '{}' forces reduce", level.id(), op, previous);
            let value = level.reduce()?;
            level.push(Token::from_value(value));
        }

        level.push(Token::Operator(op));
        Ok(())
    }

    fn resolve_open(&mut self) {
        self.flush_numeral();
        self.open_parentheses += 1;
        self.open_level().push(Token::Open);
    }

    fn resolve_close(&mut self) -> Result<(), EvalError> {
        self.flush_numeral();

        if self.open_parentheses == 0 {
            warn!("')' with no open level");
            return Err(EvalError::StructuralError(
                "')' with no open level".to_string(),
            ));
        }
        self.open_parentheses -= 1;

        let Some(mut level) = self.levels.pop() else {
            return Err(EvalError::StructuralError(
                "')' with no open level".to_string(),
            ));
        };

        level.push(Token::Close);
        let value = level.reduce()?;
        debug!("Closing level {} with {}", level.id(), value);

        self.active().push(Token::from_value(value));
        Ok(())
    }

    /// Dispatch one character of the expression.
    ///
    /// # Errors
    ///
    /// Propagates any reduction failure triggered by this character, and
    /// returns [`EvalError::StructuralError`] for characters outside the
    /// expression alphabet or a `)` with no level to close.
    pub fn feed(&mut self, c: char) -> Result<(), EvalError> {
        match c {
            '0'..='9' => {
                self.numeral.push(c);
                Ok(())
            }
            '(' => {
                self.resolve_open();
                Ok(())
            }
            ')' => self.resolve_close(),
            _ => match Operator::from_char(c) {
                Some(op) => self.resolve_operator(op),
                None => Err(EvalError::StructuralError(format!(
                    "unexpected character '{}'",
                    c
                ))),
            },
        }
    }

    /// Flush the pending numeral and reduce the top level to the final value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::StructuralError`] if parenthesis levels are still
    /// open, otherwise propagates any failure of the final reduction.
    pub fn finish(mut self) -> Result<f32, EvalError> {
        self.flush_numeral();

        if self.open_parentheses > 0 {
            warn!("{} levels still open at end of input", self.open_parentheses);
            return Err(EvalError::StructuralError(format!(
                "{} unclosed levels at end of input",
                self.open_parentheses
            )));
        }

        self.active().reduce()
    }

    /// Scan the whole expression and return its value.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvalError`] raised while scanning or reducing.
    pub fn evaluate(mut self, expression: &str) -> Result<f32, EvalError> {
        for c in expression.chars() {
            self.feed(c)?;
        }
        self.finish()
    }
}
