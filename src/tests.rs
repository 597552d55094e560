use proptest::prelude::*;

use crate::{CalculatorError, EvalError, ValidationError, evaluate, evaluate_all};

fn assert_evaluates_to(expression: &str, expected: f32) {
    let result = evaluate(expression);
    assert!(
        result.is_ok(),
        "'{}' should evaluate but got: {:?}",
        expression,
        result.err()
    );
    if let Ok(value) = result {
        assert_eq!(value, expected, "'{}'", expression);
    }
}

#[test]
fn test_invalid_character() {
    let result = evaluate("()*+/0123456789a");
    assert!(matches!(
        result,
        Err(CalculatorError::Validation(
            ValidationError::InvalidCharacter { character: 'a', .. }
        ))
    ));
}

#[test]
fn test_unbalanced_parentheses() {
    let result = evaluate("())*+-/0123456789");
    assert!(matches!(
        result,
        Err(CalculatorError::Validation(
            ValidationError::UnbalancedParentheses { .. }
        ))
    ));
}

#[test]
fn test_whitespace_rejected() {
    let result = evaluate("1 + 2");
    assert!(matches!(
        result,
        Err(CalculatorError::Validation(
            ValidationError::InvalidCharacter { character: ' ', position: 1 }
        ))
    ));
}

#[test]
fn test_precedence() {
    assert_evaluates_to("2+3*4", 14.0);
    assert_evaluates_to("2*3+4", 10.0);
    assert_evaluates_to("4*2+2", 10.0);
    assert_evaluates_to("2+6/3", 4.0);
}

#[test]
fn test_parenthesis_folding() {
    assert_evaluates_to("(2+3)*4", 20.0);
    assert_evaluates_to("(1+(3-2))*4", 8.0);
    assert_evaluates_to("(1+(3-2))*((4-2)*2)", 8.0);
    assert_evaluates_to("(3+3)*4-2", 22.0);
}

#[test]
fn test_nested_subtraction_fold() {
    assert_evaluates_to("10-(1+(3-2))*((4-2)*2)", 2.0);
}

#[test]
fn test_mixed_chained_reduce() {
    assert_evaluates_to("10-(1+(3-1*2))*((4-1-1)*2)", 2.0);
}

#[test]
fn test_division_by_zero() {
    let result = evaluate("(2+13)*4-44/(2-2)");
    assert_eq!(
        result,
        Err(CalculatorError::Evaluation(EvalError::DivisionByZero))
    );
}

#[test]
fn test_validation_runs_before_evaluation() {
    let result = evaluate("1/0+a");
    assert!(matches!(
        result,
        Err(CalculatorError::Validation(
            ValidationError::InvalidCharacter { character: 'a', .. }
        ))
    ));
}

#[test]
fn test_numeral_out_of_range() {
    let result = evaluate(&"9".repeat(400));
    assert!(matches!(
        result,
        Err(CalculatorError::Evaluation(EvalError::NumeralParseError(_)))
    ));

    let result = evaluate(&format!("1+{}", "9".repeat(400)));
    assert!(matches!(
        result,
        Err(CalculatorError::Evaluation(EvalError::NumeralParseError(_)))
    ));
}

#[test]
fn test_chained_division_and_subtraction() {
    assert_evaluates_to("4/2*5", 10.0);
    assert_evaluates_to("8/2/2", 2.0);
    assert_evaluates_to("4-2-2", 0.0);
    assert_evaluates_to("1-2-3", -4.0);
}

#[test]
fn test_addition_after_subtraction_folds_right() {
    // '+' does not force a reduce after '-', so 2+3 is folded first
    assert_evaluates_to("1-2+3", -4.0);
    assert_evaluates_to("2*3-1+4", 1.0);
}

#[test]
fn test_fractional_intermediates() {
    assert_evaluates_to("(1/3+2/3)", 1.0);
    assert_evaluates_to("2*3/4", 1.5);
}

#[test]
fn test_single_numeral_and_empty_input() {
    assert_evaluates_to("42", 42.0);
    assert_evaluates_to("(((7)))", 7.0);
    assert_evaluates_to("", 0.0);
}

#[test]
fn test_independent_calls() {
    let expression = "10-(1+(3-1*2))*((4-1-1)*2)";
    assert_eq!(evaluate(expression), evaluate(expression));
}

#[test]
fn test_evaluate_all_keeps_order() {
    let expressions = ["2+3*4", "1/0", "(2+3)*4", "1+a"];
    let results = evaluate_all(&expressions);

    assert_eq!(results.len(), 4);
    assert_eq!(results.first(), Some(&Ok(14.0)));
    assert_eq!(
        results.get(1),
        Some(&Err(CalculatorError::Evaluation(EvalError::DivisionByZero)))
    );
    assert_eq!(results.get(2), Some(&Ok(20.0)));
    assert!(matches!(
        results.get(3),
        Some(Err(CalculatorError::Validation(_)))
    ));
}

fn well_formed_expression() -> impl Strategy<Value = String> {
    let numeral = (0u16..1000).prop_map(|n| n.to_string());
    numeral.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
                .prop_map(|(left, op, right)| format!("{}{}{}", left, op, right)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

proptest! {
    #[test]
    fn well_formed_expressions_terminate(expression in well_formed_expression()) {
        match evaluate(&expression) {
            Ok(_) | Err(CalculatorError::Evaluation(EvalError::DivisionByZero)) => {}
            Err(other) => prop_assert!(false, "'{}' failed with {}", expression, other),
        }
    }

    #[test]
    fn evaluation_is_repeatable(expression in well_formed_expression()) {
        let first = evaluate(&expression).map(f32::to_bits);
        let second = evaluate(&expression).map(f32::to_bits);
        prop_assert_eq!(first, second);
    }
}
