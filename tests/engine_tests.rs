// Integration tests for the expression engine

use calctty::interpreter::{calculate, evaluate, evaluate_str, EvalError, Value};
use calctty::parser::{reorder, tokenize, Operator, Token};

#[test]
fn test_left_to_right_law() {
    assert_eq!(evaluate_str("2+3*4"), Ok(Value::Number(20.0)));
    assert_eq!(evaluate_str("1+2*3-4/5"), Ok(Value::Number(1.0)));
}

#[test]
fn test_division_by_zero_is_nan() {
    assert_eq!(evaluate_str("5/0"), Ok(Value::NotANumber));
    // The marker survives later operators
    assert_eq!(evaluate_str("5/0+1"), Ok(Value::NotANumber));
    assert_eq!(evaluate_str("5/0").unwrap().to_string(), "NaN");
}

#[test]
fn test_decimal_rounding_per_operation() {
    assert_eq!(
        calculate(Operator::Add, Value::Number(1.1), Value::Number(2.22)),
        Value::Number(3.32)
    );
    // 0.1 + 0.2 is rounded to one place before it is multiplied
    assert_eq!(evaluate_str("0.1+0.2*3"), Ok(Value::Number(0.9)));
    // Integer operands round each intermediate to a whole number
    assert_eq!(evaluate_str("7/2*2"), Ok(Value::Number(8.0)));
}

#[test]
fn test_every_token_consumed_once() {
    for expr in ["1", "1+2", "9-8*7/6", "1.5+2.25-3.125*4/5"] {
        let tokens = tokenize(expr);
        let numbers = tokens.iter().filter(|t| t.is_number()).count();
        let operators = tokens.len() - numbers;
        assert_eq!(operators + 1, numbers, "{}", expr);

        let postfix = reorder(tokens.clone());
        assert_eq!(postfix.len(), tokens.len(), "{}", expr);
        assert!(evaluate(&postfix).is_ok(), "{}", expr);
    }
}

#[test]
fn test_malformed_expressions_are_errors() {
    assert_eq!(
        evaluate_str("3*"),
        Err(EvalError::StackUnderflow {
            operator: Operator::Mul
        })
    );
    assert_eq!(
        evaluate_str("+3"),
        Err(EvalError::StackUnderflow {
            operator: Operator::Add
        })
    );
    assert_eq!(evaluate_str(""), Err(EvalError::Empty));
    assert_eq!(evaluate_str("2(3)"), Err(EvalError::UnknownOperator('(')));
}

#[test]
fn test_negative_leading_literal() {
    assert_eq!(evaluate_str("-3+5"), Ok(Value::Number(2.0)));
    assert_eq!(
        tokenize("-3")[0],
        Token::Number {
            value: -3.0,
            has_point: false
        }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        EvalError::StackUnderflow {
            operator: Operator::Div
        }
        .to_string(),
        "Missing operand for '/'"
    );
    assert_eq!(EvalError::Empty.to_string(), "Empty expression");
}
