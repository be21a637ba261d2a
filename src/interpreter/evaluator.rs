//! Postfix evaluation
//!
//! Walks the reordered token stream with a value stack. Each operator pops
//! its right operand first, then its left operand, and pushes the result of
//! [`calculate`]. Every application rounds its own result, so rounding is
//! applied once per operator rather than once at the end.

use super::errors::EvalError;
use super::value::Value;
use crate::parser::{reorder, tokenize, Operator, Token};
use tracing::trace;

/// Evaluate a postfix token sequence.
pub fn evaluate(postfix: &[Token]) -> Result<Value, EvalError> {
    let mut stack: Vec<Value> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number { value, .. } => stack.push(Value::from_f64(*value)),
            Token::Operator(op) => {
                let (op2, op1) = match (stack.pop(), stack.pop()) {
                    (Some(op2), Some(op1)) => (op2, op1),
                    _ => return Err(EvalError::StackUnderflow { operator: *op }),
                };
                let result = calculate(*op, op1, op2);
                trace!(%op1, %op, %op2, %result, "applied operator");
                stack.push(result);
            }
            Token::Other(ch) => return Err(EvalError::UnknownOperator(*ch)),
        }
    }

    match stack.len() {
        0 => Err(EvalError::Empty),
        1 => Ok(stack[0]),
        count => Err(EvalError::LeftoverOperands { count }),
    }
}

/// Evaluate an infix expression string: tokenize, reorder, evaluate.
pub fn evaluate_str(input: &str) -> Result<Value, EvalError> {
    evaluate(&reorder(tokenize(input)))
}

/// Apply one binary operator.
///
/// Division by zero and any not-a-number operand give
/// [`Value::NotANumber`]. The result is rounded to the larger number of
/// decimal places found in the two operands.
pub fn calculate(op: Operator, a: Value, b: Value) -> Value {
    let (x, y) = match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Value::NotANumber,
    };

    let raw = match op {
        Operator::Add => x + y,
        Operator::Sub => x - y,
        Operator::Mul => x * y,
        Operator::Div if y == 0.0 => return Value::NotANumber,
        Operator::Div => x / y,
    };

    let places = a.decimal_places().max(b.decimal_places());
    Value::from_f64(round_to(raw, places))
}

/// Round to `places` fractional digits, ties away from zero.
fn round_to(n: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    scaled.round() / factor
}

/// Leading numeric prefix of `input`, or the marker if there is none.
///
/// `"12.5+3"` reads as `12.5`; `""` and `"+3"` read as not-a-number.
pub fn leading_number(input: &str) -> Value {
    match tokenize(input).first() {
        Some(Token::Number { value, .. }) => Value::from_f64(*value),
        _ => Value::NotANumber,
    }
}
