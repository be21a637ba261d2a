//! Infix → postfix reordering
//!
//! This is a shunting-yard pass with one deliberate change: when a new
//! operator arrives, the *whole* operator stack is flushed to the output,
//! not just the operators of higher or equal precedence. Operators are thus
//! applied strictly left to right, so `2+3*4` is `(2+3)*4`.

use super::lexer::Token;

/// Reorder infix tokens into postfix order with left-to-right evaluation.
///
/// Every non-number token is treated as an operator slot; the evaluator
/// decides whether it is a real operator.
pub fn reorder(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        if token.is_number() {
            output.push(token);
        } else {
            while let Some(op) = operators.pop() {
                output.push(op);
            }
            operators.push(token);
        }
    }

    while let Some(op) = operators.pop() {
        output.push(op);
    }

    output
}
