//! Error types for evaluation and input handling
//!
//! [`EvalError`] covers malformed expressions found while evaluating postfix
//! tokens. [`CalcError`] is what a rejected key press reports back to the
//! front end. Division by zero is *not* an error; it yields
//! [`Value::NotANumber`](super::value::Value::NotANumber).

use crate::parser::Operator;
use thiserror::Error;

/// Errors that can occur while evaluating a postfix expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    Empty,

    /// An operator found fewer than two operands on the stack
    #[error("Missing operand for '{operator}'")]
    StackUnderflow { operator: Operator },

    /// A non-operator character reached an operator position
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),

    /// More than one value was left once every operator was applied
    #[error("Malformed expression: {count} values left unused")]
    LeftoverOperands { count: usize },
}

/// Reasons a key press was rejected by the calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Input limit reached!")]
    InputLimit { max: usize },

    #[error("Unknown button '{0}'")]
    UnknownSymbol(String),

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
