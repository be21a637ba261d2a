//! Calculator evaluation engine
//!
//! This module provides the arithmetic core:
//! - [`evaluator`]: Postfix evaluation and per-operator rounding
//! - [`value`]: Numbers and the not-a-number marker
//! - [`errors`]: Evaluation and input error types
//! - [`constants`]: Shared limits and display text
//!
//! # Evaluation Model
//!
//! Text is tokenized and reordered by [`crate::parser`], then evaluated here
//! with a value stack. Division by zero is not an error; it produces
//! [`value::Value::NotANumber`], which propagates through later operators.

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod value;

pub use errors::{CalcError, EvalError};
pub use evaluator::{calculate, evaluate, evaluate_str};
pub use value::Value;
