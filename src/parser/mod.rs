//! Expression front end
//!
//! This module turns the calculator's text buffer into postfix tokens:
//! - [`lexer`]: Tokenization (buffer text → tokens)
//! - [`reorder`]: Infix → postfix ordering, strictly left to right
//!
//! # Evaluation Order
//!
//! There is no operator precedence. `2+3*4` is read as `(2+3)*4 = 20`;
//! see [`reorder`] for how the ordering is produced.

pub mod lexer;
pub mod reorder;

pub use lexer::{tokenize, Operator, Token};
pub use reorder::reorder;
