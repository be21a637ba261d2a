//! # Introduction
//!
//! calctty is a keypad calculator for the terminal. It keeps a text
//! expression typed one button at a time and evaluates it on `=`, applying
//! operators strictly in the order they were typed.
//!
//! ## Pipeline
//!
//! ```text
//! Key/Click → Symbol → Calculator → (Lexer → Reorder → Evaluator) → RenderSink
//! ```
//!
//! 1. [`parser`] — tokenizes the expression buffer and reorders it to postfix.
//! 2. [`interpreter`] — evaluates postfix tokens; division by zero yields `NaN`.
//! 3. [`calculator`] — the input state machine: buffer, last result, decimal
//!    flag, and a transition table keyed by button.
//! 4. [`config`] — command-line options and limits.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use calctty::interpreter::{evaluate_str, Value};
//!
//! // No precedence: (2 + 3) * 4
//! assert_eq!(evaluate_str("2+3*4"), Ok(Value::Number(20.0)));
//! ```

pub mod calculator;
pub mod config;
pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod ui;
