//! Calculator state
//!
//! The whole machine is the tuple (expression buffer, last result, decimal
//! flag). `equation` only carries what the display shows right after `=`.

use crate::interpreter::Value;
use crate::parser::{tokenize, Token};

/// Result of the most recent evaluation or percent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LastResult {
    #[default]
    Empty,
    Value(Value),
}

impl LastResult {
    /// Display text; empty when there is no result yet
    pub fn text(&self) -> String {
        match self {
            LastResult::Empty => String::new(),
            LastResult::Value(v) => v.to_string(),
        }
    }

    /// What an operator pressed on an empty buffer starts from.
    pub fn substitution(&self) -> String {
        match self {
            LastResult::Value(Value::Number(n)) => Value::Number(*n).to_string(),
            _ => "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcState {
    /// Expression typed so far
    pub buffer: String,
    pub last_result: LastResult,
    /// True once the numeric segment being typed holds a '.'
    pub decimal: bool,
    /// Evaluated text plus '=', shown until the next key
    pub equation: Option<String>,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the input line of the display
    pub fn input_text(&self) -> &str {
        self.equation.as_deref().unwrap_or(&self.buffer)
    }

    pub fn result_text(&self) -> String {
        self.last_result.text()
    }

    pub fn input_len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Copy of this state with the `=` echo dropped
    pub fn settled(&self) -> Self {
        Self {
            equation: None,
            ..self.clone()
        }
    }
}

/// Whether the last numeric literal in `buffer` contains a decimal point.
pub fn last_segment_has_point(buffer: &str) -> bool {
    matches!(
        tokenize(buffer).last(),
        Some(Token::Number {
            has_point: true,
            ..
        })
    )
}
