//! Calculator values
//!
//! A [`Value`] is either a finite number or the explicit not-a-number marker
//! produced by division by zero. The marker is sticky: any arithmetic with it
//! yields the marker again.

use super::constants::NAN_TEXT;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    NotANumber,
}

impl Value {
    /// Wrap an `f64`, mapping non-finite values to the marker and `-0` to `0`.
    pub fn from_f64(n: f64) -> Self {
        if !n.is_finite() {
            Value::NotANumber
        } else if n == 0.0 {
            Value::Number(0.0)
        } else {
            Value::Number(n)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::NotANumber => None,
        }
    }

    /// Number of fractional digits in the shortest decimal rendering.
    ///
    /// The marker counts as having none.
    pub fn decimal_places(&self) -> usize {
        match self {
            Value::Number(n) => {
                let text = n.to_string();
                text.split_once('.').map_or(0, |(_, frac)| frac.len())
            }
            Value::NotANumber => 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::NotANumber => write!(f, "{}", NAN_TEXT),
        }
    }
}
