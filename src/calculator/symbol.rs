//! Button symbols
//!
//! Every key press and every click on the keypad arrives as a [`Symbol`].
//! Symbols are parsed from the button labels shown on the keypad
//! (`0-9 . + - * / % C ← =`); anything else is rejected.

use crate::interpreter::CalcError;
use crate::parser::Operator;
use std::fmt;
use std::str::FromStr;

/// A single calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Digit 0–9
    Digit(u8),
    Point,
    Operator(Operator),
    Percent,
    Clear,
    Backspace,
    Equals,
}

/// Symbol without its payload; the key of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Digit,
    Point,
    Operator,
    Percent,
    Clear,
    Backspace,
    Equals,
}

/// Visual class of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Clear,
    Equals,
    Operator,
    Plain,
}

/// Keypad buttons in display order, four per row (`C` is double width).
pub const KEYPAD: [Symbol; 19] = [
    Symbol::Clear,
    Symbol::Percent,
    Symbol::Operator(Operator::Div),
    Symbol::Digit(7),
    Symbol::Digit(8),
    Symbol::Digit(9),
    Symbol::Operator(Operator::Mul),
    Symbol::Digit(4),
    Symbol::Digit(5),
    Symbol::Digit(6),
    Symbol::Operator(Operator::Sub),
    Symbol::Digit(1),
    Symbol::Digit(2),
    Symbol::Digit(3),
    Symbol::Operator(Operator::Add),
    Symbol::Digit(0),
    Symbol::Point,
    Symbol::Backspace,
    Symbol::Equals,
];

impl Symbol {
    pub fn kind(self) -> SymbolKind {
        match self {
            Symbol::Digit(_) => SymbolKind::Digit,
            Symbol::Point => SymbolKind::Point,
            Symbol::Operator(_) => SymbolKind::Operator,
            Symbol::Percent => SymbolKind::Percent,
            Symbol::Clear => SymbolKind::Clear,
            Symbol::Backspace => SymbolKind::Backspace,
            Symbol::Equals => SymbolKind::Equals,
        }
    }

    /// The character printed on the button
    pub fn label(self) -> char {
        match self {
            Symbol::Digit(d) => char::from(b'0' + d.min(9)),
            Symbol::Point => '.',
            Symbol::Operator(op) => op.symbol(),
            Symbol::Percent => '%',
            Symbol::Clear => 'C',
            Symbol::Backspace => '←',
            Symbol::Equals => '=',
        }
    }

    /// Parse a single button label.
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(d) = ch.to_digit(10) {
            return Some(Symbol::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Some(Symbol::Operator(op));
        }
        match ch {
            '.' => Some(Symbol::Point),
            '%' => Some(Symbol::Percent),
            'C' => Some(Symbol::Clear),
            '←' => Some(Symbol::Backspace),
            '=' => Some(Symbol::Equals),
            _ => None,
        }
    }

    /// Clear, Percent, Equals and Backspace are accepted even when the
    /// buffer is full, since none of them grow it.
    pub fn bypasses_length_guard(self) -> bool {
        matches!(
            self,
            Symbol::Clear | Symbol::Percent | Symbol::Equals | Symbol::Backspace
        )
    }

    pub fn class(self) -> ButtonClass {
        match self {
            Symbol::Clear => ButtonClass::Clear,
            Symbol::Equals => ButtonClass::Equals,
            Symbol::Operator(_) | Symbol::Percent => ButtonClass::Operator,
            _ => ButtonClass::Plain,
        }
    }
}

impl FromStr for Symbol {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Symbol::from_char(ch).ok_or_else(|| CalcError::UnknownSymbol(s.to_string()))
            }
            _ => Err(CalcError::UnknownSymbol(s.to_string())),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
