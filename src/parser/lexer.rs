//! Lexer (tokenizer) for calculator expressions
//!
//! Converts the expression buffer into a flat [`Token`] stream. Lexing never
//! fails: characters that are neither numbers nor operators are passed
//! through as [`Token::Other`] and rejected later by the evaluator.

use std::fmt;

/// The four binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    /// Map an operator character to its variant.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// True if `ch` is one of `+ - * /`.
    pub fn is_operator_char(ch: char) -> bool {
        Self::from_char(ch).is_some()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal. `has_point` records whether the literal text
    /// contained a decimal point (`3.` and `3.0` both do, `3` does not).
    Number { value: f64, has_point: bool },
    Operator(Operator),
    /// Any other non-whitespace character, e.g. a parenthesis.
    Other(char),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { value, .. } => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Other(ch) => write!(f, "{}", ch),
        }
    }
}

/// Lexer for a single expression string
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given expression.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.advance() {
            match ch {
                c if c.is_whitespace() => {}
                // A leading minus directly in front of a literal is its sign
                '-' if self.position == 1 && self.peek().is_some_and(starts_number) => {
                    tokens.push(self.number_literal(None, true));
                }
                c if starts_number(c) => tokens.push(self.number_literal(Some(c), false)),
                c => match Operator::from_char(c) {
                    Some(op) => tokens.push(Token::Operator(op)),
                    None => tokens.push(Token::Other(c)),
                },
            }
        }

        tokens
    }

    /// Parse a numeric literal: digits with at most one decimal point.
    ///
    /// `first` is the already-consumed first character, if any.
    fn number_literal(&mut self, first: Option<char>, negative: bool) -> Token {
        let mut num_str = String::new();
        if negative {
            num_str.push('-');
        }

        let mut has_point = false;
        let mut take = |ch: char, num_str: &mut String| -> bool {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                true
            } else if ch == '.' && !has_point {
                has_point = true;
                num_str.push(ch);
                true
            } else {
                false
            }
        };

        if let Some(ch) = first {
            take(ch, &mut num_str);
        }
        while let Some(ch) = self.peek() {
            if !take(ch, &mut num_str) {
                break;
            }
            self.advance();
        }

        // A lone "." reads as zero rather than a parse failure
        let digits_only = num_str.trim_start_matches('-');
        let value = if digits_only == "." {
            0.0
        } else {
            num_str.parse::<f64>().unwrap_or(0.0)
        };

        Token::Number { value, has_point }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

fn starts_number(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Tokenize `input` in one call.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
