//! Keyboard → button mapping
//!
//! Digits and `+ - * / . %` press the button with the same label. Enter is
//! `=`, Backspace is `←` and Space is `C`.

use crate::calculator::Symbol;
use crossterm::event::KeyCode;

/// A key that presses a calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub symbol: Symbol,
    /// The key is consumed even when combined with modifiers, so it never
    /// reaches the application's own shortcuts.
    pub suppress_default: bool,
}

pub fn binding_for(code: KeyCode) -> Option<KeyBinding> {
    let (symbol, suppress_default) = match code {
        KeyCode::Enter => (Symbol::Equals, true),
        KeyCode::Backspace => (Symbol::Backspace, true),
        KeyCode::Char(' ') => (Symbol::Clear, true),
        KeyCode::Char(c @ ('+' | '-')) => (Symbol::from_char(c)?, true),
        KeyCode::Char(c @ ('0'..='9' | '*' | '/' | '.' | '%')) => (Symbol::from_char(c)?, false),
        _ => return None,
    };
    Some(KeyBinding {
        symbol,
        suppress_default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Operator;

    fn symbol(code: KeyCode) -> Option<Symbol> {
        binding_for(code).map(|b| b.symbol)
    }

    #[test]
    fn test_digits_and_operators() {
        assert_eq!(symbol(KeyCode::Char('7')), Some(Symbol::Digit(7)));
        assert_eq!(
            symbol(KeyCode::Char('/')),
            Some(Symbol::Operator(Operator::Div))
        );
        assert_eq!(symbol(KeyCode::Char('.')), Some(Symbol::Point));
        assert_eq!(symbol(KeyCode::Char('%')), Some(Symbol::Percent));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(symbol(KeyCode::Enter), Some(Symbol::Equals));
        assert_eq!(symbol(KeyCode::Backspace), Some(Symbol::Backspace));
        assert_eq!(symbol(KeyCode::Char(' ')), Some(Symbol::Clear));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(binding_for(KeyCode::Char('q')), None);
        assert_eq!(binding_for(KeyCode::Char('=')), None);
        assert_eq!(binding_for(KeyCode::Tab), None);
    }

    #[test]
    fn test_suppress_default() {
        for code in [
            KeyCode::Enter,
            KeyCode::Backspace,
            KeyCode::Char(' '),
            KeyCode::Char('+'),
            KeyCode::Char('-'),
        ] {
            assert!(binding_for(code).unwrap().suppress_default, "{:?}", code);
        }
        assert!(!binding_for(KeyCode::Char('5')).unwrap().suppress_default);
        assert!(!binding_for(KeyCode::Char('*')).unwrap().suppress_default);
    }
}
