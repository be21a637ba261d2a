//! Transition table
//!
//! One pure function per [`SymbolKind`], each mapping the current state and
//! the pressed symbol to the next state. The table is built once in
//! [`TransitionTable::new`] and looked up on every press.

use super::state::{last_segment_has_point, CalcState, LastResult};
use super::symbol::{Symbol, SymbolKind};
use crate::interpreter::constants::PERCENT_DIVISOR;
use crate::interpreter::evaluator::{evaluate_str, leading_number};
use crate::interpreter::{CalcError, Value};
use crate::parser::Operator;
use rustc_hash::FxHashMap;

pub type Transition = fn(&CalcState, Symbol) -> Result<CalcState, CalcError>;

pub struct TransitionTable {
    entries: FxHashMap<SymbolKind, Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        let mut entries: FxHashMap<SymbolKind, Transition> = FxHashMap::default();
        entries.insert(SymbolKind::Digit, digit);
        entries.insert(SymbolKind::Point, point);
        entries.insert(SymbolKind::Operator, operator);
        entries.insert(SymbolKind::Percent, percent);
        entries.insert(SymbolKind::Clear, clear);
        entries.insert(SymbolKind::Backspace, backspace);
        entries.insert(SymbolKind::Equals, equals);
        TransitionTable { entries }
    }

    /// Run the transition registered for `symbol`.
    pub fn apply(&self, state: &CalcState, symbol: Symbol) -> Result<CalcState, CalcError> {
        let transition = self
            .entries
            .get(&symbol.kind())
            .ok_or_else(|| CalcError::UnknownSymbol(symbol.to_string()))?;
        transition(state, symbol)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Refuse buffer-growing symbols once the buffer holds `max_len` characters.
pub fn check_length(state: &CalcState, symbol: Symbol, max_len: usize) -> Result<(), CalcError> {
    if !symbol.bypasses_length_guard() && state.input_len() >= max_len {
        return Err(CalcError::InputLimit { max: max_len });
    }
    Ok(())
}

fn ends_with_operator(buffer: &str) -> bool {
    buffer.ends_with(Operator::is_operator_char)
}

pub fn digit(state: &CalcState, symbol: Symbol) -> Result<CalcState, CalcError> {
    let mut next = state.clone();
    next.buffer.push(symbol.label());
    Ok(next)
}

pub fn point(state: &CalcState, _symbol: Symbol) -> Result<CalcState, CalcError> {
    let mut next = state.clone();
    if next.decimal {
        return Ok(next);
    }
    if next.buffer.is_empty() || ends_with_operator(&next.buffer) {
        next.buffer.push('0');
    }
    next.buffer.push('.');
    next.decimal = true;
    Ok(next)
}

pub fn operator(state: &CalcState, symbol: Symbol) -> Result<CalcState, CalcError> {
    let Symbol::Operator(op) = symbol else {
        return Err(CalcError::UnknownSymbol(symbol.to_string()));
    };

    let mut next = state.clone();
    // A second operator in a row replaces the first
    if ends_with_operator(&next.buffer) {
        next.buffer.pop();
    }

    if next.buffer.is_empty() {
        next.buffer.push_str(&state.last_result.substitution());
    } else if next.buffer.ends_with('.') {
        next.buffer.push('0');
    }

    next.buffer.push(op.symbol());
    next.decimal = false;
    Ok(next)
}

pub fn percent(state: &CalcState, _symbol: Symbol) -> Result<CalcState, CalcError> {
    let mut next = state.clone();
    let value = match leading_number(&state.buffer) {
        Value::Number(n) => Value::from_f64(n / PERCENT_DIVISOR),
        Value::NotANumber => Value::NotANumber,
    };
    next.last_result = LastResult::Value(value);
    Ok(next)
}

pub fn clear(_state: &CalcState, _symbol: Symbol) -> Result<CalcState, CalcError> {
    Ok(CalcState::new())
}

pub fn backspace(state: &CalcState, _symbol: Symbol) -> Result<CalcState, CalcError> {
    let mut next = state.clone();
    let Some(removed) = next.buffer.pop() else {
        return Ok(next);
    };

    if removed == '.' {
        next.decimal = false;
    } else if Operator::is_operator_char(removed) {
        next.decimal = last_segment_has_point(&next.buffer);
    }
    Ok(next)
}

pub fn equals(state: &CalcState, _symbol: Symbol) -> Result<CalcState, CalcError> {
    let mut next = state.clone();

    if state.buffer.is_empty() {
        next.equation = Some(format!("{}=", state.last_result.text()));
    } else {
        let value = evaluate_str(&state.buffer)?;
        next.last_result = LastResult::Value(value);
        next.equation = Some(format!("{}=", state.buffer));
    }

    next.buffer.clear();
    next.decimal = false;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::EvalError;

    fn state(buffer: &str, decimal: bool) -> CalcState {
        CalcState {
            buffer: buffer.to_string(),
            decimal,
            ..CalcState::new()
        }
    }

    fn with_result(buffer: &str, result: Value) -> CalcState {
        CalcState {
            buffer: buffer.to_string(),
            last_result: LastResult::Value(result),
            ..CalcState::new()
        }
    }

    const ADD: Symbol = Symbol::Operator(Operator::Add);

    #[test]
    fn test_digit_appends() {
        let next = digit(&state("12", false), Symbol::Digit(3)).unwrap();
        assert_eq!(next.buffer, "123");
    }

    #[test]
    fn test_point_inserts_leading_zero() {
        let next = point(&state("", false), Symbol::Point).unwrap();
        assert_eq!(next.buffer, "0.");
        assert!(next.decimal);

        let next = point(&state("3+", false), Symbol::Point).unwrap();
        assert_eq!(next.buffer, "3+0.");
    }

    #[test]
    fn test_point_ignored_when_flag_set() {
        let next = point(&state("3.5", true), Symbol::Point).unwrap();
        assert_eq!(next.buffer, "3.5");
        assert!(next.decimal);
    }

    #[test]
    fn test_operator_appends_and_resets_flag() {
        let next = operator(&state("3.5", true), ADD).unwrap();
        assert_eq!(next.buffer, "3.5+");
        assert!(!next.decimal);
    }

    #[test]
    fn test_operator_completes_trailing_point() {
        let next = operator(&state("3.", true), ADD).unwrap();
        assert_eq!(next.buffer, "3.0+");
    }

    #[test]
    fn test_operator_substitutes_last_result() {
        let next = operator(&with_result("", Value::Number(7.0)), ADD).unwrap();
        assert_eq!(next.buffer, "7+");

        let next = operator(&with_result("", Value::NotANumber), ADD).unwrap();
        assert_eq!(next.buffer, "0+");

        let next = operator(&state("", false), ADD).unwrap();
        assert_eq!(next.buffer, "0+");
    }

    #[test]
    fn test_operator_replaces_trailing_operator() {
        let next = operator(&state("3+", false), Symbol::Operator(Operator::Mul)).unwrap();
        assert_eq!(next.buffer, "3*");
    }

    #[test]
    fn test_percent_keeps_buffer() {
        let next = percent(&state("50", false), Symbol::Percent).unwrap();
        assert_eq!(next.buffer, "50");
        assert_eq!(next.last_result, LastResult::Value(Value::Number(0.5)));
    }

    #[test]
    fn test_percent_of_empty_buffer_is_nan() {
        let next = percent(&state("", false), Symbol::Percent).unwrap();
        assert_eq!(next.last_result, LastResult::Value(Value::NotANumber));
    }

    #[test]
    fn test_clear_resets_everything() {
        let next = clear(&with_result("3.5+", Value::Number(2.0)), Symbol::Clear).unwrap();
        assert_eq!(next, CalcState::new());
    }

    #[test]
    fn test_backspace_point_clears_flag() {
        let next = backspace(&state("3.", true), Symbol::Backspace).unwrap();
        assert_eq!(next.buffer, "3");
        assert!(!next.decimal);
    }

    #[test]
    fn test_backspace_operator_recomputes_flag() {
        let next = backspace(&state("3.5+", false), Symbol::Backspace).unwrap();
        assert_eq!(next.buffer, "3.5");
        assert!(next.decimal);

        let next = backspace(&state("35+", false), Symbol::Backspace).unwrap();
        assert!(!next.decimal);
    }

    #[test]
    fn test_backspace_digit_keeps_flag() {
        let next = backspace(&state("3.5", true), Symbol::Backspace).unwrap();
        assert_eq!(next.buffer, "3.");
        assert!(next.decimal);
    }

    #[test]
    fn test_backspace_empty_is_noop() {
        let next = backspace(&state("", false), Symbol::Backspace).unwrap();
        assert_eq!(next, CalcState::new());
    }

    #[test]
    fn test_equals_evaluates_and_clears() {
        let next = equals(&state("2+3*4", false), Symbol::Equals).unwrap();
        assert_eq!(next.buffer, "");
        assert_eq!(next.last_result, LastResult::Value(Value::Number(20.0)));
        assert_eq!(next.input_text(), "2+3*4=");
    }

    #[test]
    fn test_equals_empty_buffer_reuses_result() {
        let next = equals(&with_result("", Value::Number(7.0)), Symbol::Equals).unwrap();
        assert_eq!(next.last_result, LastResult::Value(Value::Number(7.0)));
        assert_eq!(next.input_text(), "7=");
        assert_eq!(next.buffer, "");
    }

    #[test]
    fn test_equals_malformed_keeps_buffer() {
        let err = equals(&state("3+", false), Symbol::Equals).unwrap_err();
        assert_eq!(
            err,
            CalcError::Evaluation(EvalError::StackUnderflow {
                operator: Operator::Add
            })
        );
    }

    #[test]
    fn test_length_guard() {
        let full = state(&"1".repeat(20), false);
        assert_eq!(
            check_length(&full, Symbol::Digit(1), 20),
            Err(CalcError::InputLimit { max: 20 })
        );
        assert!(check_length(&full, Symbol::Clear, 20).is_ok());
        assert!(check_length(&full, Symbol::Backspace, 20).is_ok());
        assert!(check_length(&state("1", false), Symbol::Digit(1), 20).is_ok());
    }

    #[test]
    fn test_table_dispatches_by_kind() {
        let table = TransitionTable::new();
        let next = table.apply(&state("9", false), Symbol::Digit(1)).unwrap();
        assert_eq!(next.buffer, "91");
        let next = table.apply(&next, Symbol::Clear).unwrap();
        assert_eq!(next.buffer, "");
    }
}
