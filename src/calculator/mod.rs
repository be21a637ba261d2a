//! Input state machine
//!
//! [`Calculator`] owns the [`CalcState`] and turns each button press into one
//! complete transition:
//!
//! 1. the length guard refuses symbols that would grow a full buffer,
//! 2. the [`TransitionTable`] computes the next state,
//! 3. the new display is pushed to a [`RenderSink`].
//!
//! The sink is called after every press, accepted or not, so a front end can
//! treat it as the single source of what to draw.

pub mod state;
pub mod symbol;
pub mod transitions;

pub use state::{CalcState, LastResult};
pub use symbol::{ButtonClass, Symbol, SymbolKind, KEYPAD};
pub use transitions::TransitionTable;

use crate::config::CalcConfig;
use crate::interpreter::CalcError;
use tracing::{debug, warn};

/// Receives the display after every transition
pub trait RenderSink {
    /// `input` is the expression line, `result` the last result; either may be empty.
    fn render(&mut self, input: &str, result: &str);
}

/// The calculator: state, transition table and limits
pub struct Calculator {
    state: CalcState,
    table: TransitionTable,
    config: CalcConfig,
}

impl Calculator {
    /// Build a calculator in its cleared state.
    pub fn init(config: CalcConfig) -> Self {
        debug!(max_input_len = config.max_input_len, "calculator initialised");
        Calculator {
            state: CalcState::new(),
            table: TransitionTable::new(),
            config,
        }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Apply one button press and push the resulting display to `sink`.
    ///
    /// A rejected press leaves the state unchanged apart from dropping a
    /// pending `=` echo.
    pub fn press(&mut self, symbol: Symbol, sink: &mut dyn RenderSink) -> Result<(), CalcError> {
        let current = self.state.settled();

        let outcome = transitions::check_length(&current, symbol, self.config.max_input_len)
            .and_then(|()| self.table.apply(&current, symbol));

        let result = match outcome {
            Ok(next) => {
                debug!(
                    symbol = %symbol,
                    buffer = %next.buffer,
                    decimal = next.decimal,
                    "transition"
                );
                self.state = next;
                Ok(())
            }
            Err(e) => {
                warn!(symbol = %symbol, buffer = %current.buffer, error = %e, "press rejected");
                self.state = current;
                Err(e)
            }
        };

        self.render(sink);
        result
    }

    /// Parse a button label and press it.
    ///
    /// Unknown labels are rejected without touching the state.
    pub fn press_label(&mut self, label: &str, sink: &mut dyn RenderSink) -> Result<(), CalcError> {
        match label.parse::<Symbol>() {
            Ok(symbol) => self.press(symbol, sink),
            Err(e) => {
                warn!(label, "unknown button");
                self.render(sink);
                Err(e)
            }
        }
    }

    /// Push the current display to `sink` without changing anything.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        sink.render(self.state.input_text(), &self.state.result_text());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::init(CalcConfig::default())
    }
}
