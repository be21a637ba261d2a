//! Command-line options and runtime configuration

use crate::interpreter::constants::DEFAULT_MAX_INPUT_LEN;
use clap::Parser;
use std::path::PathBuf;

/// A left-to-right calculator for the terminal.
///
/// Without options, opens the interactive keypad. Operators are applied in
/// the order they are typed: 2+3*4 is 20.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Evaluate an expression, print the result and exit.
    #[arg(short, long, value_name = "EXPR", conflicts_with = "keys")]
    pub eval: Option<String>,

    /// Replay button labels (e.g. "12+3=") through the keypad logic and
    /// print the final display.
    #[arg(short, long, value_name = "LABELS")]
    pub keys: Option<String>,

    /// Maximum length of the expression buffer.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    pub max_input: usize,

    /// Write logs to this file (interactive mode logs nowhere otherwise).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> CalcConfig {
        CalcConfig {
            max_input_len: self.max_input,
        }
    }
}

/// Limits applied by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    pub max_input_len: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}
