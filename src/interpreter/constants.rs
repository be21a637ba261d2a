// Constants for the calculator core

/// Default maximum length of the expression buffer.
/// Keys that grow the buffer are refused once it is this long.
pub const DEFAULT_MAX_INPUT_LEN: usize = 20;

/// Text shown for a not-a-number result
pub const NAN_TEXT: &str = "NaN";

/// Percent divides the leading number of the buffer by this
pub const PERCENT_DIVISOR: f64 = 100.0;
