//! Errors raised while parsing color strings.

use thiserror::Error;

/// A hex color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Nothing left after stripping the optional `#`.
    #[error("empty color string")]
    Empty,

    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit in {input:?}")]
    InvalidDigit { input: String },

    /// The string has a digit count other than 3 or 6.
    #[error("hex color {input:?} has {len} digits, expected 3 or 6")]
    InvalidLength { input: String, len: usize },
}
