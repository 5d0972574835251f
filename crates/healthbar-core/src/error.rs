/// Error types for the HealthBar core.
///
/// Only the parsing entry points (number patterns, colour strings, numeric
/// lists, JSON attribute bags) return these. The widget setters absorb every
/// failure locally and log it, so nothing here ever reaches the host
/// framework through a draw or measure callback.
use thiserror::Error;

/// A number-format pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("number pattern is empty")]
    Empty,
    #[error("number pattern `{0}` contains no digit placeholder")]
    NoDigits(String),
    #[error("number pattern `{pattern}` has more than one decimal separator")]
    MultipleDecimalSeparators { pattern: String },
    #[error("number pattern `{pattern}` has `0` after `#` in the fraction part")]
    MisplacedFractionZero { pattern: String },
    #[error("number pattern `{pattern}` has a grouping separator in the fraction part")]
    GroupingInFraction { pattern: String },
    #[error("number pattern `{pattern}` has an unterminated quote")]
    UnterminatedQuote { pattern: String },
    #[error("number pattern `{pattern}` has more than one percent or per-mille sign")]
    MultipleMultipliers { pattern: String },
    #[error("number pattern `{pattern}` has an unquoted `0`, `#`, `,` or `.` in its suffix")]
    PlaceholderInSuffix { pattern: String },
}

/// Any error surfaced by the core's parsing APIs.
#[derive(Debug, Error)]
pub enum HealthBarError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid colour literal `{0}`")]
    InvalidColor(String),

    #[error("invalid number `{value}` at position {index} of range list")]
    InvalidRangeValue { index: usize, value: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
