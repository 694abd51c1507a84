// File: crates/tvchart-core/src/error.rs
// Summary: Error taxonomy shared by the normalizer, figure model, registry and plot operations.

use thiserror::Error;

/// Every failure is a synchronous validation error; none of them poisons the
/// registry or figures that already exist.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("unsupported input shape: {0}")]
    UnsupportedShape(String),

    #[error("unsupported element type `{found}` (expected int, float or str)")]
    UnsupportedType { found: &'static str },

    #[error("figure already has an ohlc series")]
    DuplicatePrimarySeries,

    #[error("figure has no ohlc series; plot a candlestick first")]
    MissingPrimarySeries,

    #[error("length mismatch: ohlc series has {expected} rows but input has {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("expected {expected}-dimensional input but got {found} dimension(s)")]
    InvalidDimensionality { expected: usize, found: usize },

    #[error("expected at least {expected} columns (time, open, high, low, close) but got {found}")]
    InsufficientColumns { expected: usize, found: usize },

    #[error("invalid {field} `{value}`")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("cannot parse `{input}` with date format `{format}`")]
    DateParse { input: String, format: String },

    #[error("{field} must be numeric")]
    NonNumeric { field: &'static str },

    #[error("NaN value at position {index}")]
    NanValue { index: usize },

    #[error("unknown figure `{0}`")]
    UnknownFigure(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
