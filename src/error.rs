use thiserror::Error;

/// Precondition violations raised when a chart is built from malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("donut chart expects {expected} slices, got {actual}")]
    SliceCount { expected: usize, actual: usize },

    #[error("{what} has {actual} entries but the x axis has {expected} labels")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("value {value} at index {index} is not a finite, non-negative number")]
    InvalidValue { index: usize, value: f64 },

    #[error("category {0:?} is not part of the x axis")]
    UnknownCategory(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("tick values must be finite and span a non-empty range")]
    InvalidTicks,
}

pub type Result<T> = std::result::Result<T, ChartError>;
