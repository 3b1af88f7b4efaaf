use thiserror::Error;

/// Top-level error type for the girum geometry kernel.
#[derive(Debug, Error)]
pub enum GirumError {
    /// A setter or algebra routine received an out-of-domain scalar.
    #[error("value {value} for {parameter} is invalid: {reason}")]
    InvalidValue {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A required field was read before being assigned.
    #[error("{0} is not set")]
    NotSet(&'static str),

    /// A structural invariant check failed on otherwise well-formed fields.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A positional component index was outside the valid range.
    #[error("component index {0} is out of range (expected 0..=3)")]
    IndexOutOfRange(usize),

    /// A degenerate input (zero-length vector, parallel axes) was rejected.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    /// A zero-length vector was supplied where a direction is required.
    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GirumError`].
pub type Result<T> = std::result::Result<T, GirumError>;
