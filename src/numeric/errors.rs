// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision integer construction
// ============================================================================

use std::fmt;

/// Errors that can occur while building a [`BigInt`](super::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BigIntError {
    /// Input contained something other than an optional leading `-`
    /// followed by ASCII digits. Holds the rejected input.
    InvalidFormat(String),
}

impl BigIntError {
    /// The input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            BigIntError::InvalidFormat(input) => input,
        }
    }
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::InvalidFormat(input) => {
                write!(f, "invalid format: value must be numeric: {:?}", input)
            },
        }
    }
}

impl std::error::Error for BigIntError {}

/// Result type alias for integer construction
pub type BigIntResult<T> = Result<T, BigIntError>;
