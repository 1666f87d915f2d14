// ============================================================================
// Input Errors
// Recoverable failures while reading values from a token stream
// ============================================================================

use std::fmt;
use std::io;

/// Reasons a [`TokenReader`](super::TokenReader) read produced no value.
///
/// In every case the destination has been reset to zero, so the caller can
/// keep using it and retry.
#[derive(Debug)]
pub enum ReadError {
    /// Underlying reader failed
    Io(io::Error),
    /// No more tokens
    Eof,
    /// Token was not a valid integer
    InvalidToken(String),
}

impl ReadError {
    /// Whether another read may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReadError::InvalidToken(_))
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "read failed: {}", err),
            ReadError::Eof => write!(f, "end of input"),
            ReadError::InvalidToken(token) => write!(f, "invalid integer token: {:?}", token),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

/// Result type alias for token reads
pub type ReadResult<T> = Result<T, ReadError>;
