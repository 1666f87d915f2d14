// ============================================================================
// Token Reader
// Whitespace-delimited token input for BigInt values
// ============================================================================

use super::errors::{ReadError, ReadResult};
use crate::numeric::BigInt;
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads whitespace-delimited tokens from a buffered source, one line at a time.
///
/// # Example
/// ```
/// use decimal_bigint::input::TokenReader;
/// use decimal_bigint::numeric::BigInt;
///
/// let mut reader = TokenReader::new("oops\n-42\n".as_bytes());
/// let mut value = BigInt::from(7);
///
/// assert!(reader.read_big_int(&mut value).is_err());
/// assert!(value.is_zero());
///
/// reader.discard_line();
/// reader.read_big_int(&mut value).unwrap();
/// assert_eq!(value.to_string(), "-42");
/// ```
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> ReadResult<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Read one token into `dest`.
    ///
    /// On any failure `dest` is reset to zero and the error says why; an
    /// `InvalidToken` failure leaves the reader ready for another attempt.
    pub fn read_big_int(&mut self, dest: &mut BigInt) -> ReadResult<()> {
        let token = match self.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                dest.set_zero();
                return Err(ReadError::Eof);
            },
            Err(err) => {
                dest.set_zero();
                return Err(err);
            },
        };

        if !BigInt::is_valid(&token) {
            tracing::warn!(token = %token, "invalid integer token, destination reset to zero");
            dest.set_zero();
            return Err(ReadError::InvalidToken(token));
        }

        *dest = BigInt::from_validated(&token);
        Ok(())
    }

    /// Read one token as a new value.
    pub fn read_value(&mut self) -> ReadResult<BigInt> {
        let mut value = BigInt::zero();
        self.read_big_int(&mut value)?;
        Ok(value)
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
