// ============================================================================
// Decimal BigInt Library
// Arbitrary-precision signed integers stored one decimal digit per slot
// ============================================================================

//! # Decimal BigInt
//!
//! Signed integers of unbounded size, built on a hand-managed growable
//! digit buffer.
//!
//! ## Features
//!
//! - **Canonical values**: no leading zeros, zero is never negative
//! - **Sign-aware addition and subtraction** with carry/borrow propagation
//! - **Total ordering** driven by one three-way comparison
//! - **Validated parsing** that never yields a partially built value
//! - **Token-stream input** with recoverable, zero-resetting failures
//! - **Deterministic growth**: capacity starts at 8 and doubles
//!
//! ## Example
//!
//! ```rust
//! use decimal_bigint::prelude::*;
//!
//! let big: BigInt = "100000000000000000000000000000000000000000000000000".parse()?;
//! let almost: BigInt = "99999999999999999999999999999999999999999999999999".parse()?;
//!
//! let mut result = big - almost;
//! assert_eq!(result.to_string(), "1");
//!
//! assert_eq!(result.post_increment().to_string(), "1");
//! assert_eq!(result.increment().to_string(), "3");
//!
//! assert!(BigInt::from(-150) < BigInt::from(100));
//! assert!(BigInt::from_string("abc").is_err());
//! # Ok::<(), BigIntError>(())
//! ```

pub mod input;
pub mod numeric;
pub mod storage;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::input::{ReadError, ReadResult, TokenReader};
    pub use crate::numeric::{BigInt, BigIntError, BigIntResult};
    pub use crate::storage::DigitStore;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_read_and_sum() {
        let mut reader = TokenReader::new("-100 150 junk 100 -150\n".as_bytes());
        let mut total = BigInt::zero();
        let mut rejected = Vec::new();

        loop {
            let mut value = BigInt::from(1);
            match reader.read_big_int(&mut value) {
                Ok(()) => total += &value,
                Err(ReadError::InvalidToken(token)) => {
                    assert!(value.is_zero());
                    rejected.push(token);
                },
                Err(ReadError::Eof) => break,
                Err(err) => panic!("unexpected read error: {}", err),
            }
        }

        assert_eq!(rejected, vec!["junk".to_string()]);
        assert!(total.is_zero());
        assert!(!total.is_negative());
    }
}
