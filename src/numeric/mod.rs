// ============================================================================
// Numeric Module
// Arbitrary-precision signed decimal integers
// ============================================================================
//
// This module provides:
// - BigInt: signed integer of unbounded size, one decimal digit per slot
// - BigIntError: error type for rejected textual input
// - Operator overloads for owned and borrowed operands
//
// Design principles:
// - Values are canonical: no leading zeros, zero is never negative
// - Arithmetic builds new values; operands are never mutated in place
// - Construction from text returns Result (no partially built values)
// - Comparison is the single source for every relational operator

mod big_int;
mod errors;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

pub use big_int::BigInt;
pub use errors::{BigIntError, BigIntResult};
