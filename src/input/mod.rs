// ============================================================================
// Input Module
// Reading BigInt values from text streams
// ============================================================================
//
// This module provides:
// - TokenReader: whitespace-delimited token reader over any BufRead
// - ReadError: recoverable read failure (destination is left at zero)

mod errors;
mod token_reader;

pub use errors::{ReadError, ReadResult};
pub use token_reader::TokenReader;
