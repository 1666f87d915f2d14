// ============================================================================
// Storage Module
// Backing buffers for arbitrary-precision values
// ============================================================================
//
// This module provides:
// - DigitStore: growable buffer of decimal digits, least-significant first
//
// Growth policy:
// - First reallocation reserves MIN_CAPACITY (8) slots
// - Every later reallocation doubles until the request fits
// - Digits are moved into the new buffer; order is never changed

mod digit_store;

pub use digit_store::DigitStore;
