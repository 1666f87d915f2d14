// ============================================================================
// Arbitrary-Precision Integer
// Signed decimal integer backed by a growable digit store
// ============================================================================

use super::errors::{BigIntError, BigIntResult};
use crate::storage::DigitStore;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Arbitrary-precision signed integer stored in base 10.
///
/// Digit `i` holds the coefficient of `10^i`, so index 0 is the ones place.
///
/// # Invariants
/// - The digit store is never empty; zero is `[0]`.
/// - The most significant digit of a non-zero value is non-zero.
/// - Zero is never negative.
///
/// Arithmetic produces new values; compound assignment and the
/// increment/decrement helpers rebind `self` to the new result.
///
/// # Example
/// ```
/// use decimal_bigint::numeric::BigInt;
///
/// let a: BigInt = "-100".parse()?;
/// let b = BigInt::from(150);
/// assert_eq!((&a + &b).to_string(), "50");
/// assert_eq!((b - a).to_string(), "250");
/// # Ok::<(), decimal_bigint::numeric::BigIntError>(())
/// ```
#[derive(Clone)]
pub struct BigInt {
    digits: DigitStore,
    is_negative: bool,
}

impl BigInt {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    pub fn zero() -> Self {
        let mut digits = DigitStore::new();
        digits.push(0);
        Self {
            digits,
            is_negative: false,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        let mut digits = DigitStore::new();
        digits.push(1);
        Self {
            digits,
            is_negative: false,
        }
    }

    /// Parse a decimal string.
    ///
    /// Accepts an optional leading `-` followed by one or more ASCII digits.
    /// Leading zeros are allowed and stripped. The empty string is zero.
    ///
    /// # Errors
    /// Returns `InvalidFormat` holding `s` if it is not a valid value.
    pub fn from_string(s: &str) -> BigIntResult<Self> {
        if !Self::is_valid(s) {
            tracing::debug!(input = s, "rejected non-numeric integer input");
            return Err(BigIntError::InvalidFormat(s.to_owned()));
        }
        Ok(Self::from_validated(s))
    }

    /// Check whether `s` would parse.
    ///
    /// Valid: `""`, or an optional `-` followed by at least one ASCII digit.
    pub fn is_valid(s: &str) -> bool {
        if s.is_empty() {
            return true;
        }
        let body = s.strip_prefix('-').unwrap_or(s);
        !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit())
    }

    /// Build from a string that already passed [`BigInt::is_valid`].
    pub(crate) fn from_validated(s: &str) -> Self {
        debug_assert!(Self::is_valid(s));
        if s.is_empty() {
            return Self::zero();
        }

        let (is_negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        // Last character is the ones place
        let mut digits = DigitStore::with_capacity(body.len());
        for b in body.bytes().rev() {
            digits.push(b - b'0');
        }

        let mut value = Self {
            digits,
            is_negative,
        };
        value.trim_leading_zeros();
        value
    }

    /// Reset to canonical zero, keeping the allocation.
    pub(crate) fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
        self.is_negative = false;
    }

    /// Strip most-significant zeros. An all-zero value becomes `[0]`, non-negative.
    fn trim_leading_zeros(&mut self) {
        while self.digits.last() == Some(0) {
            self.digits.erase(self.digits.len() - 1);
        }

        if self.digits.is_empty() {
            self.digits.push(0);
            self.is_negative = false;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits.get(0) == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative && !self.is_zero()
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Magnitude digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        self.digits.as_slice()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            digits: self.digits.clone(),
            is_negative: false,
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison by mathematical value.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_negative, other.is_negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.digits, &other.digits),
            // Larger magnitude is more negative
            (true, true) => cmp_magnitude(&self.digits, &other.digits).reverse(),
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// `self + rhs`
    pub fn add_ref(&self, rhs: &Self) -> Self {
        if self.is_negative == rhs.is_negative {
            return Self {
                digits: add_magnitudes(&self.digits, &rhs.digits),
                is_negative: self.is_negative,
            };
        }

        // Signs differ: subtract the smaller magnitude from the larger and
        // keep the sign of the larger.
        let (larger, smaller) = match cmp_magnitude(&self.digits, &rhs.digits) {
            Ordering::Less => (rhs, self),
            Ordering::Equal | Ordering::Greater => (self, rhs),
        };

        let mut result = Self {
            digits: sub_magnitudes(&larger.digits, &smaller.digits),
            is_negative: larger.is_negative,
        };
        result.trim_leading_zeros();
        result
    }

    /// `self - rhs`, computed as `self + (-rhs)`.
    pub fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_ref(&rhs.negated())
    }

    /// `-self`. Zero stays non-negative.
    pub fn negated(&self) -> Self {
        let mut result = self.clone();
        result.negate();
        result
    }

    /// Flip the sign in place. Zero stays non-negative.
    pub(crate) fn negate(&mut self) {
        if !self.is_zero() {
            self.is_negative = !self.is_negative;
        }
    }

    // ========================================================================
    // Increment / Decrement
    // ========================================================================

    /// Pre-increment: `self = self + 1`, returning the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self = self.add_ref(&Self::one());
        self
    }

    /// Pre-decrement: `self = self - 1`, returning the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.sub_ref(&Self::one());
        self
    }

    /// Post-increment: `self = self + 1`, returning the prior value.
    pub fn post_increment(&mut self) -> Self {
        let next = self.add_ref(&Self::one());
        std::mem::replace(self, next)
    }

    /// Post-decrement: `self = self - 1`, returning the prior value.
    pub fn post_decrement(&mut self) -> Self {
        let next = self.sub_ref(&Self::one());
        std::mem::replace(self, next)
    }
}

// ============================================================================
// Magnitude Helpers
// ============================================================================

/// Compare two canonical magnitudes.
fn cmp_magnitude(a: &DigitStore, b: &DigitStore) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.as_slice().iter().rev().cmp(b.as_slice().iter().rev()))
}

/// Digit-wise sum with carry. The shorter operand is padded with zeros.
fn add_magnitudes(a: &DigitStore, b: &DigitStore) -> DigitStore {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = DigitStore::with_capacity(long.len() + 1);
    let mut carry = 0u8;

    for i in 0..long.len() {
        let rhs = if i < short.len() { short.get(i) } else { 0 };
        let sum = long.get(i) + rhs + carry;
        out.push(sum % 10);
        carry = u8::from(sum > 9);
    }

    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Digit-wise difference with borrow. Requires `|larger| >= |smaller|`.
///
/// The result may carry leading zeros; callers canonicalize.
fn sub_magnitudes(larger: &DigitStore, smaller: &DigitStore) -> DigitStore {
    debug_assert!(cmp_magnitude(larger, smaller) != Ordering::Less);
    let mut out = DigitStore::with_capacity(larger.len());
    let mut borrow = 0i8;

    for i in 0..larger.len() {
        let rhs = if i < smaller.len() { smaller.get(i) as i8 } else { 0 };
        let mut diff = larger.get(i) as i8 - rhs - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }

    debug_assert_eq!(borrow, 0);
    out
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative.hash(state);
        self.digits.as_slice().hash(state);
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for BigInt {
    type Err = BigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

// Primitive integers go through their decimal rendering so both construction
// paths share one canonicalization.
macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_validated(&value.to_string())
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, u32, u64);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude: String = self
            .digits
            .as_slice()
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad_integral(!self.is_negative, "", &magnitude)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({}, digits={})", self, self.digits.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
