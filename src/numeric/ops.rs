// ============================================================================
// Operator Overloads
// Arithmetic operators for owned and borrowed BigInt operands
// ============================================================================

use super::big_int::BigInt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// Every owned/borrowed operand pairing forwards to the by-reference method.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident => $inner:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$inner(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$inner(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$inner(rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$inner(&rhs)
            }
        }
    };
}

forward_binop!(impl Add, add => add_ref);
forward_binop!(impl Sub, sub => sub_ref);

// Compound assignment rebinds to a freshly built result.
impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.add_ref(rhs);
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        *self = self.add_ref(&rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.sub_ref(rhs);
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = self.sub_ref(&rhs);
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negated()
    }
}
