// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    carrier::Carrier,
    error::{expect_total, IntegerError},
    signed::{negate_bits, Signed},
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// `a + b mod 2^W` without ever overflowing the carrier.
///
/// When the native sum would carry out, both high bits are cleared, the low
/// parts are added, and the combined high bit is restored with XOR.
#[inline]
fn wrapping_sum<U: Carrier>(a: U, b: U) -> U {
    if U::LIMIT.wrapping_sub(a) >= b {
        return a.wrapping_add(b);
    }

    let low_mask = U::MAX_POSITIVE;
    let low_sum = (a & low_mask).wrapping_add(b & low_mask);
    low_sum ^ ((a ^ b) & U::MIN_NEGATIVE)
}

impl<U: Carrier> Signed<U> {
    /// Negation, [`IntegerError::Overflow`] for `MIN`.
    #[inline]
    pub fn try_neg(self) -> Result<Self, IntegerError> {
        if self.0 == U::MIN_NEGATIVE {
            return Err(IntegerError::Overflow);
        }

        Ok(Self(negate_bits(self.0)))
    }

    /// Absolute value, [`IntegerError::Overflow`] for `MIN`.
    #[inline]
    pub fn try_abs(self) -> Result<Self, IntegerError> {
        if self.0 == U::MIN_NEGATIVE {
            return Err(IntegerError::Overflow);
        }

        Ok(Self(self.unsigned_abs()))
    }

    #[track_caller]
    #[inline]
    pub fn abs(self) -> Self {
        expect_total(self.try_abs(), "absolute value")
    }

    /// Checked addition
    pub fn try_add(self, other: Self) -> Result<Self, IntegerError> {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => {
                if U::MAX_POSITIVE.wrapping_sub(self.0) < other.0 {
                    return Err(IntegerError::Overflow);
                }
                Ok(Self(self.0.wrapping_add(other.0)))
            }
            (true, true) => {
                // both magnitudes are in [1, MAX_MAGNITUDE]
                let (a, b) = (negate_bits(self.0), negate_bits(other.0));
                if U::MAX_MAGNITUDE.wrapping_sub(a) < b {
                    return Err(IntegerError::Overflow);
                }
                Ok(Self(negate_bits(a.wrapping_add(b))))
            }
            // opposite signs move toward zero, the wrapped sum is exact
            _ => Ok(Self(wrapping_sum(self.0, other.0))),
        }
    }

    /// Checked subtraction
    pub fn try_sub(self, other: Self) -> Result<Self, IntegerError> {
        if other.is_zero() {
            return Ok(self);
        }

        if other.0 == U::MIN_NEGATIVE {
            // a - MIN = a + 2^(W-1), representable only for negative a
            if !self.is_negative() {
                return Err(IntegerError::Overflow);
            }
            return Ok(Self(self.0 ^ U::MIN_NEGATIVE));
        }

        self.try_add(Self(negate_bits(other.0)))
    }

    /// Checked multiplication over magnitudes.
    ///
    /// A non-negative product may reach `MAX_POSITIVE`, a negative one
    /// `MAX_MAGNITUDE`.
    pub fn try_mul(self, other: Self) -> Result<Self, IntegerError> {
        let negative = self.is_negative() != other.is_negative();
        let (a, b) = (self.unsigned_abs(), other.unsigned_abs());

        if a == U::ZERO || b == U::ZERO {
            return Ok(Self::ZERO);
        }

        let bound = if negative { U::MAX_MAGNITUDE } else { U::MAX_POSITIVE };
        if bound / a < b {
            return Err(IntegerError::Overflow);
        }

        let product = a.wrapping_mul(b);
        if negative {
            Ok(Self(negate_bits(product)))
        } else {
            Ok(Self(product))
        }
    }

    /// Checked division, truncating toward zero.
    ///
    /// The only unrepresentable quotient is `MIN / -1`, detected as a
    /// non-negative quotient of magnitudes landing in the negative region.
    pub fn try_div(self, other: Self) -> Result<Self, IntegerError> {
        if other.is_zero() {
            return Err(IntegerError::DivisionByZero);
        }

        let negative = self.is_negative() != other.is_negative();
        let quotient = self.unsigned_abs() / other.unsigned_abs();

        if negative {
            Ok(Self(negate_bits(quotient)))
        } else if quotient >= U::MIN_NEGATIVE {
            Err(IntegerError::Overflow)
        } else {
            Ok(Self(quotient))
        }
    }

    /// ## Euclidean modulus
    ///
    /// ### Arguments
    ///
    /// * `modulus` - Strictly positive divisor
    ///
    /// ### Returns
    ///
    /// A value in `[0, modulus)` for dividends of either sign, or
    /// [`IntegerError::NegativeModulus`] when `modulus <= 0`
    pub fn try_rem_euclid(self, modulus: Self) -> Result<Self, IntegerError> {
        if !modulus.is_positive() {
            return Err(IntegerError::NegativeModulus);
        }

        if self.is_nonnegative() {
            return Ok(Self(self.0 % modulus.0));
        }

        let remainder = self.unsigned_abs() % modulus.0;
        if remainder == U::ZERO {
            Ok(Self::ZERO)
        } else {
            Ok(Self(modulus.0.wrapping_sub(remainder)))
        }
    }

    #[track_caller]
    #[inline]
    pub fn rem_euclid(self, modulus: Self) -> Self {
        expect_total(self.try_rem_euclid(modulus), "euclidean modulus")
    }
}

// Operators are the total forms and panic on any error
impl<U: Carrier> Add for Signed<U> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn add(self, other: Self) -> Self {
        expect_total(self.try_add(other), "addition")
    }
}

impl<U: Carrier> Sub for Signed<U> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn sub(self, other: Self) -> Self {
        expect_total(self.try_sub(other), "subtraction")
    }
}

impl<U: Carrier> Mul for Signed<U> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn mul(self, other: Self) -> Self {
        expect_total(self.try_mul(other), "multiplication")
    }
}

impl<U: Carrier> Div for Signed<U> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn div(self, other: Self) -> Self {
        expect_total(self.try_div(other), "division")
    }
}

impl<U: Carrier> Neg for Signed<U> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn neg(self) -> Self {
        expect_total(self.try_neg(), "unary negation")
    }
}

impl<U: Carrier> AddAssign for Signed<U> {
    #[track_caller]
    #[inline]
    fn add_assign(&mut self, other: Self) { *self = *self + other; }
}

impl<U: Carrier> SubAssign for Signed<U> {
    #[track_caller]
    #[inline]
    fn sub_assign(&mut self, other: Self) { *self = *self - other; }
}

impl<U: Carrier> MulAssign for Signed<U> {
    #[track_caller]
    #[inline]
    fn mul_assign(&mut self, other: Self) { *self = *self * other; }
}

impl<U: Carrier> DivAssign for Signed<U> {
    #[track_caller]
    #[inline]
    fn div_assign(&mut self, other: Self) { *self = *self / other; }
}
