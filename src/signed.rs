// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{carrier::{Carrier, U256}, error::{expect_total, IntegerError}, macros::{impl_from_primitive, impl_widening}};
use core::{fmt, str::FromStr};

/// Two's-complement signed integer stored in an unsigned carrier `U`.
///
/// The carrier holds the literal bit pattern of the value, with no tag or
/// padding. Patterns up to `U::MAX_POSITIVE` are the non-negative values,
/// patterns from `U::MIN_NEGATIVE` to `U::LIMIT` stand for `rep - 2^W`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Signed<U: Carrier>(pub(crate) U);

/// Two's-complement negation of a raw pattern.
///
/// `MIN_NEGATIVE` maps to itself; callers that need the mathematical
/// negation must rule that pattern out first.
#[inline]
pub(crate) fn negate_bits<U: Carrier>(rep: U) -> U {
    if rep == U::ZERO {
        U::ZERO
    } else {
        (rep ^ U::LIMIT).wrapping_add(U::ONE)
    }
}

impl<U: Carrier> Signed<U> {
    /// The number of bits in this signed integer type
    pub const BITS: u32 = U::BITS;
    /// Zero value
    pub const ZERO: Self = Self(U::ZERO);
    /// One value
    pub const ONE: Self = Self(U::ONE);
    /// All bits set
    pub const MINUS_ONE: Self = Self(U::LIMIT);
    /// `2^(W-1) - 1`
    pub const MAX: Self = Self(U::MAX_POSITIVE);
    /// `-2^(W-1)`
    pub const MIN: Self = Self(U::MIN_NEGATIVE);

    /// Wraps a raw two's-complement pattern without any check.
    #[inline]
    pub const fn from_raw_bits(bits: U) -> Self {
        Self(bits)
    }

    /// The raw two's-complement pattern.
    #[inline]
    pub const fn raw_bits(self) -> U {
        self.0
    }

    /// Check if this number is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == U::ZERO
    }

    /// Check if this number is zero or positive
    #[inline]
    pub fn is_nonnegative(&self) -> bool {
        self.0 <= U::MAX_POSITIVE
    }

    /// Check if this number is negative
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 >= U::MIN_NEGATIVE
    }

    /// Check if this number is positive (> 0)
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_nonnegative() && !self.is_zero()
    }

    /// Magnitude as an unsigned integer. `MIN` yields `MAX_MAGNITUDE`.
    #[inline]
    pub fn unsigned_abs(self) -> U {
        if self.is_negative() {
            negate_bits(self.0)
        } else {
            self.0
        }
    }

    /// ## Build a value from a magnitude and a sign
    ///
    /// ### Arguments
    ///
    /// * `magnitude` - Absolute value, at most `MAX_MAGNITUDE`
    /// * `is_positive` - `false` selects the negative value; zero is zero either way
    ///
    /// ### Returns
    ///
    /// [`IntegerError::DomainConversion`] if the magnitude does not fit the sign
    pub fn try_from_magnitude_and_sign(magnitude: U, is_positive: bool) -> Result<Self, IntegerError> {
        if magnitude > U::MAX_MAGNITUDE {
            return Err(IntegerError::DomainConversion);
        }

        if is_positive {
            if magnitude > U::MAX_POSITIVE {
                return Err(IntegerError::DomainConversion);
            }
            Ok(Self(magnitude))
        } else {
            Ok(Self(negate_bits(magnitude)))
        }
    }

    #[track_caller]
    #[inline]
    pub fn from_magnitude_and_sign(magnitude: U, is_positive: bool) -> Self {
        expect_total(Self::try_from_magnitude_and_sign(magnitude, is_positive), "magnitude and sign conversion")
    }

    /// Non-negative value equal to `magnitude`.
    #[inline]
    pub fn try_from_unsigned(magnitude: U) -> Result<Self, IntegerError> {
        if magnitude > U::MAX_POSITIVE {
            return Err(IntegerError::DomainConversion);
        }

        Ok(Self(magnitude))
    }

    #[track_caller]
    #[inline]
    pub fn from_unsigned(magnitude: U) -> Self {
        expect_total(Self::try_from_unsigned(magnitude), "unsigned conversion")
    }

    /// The value as an unsigned integer, refused for negative values.
    #[inline]
    pub fn try_to_unsigned(self) -> Result<U, IntegerError> {
        if self.is_negative() {
            return Err(IntegerError::DomainConversion);
        }

        Ok(self.0)
    }

    #[track_caller]
    #[inline]
    pub fn to_unsigned(self) -> U {
        expect_total(self.try_to_unsigned(), "unsigned conversion")
    }

    /// Convert from string in given radix, with an optional leading sign.
    ///
    /// The magnitude is range checked against the sign, so `-128` parses
    /// into an 8-bit value but `128` does not.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, IntegerError> {
        // native parsers assert on the radix instead of returning an error
        if !(2..=36).contains(&radix) {
            return Err(IntegerError::Parse);
        }

        let src = src.trim();
        let (digits, is_positive) = match src.strip_prefix('-') {
            Some(rest) => (rest, false),
            None => (src.strip_prefix('+').unwrap_or(src), true),
        };
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(IntegerError::Parse);
        }

        let magnitude = U::from_str_radix(digits, radix)?;
        Self::try_from_magnitude_and_sign(magnitude, is_positive)
    }
}

impl<U: Carrier> FromStr for Signed<U> {
    type Err = IntegerError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(src, 10)
    }
}

impl<U: Carrier> fmt::Display for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<U: Carrier> fmt::Debug for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<U: Carrier> fmt::LowerHex for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{:x}", self.unsigned_abs())
        } else {
            write!(f, "{:x}", self.0)
        }
    }
}

impl_from_primitive! {
    i8 as u8 => [u8, u16, u32, u64, u128, U256];
    i16 as u16 => [u16, u32, u64, u128, U256];
    i32 as u32 => [u32, u64, u128, U256];
    i64 as u64 => [u64, u128, U256];
    i128 as u128 => [u128, U256];
}

impl_widening! {
    u8 => [u16, u32, u64, u128, U256];
    u16 => [u32, u64, u128, U256];
    u32 => [u64, u128, U256];
    u64 => [u128, U256];
    u128 => [U256];
}
