// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{carrier::Carrier, signed::Signed};
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl<U: Carrier> Signed<U> {
    /// Logical left shift by `shift` bits.
    ///
    /// Bits moved past the width are dropped without an overflow signal,
    /// so any `shift >= BITS` yields zero.
    #[inline]
    pub fn logical_shl(self, shift: u32) -> Self {
        if shift >= U::BITS {
            return Self::ZERO;
        }

        Self(self.0.shift_left(shift))
    }

    /// Arithmetic right shift by `shift` bits (sign-extending).
    ///
    /// A `shift >= BITS` leaves only sign bits: zero or minus one.
    #[inline]
    pub fn arithmetic_shr(self, shift: u32) -> Self {
        if shift == 0 {
            return self;
        }
        if shift >= U::BITS {
            return if self.is_negative() { Self::MINUS_ONE } else { Self::ZERO };
        }

        let logical = self.0.shift_right(shift);
        if !self.is_negative() {
            Self(logical)
        } else {
            // fill the top `shift` bits with 1s to preserve the sign
            let mask = U::LIMIT.shift_left(U::BITS - shift);
            Self(logical | mask)
        }
    }
}

// shift amounts past u32::MAX are far beyond any width
#[inline]
fn clamp_shift(rhs: usize) -> u32 {
    u32::try_from(rhs).unwrap_or(u32::MAX)
}

impl<U: Carrier> Shl<u32> for Signed<U> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: u32) -> Self { Signed::logical_shl(self, rhs) }
}

impl<U: Carrier> Shl<usize> for Signed<U> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: usize) -> Self { Signed::logical_shl(self, clamp_shift(rhs)) }
}

impl<U: Carrier> Shr<u32> for Signed<U> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: u32) -> Self { Signed::arithmetic_shr(self, rhs) }
}

impl<U: Carrier> Shr<usize> for Signed<U> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: usize) -> Self { Signed::arithmetic_shr(self, clamp_shift(rhs)) }
}

impl<U: Carrier> ShlAssign<u32> for Signed<U> {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) { *self = Signed::logical_shl(*self, rhs); }
}

impl<U: Carrier> ShrAssign<u32> for Signed<U> {
    #[inline]
    fn shr_assign(&mut self, rhs: u32) { *self = Signed::arithmetic_shr(*self, rhs); }
}

impl<U: Carrier> ShlAssign<usize> for Signed<U> {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) { *self = Signed::logical_shl(*self, clamp_shift(rhs)); }
}

impl<U: Carrier> ShrAssign<usize> for Signed<U> {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) { *self = Signed::arithmetic_shr(*self, clamp_shift(rhs)); }
}
