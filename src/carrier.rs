// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{error::IntegerError, macros::impl_native_carrier};
use ::uint::construct_uint;
use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Div, Not, Rem},
};

// scuffed doc comment because the macro codegens the beginning of it
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

/// Unsigned fixed-width integer used as the storage of a [`Signed`](crate::Signed).
///
/// Every bound the signed kernel works with is derived from `BITS` at
/// compile time. Arithmetic helpers are only ever called with operands the
/// kernel has already proven not to overflow, except where the name says
/// `wrapping`.
pub trait Carrier:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Width W in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    /// `2^W - 1`, the all-ones mask.
    const LIMIT: Self;
    /// `2^(W-1) - 1`
    const MAX_POSITIVE: Self;
    /// `2^(W-1)`, the pattern of the most negative value.
    const MIN_NEGATIVE: Self;
    /// `2^(W-1)`, the magnitude of the most negative value.
    const MAX_MAGNITUDE: Self = Self::MIN_NEGATIVE;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// `self << shift`, requires `shift < BITS`.
    fn shift_left(self, shift: u32) -> Self;
    /// `self >> shift` (logical), requires `shift < BITS`.
    fn shift_right(self, shift: u32) -> Self;

    /// Zero-extends into the widest carrier.
    fn to_u256(self) -> U256;
    /// Keeps the low `BITS` bits of `value`.
    fn truncate_from_u256(value: U256) -> Self;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, IntegerError>;
}

impl_native_carrier!(u8, u16, u32, u64, u128);

impl Carrier for U256 {
    const BITS: u32 = 256;
    const ZERO: Self = U256([0; 4]);
    const ONE: Self = U256([1, 0, 0, 0]);
    const LIMIT: Self = U256([u64::MAX; 4]);
    const MAX_POSITIVE: Self = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);
    const MIN_NEGATIVE: Self = U256([0, 0, 0, 1 << 63]);

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        let (result, _) = self.overflowing_add(rhs);

        result
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        let (result, _) = self.overflowing_sub(rhs);

        result
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        let (result, _) = self.overflowing_mul(rhs);

        result
    }

    #[inline]
    fn shift_left(self, shift: u32) -> Self {
        self << (shift as usize)
    }

    #[inline]
    fn shift_right(self, shift: u32) -> Self {
        self >> (shift as usize)
    }

    #[inline]
    fn to_u256(self) -> U256 {
        self
    }

    #[inline]
    fn truncate_from_u256(value: U256) -> Self {
        value
    }

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, IntegerError> {
        U256::from_str_radix(src, radix).map_err(|_| IntegerError::Parse)
    }
}
