// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

/// Implements [`Carrier`](crate::Carrier) for native unsigned integers
macro_rules! impl_native_carrier {
    ( $($uname:ty),+ $(,)? ) => {
        $(
            impl $crate::carrier::Carrier for $uname {
                const BITS: u32 = <$uname>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const LIMIT: Self = <$uname>::MAX;
                const MAX_POSITIVE: Self = <$uname>::MAX >> 1;
                const MIN_NEGATIVE: Self = !(<$uname>::MAX >> 1);

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self { <$uname>::wrapping_add(self, rhs) }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self { <$uname>::wrapping_sub(self, rhs) }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self { <$uname>::wrapping_mul(self, rhs) }

                #[inline]
                fn shift_left(self, shift: u32) -> Self { self << shift }

                #[inline]
                fn shift_right(self, shift: u32) -> Self { self >> shift }

                #[inline]
                fn to_u256(self) -> $crate::carrier::U256 {
                    let wide = self as u128;
                    $crate::carrier::U256([wide as u64, (wide >> 64) as u64, 0, 0])
                }

                #[inline]
                fn truncate_from_u256(value: $crate::carrier::U256) -> Self {
                    let $crate::carrier::U256(ref words) = value;
                    (((words[1] as u128) << 64) | (words[0] as u128)) as $uname
                }

                fn from_str_radix(src: &str, radix: u32) -> Result<Self, $crate::error::IntegerError> {
                    if !(2..=36).contains(&radix) {
                        return Err($crate::error::IntegerError::Parse);
                    }
                    <$uname>::from_str_radix(src, radix).map_err(|_| $crate::error::IntegerError::Parse)
                }
            }
        )+
    };
}

/// `From<iN>` for every signed width able to hold the primitive.
///
/// The primitive's bit pattern is taken verbatim at its own width and then
/// sign-extended by the width caster.
macro_rules! impl_from_primitive {
    ( $( $prim:ty as $raw:ty => [ $($uname:ty),+ ] );+ $(;)? ) => {
        $($(
            impl From<$prim> for $crate::signed::Signed<$uname> {
                #[inline]
                fn from(value: $prim) -> Self {
                    $crate::signed::Signed::<$raw>::from_raw_bits(value as $raw).cast::<$uname>()
                }
            }
        )+)+
    };
}

/// Lossless `From<Signed<A>> for Signed<B>` for every strictly wider `B`
macro_rules! impl_widening {
    ( $( $from:ty => [ $($to:ty),+ ] );+ $(;)? ) => {
        $($(
            impl From<$crate::signed::Signed<$from>> for $crate::signed::Signed<$to> {
                #[inline]
                fn from(value: $crate::signed::Signed<$from>) -> Self {
                    value.cast::<$to>()
                }
            }
        )+)+
    };
}

pub(crate) use impl_from_primitive;
pub(crate) use impl_native_carrier;
pub(crate) use impl_widening;
