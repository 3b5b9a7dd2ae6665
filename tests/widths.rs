// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use signed_int::{IntegerError, Signed, I256, U256};

/// Runs the kernel at one native width against the matching primitive.
macro_rules! native_suite {
    ( $name:ident, $sname:ident, $uname:ident ) => {
        mod $name {
            use super::*;

            type S = Signed<$uname>;

            fn of(v: $sname) -> S {
                S::from_raw_bits(v as $uname)
            }

            fn raw(result: Result<S, IntegerError>) -> Option<$uname> {
                result.ok().map(S::raw_bits)
            }

            fn value() -> impl Strategy<Value = $sname> {
                prop_oneof![
                    Just($sname::MIN),
                    Just($sname::MIN + 1),
                    Just(-1 as $sname),
                    Just(0 as $sname),
                    Just(1 as $sname),
                    Just($sname::MAX),
                    any::<$sname>(),
                    any::<$sname>(),
                ]
            }

            proptest! {
                #[test]
                fn raw_bits_round_trip(bits in any::<$uname>()) {
                    let v = S::from_raw_bits(bits);
                    prop_assert_eq!(S::from_raw_bits(v.raw_bits()), v);
                }

                #[test]
                fn magnitude_and_sign_round_trip(a in value()) {
                    prop_assert_eq!(S::from_magnitude_and_sign(a.unsigned_abs(), a >= 0), of(a));
                    prop_assert_eq!(of(a).try_to_unsigned().is_ok(), a >= 0);
                    prop_assert_eq!(of(a).unsigned_abs(), a.unsigned_abs());
                }

                #[test]
                fn add_sub_mul(a in value(), b in value()) {
                    prop_assert_eq!(raw(of(a).try_add(of(b))), a.checked_add(b).map(|v| v as $uname));
                    prop_assert_eq!(raw(of(a).try_sub(of(b))), a.checked_sub(b).map(|v| v as $uname));
                    prop_assert_eq!(raw(of(a).try_mul(of(b))), a.checked_mul(b).map(|v| v as $uname));
                }

                #[test]
                fn div(a in value(), b in value()) {
                    let result = of(a).try_div(of(b));
                    prop_assert_eq!(raw(result), a.checked_div(b).map(|v| v as $uname));
                    if b == 0 {
                        prop_assert_eq!(result, Err(IntegerError::DivisionByZero));
                    }
                }

                #[test]
                fn rem_euclid(a in value(), b in value()) {
                    let result = of(a).try_rem_euclid(of(b));
                    if b > 0 {
                        let r = result.unwrap();
                        prop_assert_eq!(Some(r.raw_bits()), a.checked_rem_euclid(b).map(|v| v as $uname));
                        prop_assert!(r >= S::ZERO && r < of(b));
                    } else {
                        prop_assert_eq!(result, Err(IntegerError::NegativeModulus));
                    }
                }

                #[test]
                fn neg_abs(a in value()) {
                    prop_assert_eq!(raw(of(a).try_neg()), a.checked_neg().map(|v| v as $uname));
                    prop_assert_eq!(raw(of(a).try_abs()), a.checked_abs().map(|v| v as $uname));
                    if a != $sname::MIN {
                        prop_assert_eq!(of(a) + (-of(a)), S::ZERO);
                    }
                }

                #[test]
                fn ordering(a in value(), b in value()) {
                    prop_assert_eq!(of(a).cmp(&of(b)), a.cmp(&b));
                    prop_assert_eq!(of(a).max(of(b)), of(a.max(b)));
                    prop_assert_eq!(of(a).min(of(b)), of(a.min(b)));
                }

                #[test]
                fn shifts(a in value(), s in 0..$uname::BITS) {
                    prop_assert_eq!(of(a).arithmetic_shr(s).raw_bits(), (a >> s) as $uname);
                    prop_assert_eq!(of(a).logical_shl(s).raw_bits(), (a as $uname) << s);
                }

                #[test]
                fn casts(a in value()) {
                    let wide = of(a).cast::<U256>();
                    prop_assert_eq!(wide, I256::from(a));
                    prop_assert_eq!(wide.cast::<$uname>(), of(a));
                    prop_assert_eq!(of(a).cast::<u8>().raw_bits(), a as u8);
                    prop_assert_eq!(of(a).cast::<u128>().raw_bits(), a as i128 as u128);
                }

                #[test]
                fn display_and_parse(a in value()) {
                    prop_assert_eq!(of(a).to_string(), a.to_string());
                    prop_assert_eq!(a.to_string().parse::<S>(), Ok(of(a)));
                }
            }
        }
    };
}

native_suite!(width_8, i8, u8);
native_suite!(width_16, i16, u16);
native_suite!(width_32, i32, u32);
native_suite!(width_64, i64, u64);
native_suite!(width_128, i128, u128);

mod width_256 {
    use super::*;

    fn any_i256() -> impl Strategy<Value = I256> {
        prop_oneof![
            Just(I256::MIN),
            Just(I256::MAX),
            Just(I256::MINUS_ONE),
            Just(I256::ZERO),
            any::<[u64; 4]>().prop_map(|words| I256::from_raw_bits(U256(words))),
            any::<i128>().prop_map(I256::from),
        ]
    }

    proptest! {
        #[test]
        fn matches_i128_where_it_fits(a in any::<i128>(), b in any::<i128>()) {
            let (x, y) = (I256::from(a), I256::from(b));
            if let Some(sum) = a.checked_add(b) {
                prop_assert_eq!(x + y, I256::from(sum));
            }
            if let Some(difference) = a.checked_sub(b) {
                prop_assert_eq!(x - y, I256::from(difference));
            }
            if let Some(quotient) = a.checked_div(b) {
                prop_assert_eq!(x / y, I256::from(quotient));
            }
            if b > 0 {
                prop_assert_eq!(x.rem_euclid(y), I256::from(a.rem_euclid(b)));
            }
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn products_of_i64(a in any::<i64>(), b in any::<i64>()) {
            let product = i128::from(a) * i128::from(b);
            prop_assert_eq!(I256::from(a) * I256::from(b), I256::from(product));
        }

        #[test]
        fn add_then_sub_is_identity(x in any_i256(), y in any_i256()) {
            if let Ok(sum) = x.try_add(y) {
                prop_assert_eq!(sum.try_sub(y), Ok(x));
            }
        }

        #[test]
        fn trichotomy(x in any_i256(), y in any_i256()) {
            let holding = [x < y, x == y, x > y].iter().filter(|held| **held).count();
            prop_assert_eq!(holding, 1);
        }

        #[test]
        fn rem_euclid_range(x in any_i256(), m in any_i256()) {
            match x.try_rem_euclid(m) {
                Ok(r) => {
                    prop_assert!(m.is_positive() && r >= I256::ZERO && r < m);
                }
                Err(err) => {
                    prop_assert!(!m.is_positive());
                    prop_assert_eq!(err, IntegerError::NegativeModulus);
                }
            }
        }

        #[test]
        fn display_round_trip(x in any_i256()) {
            prop_assert_eq!(x.to_string().parse::<I256>(), Ok(x));
        }
    }

    #[test]
    fn narrowing_300_keeps_low_byte() {
        let value = I256::from(300i16);
        assert_eq!(value.cast::<u8>().raw_bits(), 44);
    }
}
