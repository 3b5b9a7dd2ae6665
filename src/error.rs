// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Failure kinds of the fallible (`try_*`) operations.
///
/// The total forms panic with a message naming the failed operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum IntegerError {
    /// The result, or the negation of an operand, lies outside the signed
    /// range of the width.
    #[error("arithmetic overflow")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    /// The modulus argument of a Euclidean reduction was zero or negative.
    #[error("modulus must be strictly positive")]
    NegativeModulus,

    /// A negative value was read as unsigned, or a magnitude does not fit
    /// the requested sign.
    #[error("value out of range for conversion")]
    DomainConversion,

    #[error("invalid digit found in string")]
    Parse,
}

/// Unwraps the result of a fallible operation for its total form.
///
/// Overflow panics read like `"addition overflow"`; other kinds are
/// prefixed with the operation name.
#[track_caller]
pub(crate) fn expect_total<T>(result: Result<T, IntegerError>, operation: &str) -> T {
    match result {
        Ok(value) => value,
        Err(IntegerError::Overflow) => panic!("{operation} overflow"),
        Err(err) => panic!("{operation}: {err}"),
    }
}
