// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width two's-complement signed integers on top of unsigned carriers.
//!
//! One kernel, [`Signed<U>`], serves every width; the carrier `U` fixes the
//! width at compile time. Each fallible operation has a `try_*` form
//! returning [`IntegerError`] and a total form that panics.

pub mod carrier;
pub mod error;
mod macros;
pub mod signed;

mod arith;
mod cast;
mod compare;
mod shift;

pub use carrier::{Carrier, U256};
pub use error::IntegerError;
pub use signed::Signed;

pub type I8 = Signed<u8>;
pub type I16 = Signed<u16>;
pub type I32 = Signed<u32>;
pub type I64 = Signed<u64>;
pub type I128 = Signed<u128>;
pub type I256 = Signed<U256>;
