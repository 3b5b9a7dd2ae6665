// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{carrier::Carrier, signed::Signed};

impl<U: Carrier> Signed<U> {
    /// Reinterprets the value at another width, working on raw patterns only.
    ///
    /// Widening sign-extends: when the sign bit is set, ones are filled into
    /// bits `U::BITS..V::BITS`. Narrowing keeps the low `V::BITS` bits and
    /// silently discards the rest, like an `as` cast between primitives.
    pub fn cast<V: Carrier>(self) -> Signed<V> {
        let bits = self.0.to_u256();

        if V::BITS > U::BITS && self.is_negative() {
            let extension = V::LIMIT.to_u256() & !U::LIMIT.to_u256();
            return Signed(V::truncate_from_u256(bits | extension));
        }

        Signed(V::truncate_from_u256(bits))
    }
}
