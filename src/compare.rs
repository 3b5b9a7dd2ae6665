// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{carrier::Carrier, signed::Signed};
use core::cmp::Ordering;

impl<U: Carrier> Signed<U> {
    /// Signed maximum.
    ///
    /// Patterns order correctly within a sign class. Across classes the
    /// non-negative operand wins, and it is the one with the smaller pattern.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        let same_sign = self.is_negative() == other.is_negative();
        let pick_self = if same_sign { self.0 >= other.0 } else { self.0 <= other.0 };

        if pick_self { self } else { other }
    }

    /// Signed minimum, the mirror of [`Signed::max`].
    #[inline]
    pub fn min(self, other: Self) -> Self {
        let same_sign = self.is_negative() == other.is_negative();
        let pick_self = if same_sign { self.0 <= other.0 } else { self.0 >= other.0 };

        if pick_self { self } else { other }
    }
}

impl<U: Carrier> PartialOrd for Signed<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Carrier> Ord for Signed<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if *self == Signed::min(*self, *other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
