/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of clockwork-base32.
 *
 * clockwork-base32 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * clockwork-base32 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with clockwork-base32. If not, see <https://www.gnu.org/licenses/>.
 */

use super::alphabet;
use core::fmt::{self, Debug, Formatter};

/// A 5-bit symbol value (0 through 31).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Returns the symbol with value `x`, or [`None`] if `x` is 32 or more.
    pub const fn new(x: u8) -> Option<Self> {
        if x < 32 {
            Some(Self(x))
        } else {
            None
        }
    }

    /// Returns the symbol formed by the lowest 5 bits of `x`.
    pub const fn from_low_bits(x: u16) -> Self {
        Self((x & 0x1f) as u8)
    }

    /// # Safety
    ///
    /// `x` must be less than 32.
    pub(crate) const unsafe fn new_unchecked(x: u8) -> Self {
        Self(x)
    }

    /// The numeric value of this symbol.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The canonical character for this symbol.
    pub fn to_ascii(self) -> u8 {
        alphabet::encode_symbol(self)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}, {:?})", self.0, char::from(self.to_ascii()))
    }
}

impl From<Symbol> for u8 {
    fn from(s: Symbol) -> u8 {
        s.0
    }
}
