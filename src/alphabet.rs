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

//! The Clockwork Base32 symbol table.

use super::Symbol;

/// The canonical character for each symbol value, in order.
pub const SYMBOLS: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Characters accepted on decode in addition to [`SYMBOLS`] and their
/// lowercase forms.
const ALIASES: [(u8, u8); 6] = [
    (b'O', 0),
    (b'o', 0),
    (b'I', 1),
    (b'i', 1),
    (b'L', 1),
    (b'l', 1),
];

const INVALID: u8 = 0xff;

const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        let c = SYMBOLS[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < ALIASES.len() {
        let (c, value) = ALIASES[i];
        table[c as usize] = value;
        i += 1;
    }
    table
};

/// Returns the canonical character for `symbol`.
pub fn encode_symbol(symbol: Symbol) -> u8 {
    SYMBOLS[usize::from(u8::from(symbol))]
}

/// Returns the symbol that `c` stands for, or [`None`] if `c` is not an
/// accepted character.
///
/// Letters are accepted in either case. `O` decodes to 0 and `I` and `L`
/// decode to 1. `U` is not accepted.
pub fn decode_symbol(c: u8) -> Option<Symbol> {
    match DECODE[usize::from(c)] {
        INVALID => None,
        // SAFETY: Every entry of `DECODE` other than `INVALID` is an index
        // into `SYMBOLS` or an alias value, all of which are less than 32.
        n => Some(unsafe { Symbol::new_unchecked(n) }),
    }
}
