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

//! Streaming encoder and decoder for Clockwork Base32.
//!
//! Clockwork Base32 maps every 5 bits of input to one of the characters
//! `0123456789ABCDEFGHJKMNPQRSTVWXYZ`. There is no padding. On decode, case
//! is ignored, `O` is read as `0`, and `I` and `L` are read as `1`.
//!
//! [`Encoder`] and [`Decoder`] hold fewer than one output unit of pending
//! bits and push their output into a caller-owned [`Sink`], so a stream can
//! be fed in arbitrary chunks. The free functions in [`encode`] and
//! [`decode`] are built on top of them.
//!
//! ```
//! use clockwork_base32::{decode_to_vec, encode_to_string};
//!
//! assert_eq!(encode_to_string(*b"foobar"), "CSQPYRK1E8");
//! assert_eq!(decode_to_vec(*b"csqpyrkie8").unwrap(), b"foobar");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod alphabet;
pub mod decode;
pub mod encode;
mod iter;
pub mod sink;
mod symbol;

#[cfg(feature = "alloc")]
extern crate alloc;

const BITS_PER_SYMBOL: u8 = 5;
const BITS_PER_BYTE: u8 = 8;

const fn mask(n: u8) -> u16 {
    (1 << n) - 1
}

pub use symbol::Symbol;

pub use sink::Sink;

pub use decode::decode_bytes;
pub use decode::decode_into;
pub use decode::decode_str;
#[cfg(feature = "alloc")]
pub use decode::decode_to_vec;
pub use decode::{DecodeError, DecodeResult, Decoder, InvalidSymbol};

pub use encode::encode_into;
pub use encode::encode_to_bytes;
pub use encode::encode_to_chars;
#[cfg(feature = "alloc")]
pub use encode::encode_to_string;
pub use encode::{EncodeError, EncodeResult, Encoder, ScopedEncoder};
