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

//! Functions and types for decoding Clockwork Base32 data.

use super::alphabet;
use super::{mask, Sink, Symbol};
use super::{BITS_PER_BYTE, BITS_PER_SYMBOL};

use core::ascii;
use core::fmt::{self, Display, Formatter};
use core::iter::FusedIterator;
use core::str::Bytes;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A character that is not part of the Clockwork Base32 alphabet, as
/// returned by [`Decoder::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSymbol(u8);

impl InvalidSymbol {
    /// The rejected character.
    pub fn byte(&self) -> u8 {
        self.0
    }

    /// Turns this into a [`DecodeError`] at position `index`.
    pub fn at(self, index: usize) -> DecodeError {
        DecodeError {
            byte: self.0,
            index,
        }
    }
}

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid symbol: '{}'", ascii::escape_default(self.0))
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidSymbol {}

/// An error encountered while decoding a sequence of symbols.
///
/// Every byte decoded before the offending symbol has already been emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    byte: u8,
    index: usize,
}

impl DecodeError {
    /// The rejected character.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// The zero-based position of the rejected character in the input.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid symbol at position {}: '{}'",
            self.index,
            ascii::escape_default(self.byte),
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

/// A stateful Clockwork Base32 decoder.
///
/// Each byte is pushed to the sink as soon as all 8 of its bits have been
/// decoded. There is no finalization step: a well-formed encoding leaves at
/// most 4 padding bits at the end, and those are ignored.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    bits: u8,
    /// Number of significant bits in `bits`; always less than 8.
    count: u8,
}

impl Decoder {
    /// Creates a new decoder.
    pub const fn new() -> Self {
        Self {
            bits: 0,
            count: 0,
        }
    }

    /// The number of decoded bits (0 through 7) not yet emitted as a byte.
    pub fn pending_bits(&self) -> u8 {
        self.count
    }

    fn step(&mut self, symbol: Symbol) -> Option<u8> {
        debug_assert!(self.count < BITS_PER_BYTE);
        let combined = (u16::from(self.bits) << BITS_PER_SYMBOL)
            | u16::from(symbol.value());
        let total = self.count + BITS_PER_SYMBOL;
        if total < BITS_PER_BYTE {
            self.count = total;
            // Fewer than 8 significant bits.
            self.bits = combined as u8;
            return None;
        }
        let remain = total - BITS_PER_BYTE;
        self.count = remain;
        self.bits = (combined & mask(remain)) as u8;
        Some((combined >> remain) as u8)
    }

    /// Decodes one symbol character, pushing the completed byte, if any, to
    /// `sink`.
    ///
    /// If `c` is not an accepted character, nothing is pushed and the
    /// decoder's state is unchanged.
    pub fn decode<S: Sink<u8>>(
        &mut self,
        c: u8,
        mut sink: S,
    ) -> Result<(), InvalidSymbol> {
        let symbol = alphabet::decode_symbol(c).ok_or(InvalidSymbol(c))?;
        if let Some(b) = self.step(symbol) {
            sink.push(b);
        }
        Ok(())
    }

    /// Decodes every character of `symbols` in order, stopping at the first
    /// one that is rejected.
    ///
    /// The index in the returned error is relative to the start of
    /// `symbols`. Bytes pushed before the error are not taken back, and the
    /// decoder remains usable.
    pub fn decode_all<I, S>(
        &mut self,
        symbols: I,
        mut sink: S,
    ) -> DecodeResult<()>
    where
        I: IntoIterator<Item = u8>,
        S: Sink<u8>,
    {
        symbols.into_iter().enumerate().try_for_each(|(i, c)| {
            self.decode(c, &mut sink).map_err(|e| e.at(i))
        })
    }
}

/// Iterator returned by [`decode_bytes`].
///
/// Yields each decoded byte, or a single error for the first invalid
/// symbol, after which iteration ends.
pub struct BytesDecoder<I> {
    iter: I,
    decoder: Decoder,
    index: usize,
    done: bool,
}

impl<I> BytesDecoder<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            decoder: Decoder::new(),
            index: 0,
            done: false,
        }
    }
}

impl<I> Iterator for BytesDecoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = DecodeResult<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for c in &mut self.iter {
            let index = self.index;
            self.index += 1;
            match alphabet::decode_symbol(c) {
                Some(symbol) => {
                    if let Some(b) = self.decoder.step(symbol) {
                        return Some(Ok(b));
                    }
                }
                None => {
                    self.done = true;
                    return Some(Err(InvalidSymbol(c).at(index)));
                }
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let pending = usize::from(self.decoder.pending_bits());
        let (_, upper) = self.iter.size_hint();
        (
            // Any symbol could be invalid.
            0,
            upper.and_then(|n| {
                if n == 0 {
                    return Some(0);
                }
                n.checked_mul(BITS_PER_SYMBOL.into())?
                    .checked_add(pending)
                    .map(|bits| bits / usize::from(BITS_PER_BYTE))
                    .and_then(|n| {
                        // Room for an error item.
                        n.checked_add(1)
                    })
            }),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for BytesDecoder<I> {}

/// Decodes `symbols`, pushing every decoded byte to `sink`.
///
/// On failure, the error gives the position of the first rejected
/// character; bytes decoded before it have already been pushed.
pub fn decode_into<I, S>(symbols: I, sink: S) -> DecodeResult<()>
where
    I: IntoIterator<Item = u8>,
    S: Sink<u8>,
{
    Decoder::new().decode_all(symbols, sink)
}

/// Decodes a sequence of symbol characters lazily.
pub fn decode_bytes<I>(symbols: I) -> BytesDecoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    BytesDecoder::new(symbols.into_iter())
}

/// Decodes a Clockwork Base32 `str` lazily.
///
/// Error positions are byte offsets into `s`.
pub fn decode_str(s: &str) -> BytesDecoder<Bytes<'_>> {
    decode_bytes(s.bytes())
}

/// Decodes `symbols` into a [`Vec`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec<I>(symbols: I) -> DecodeResult<Vec<u8>>
where
    I: IntoIterator<Item = u8>,
{
    let mut bytes = Vec::new();
    decode_into(symbols, &mut bytes)?;
    Ok(bytes)
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;

    #[test]
    fn steps_through_four_symbols() {
        let mut decoder = Decoder::new();
        let mut out = Vec::new();
        decoder.decode(b'Z', &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(decoder.pending_bits(), 5);
        decoder.decode(b'Z', &mut out).unwrap();
        assert_eq!(out, [0xff]);
        assert_eq!(decoder.pending_bits(), 2);
        decoder.decode(b'z', &mut out).unwrap();
        assert_eq!(decoder.pending_bits(), 7);
        decoder.decode(b'g', &mut out).unwrap();
        assert_eq!(out, [0xff, 0xff]);
        assert_eq!(decoder.pending_bits(), 4);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut decoder = Decoder::new();
        let mut out = Vec::new();
        decoder.decode(b'C', &mut out).unwrap();
        let err = decoder.decode(b'U', &mut out).unwrap_err();
        assert_eq!(err.byte(), b'U');
        assert_eq!(decoder.pending_bits(), 5);
        assert!(out.is_empty());
        decoder.decode(b'R', &mut out).unwrap();
        assert_eq!(out, b"f");
    }

    #[test]
    fn trailing_bits_are_dropped() {
        assert_eq!(decode_to_vec(*b"C").unwrap(), b"");
        assert_eq!(decode_to_vec(*b"CR").unwrap(), b"f");
        assert_eq!(decode_to_vec(*b"CRZ").unwrap(), b"f");
    }

    #[test]
    fn decode_all_reports_relative_index() {
        let mut decoder = Decoder::new();
        let mut out = Vec::new();
        decoder.decode_all(*b"CSQ", &mut out).unwrap();
        let err = decoder.decode_all(*b"PY*RK", &mut out).unwrap_err();
        assert_eq!((err.index(), err.byte()), (2, b'*'));
        assert_eq!(out, b"foo");
        decoder.decode_all(*b"RK1E8", &mut out).unwrap();
        assert_eq!(out, b"foobar");
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut iter = decode_str("CSQP~YRK1E8");
        assert_eq!(iter.next(), Some(Ok(b'f')));
        assert_eq!(iter.next(), Some(Ok(b'o')));
        let err = iter.next().unwrap().unwrap_err();
        assert_eq!(err.index(), 4);
        assert_eq!(err.byte(), b'~');
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn size_hint_bounds() {
        let input = b"91JPRV3F5GG7EVVJDHJ22";
        let mut iter = decode_bytes(input.iter().copied());
        let mut remaining = 13;
        loop {
            let (lower, upper) = iter.size_hint();
            assert!(lower <= remaining);
            assert!(upper.map_or(false, |n| n >= remaining));
            if iter.next().is_none() {
                break;
            }
            remaining -= 1;
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn error_display() {
        let err = decode_to_vec(*b"12\x80").unwrap_err();
        assert_eq!(
            alloc::format!("{}", err),
            "invalid symbol at position 2: '\\x80'",
        );
    }
}
