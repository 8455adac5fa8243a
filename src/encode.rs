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

//! Functions and types for encoding Clockwork Base32 data.

use super::alphabet;
use super::iter::Flatten;
use super::{mask, Sink, Symbol};
use super::{BITS_PER_BYTE, BITS_PER_SYMBOL};

use core::array;
use core::fmt::{self, Display, Formatter};
use core::iter::{FusedIterator, Take};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// An error encountered while encoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// Input was given to an [`Encoder`] after [`Encoder::finalize`].
    Finalized,
}

/// Alias of <code>[Result]\<T, [EncodeError]></code>.
pub type EncodeResult<T> = Result<T, EncodeError>;

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finalized => write!(f, "encoder has already been finalized"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EncodeError {}

/// The symbol characters produced by one encoder step: at most two.
type Symbols = Take<array::IntoIter<u8, 2>>;

fn symbols(chars: [u8; 2], len: usize) -> Symbols {
    IntoIterator::into_iter(chars).take(len)
}

fn char_for(bits: u16) -> u8 {
    alphabet::encode_symbol(Symbol::from_low_bits(bits))
}

/// A stateful Clockwork Base32 encoder.
///
/// Bytes are fed in one at a time (or in chunks with [`Self::encode_all`]),
/// and each symbol is pushed to the given sink as soon as all 5 of its bits
/// are known. Fewer than 5 bits are ever held back; [`Self::finalize`]
/// flushes them as a final zero-padded symbol. Splitting the input across
/// calls doesn't change the output.
///
/// An encoder that is dropped without being finalized loses its pending
/// bits. [`ScopedEncoder`] finalizes automatically.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    bits: u8,
    /// Number of significant bits in `bits`; always less than 5.
    count: u8,
    finalized: bool,
}

impl Encoder {
    /// Creates a new encoder.
    pub const fn new() -> Self {
        Self {
            bits: 0,
            count: 0,
            finalized: false,
        }
    }

    /// Whether [`Self::finalize`] has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The number of input bits (0 through 4) not yet emitted as a symbol.
    pub fn pending_bits(&self) -> u8 {
        self.count
    }

    fn step(&mut self, byte: u8) -> Symbols {
        debug_assert!(self.count < BITS_PER_SYMBOL);
        let combined =
            (u16::from(self.bits) << BITS_PER_BYTE) | u16::from(byte);
        let total = self.count + BITS_PER_BYTE;
        let remain;
        let chars = if total < BITS_PER_SYMBOL * 2 {
            remain = total - BITS_PER_SYMBOL;
            symbols([char_for(combined >> remain), 0], 1)
        } else {
            remain = total - BITS_PER_SYMBOL * 2;
            let first = char_for(combined >> (BITS_PER_SYMBOL + remain));
            symbols([first, char_for(combined >> remain)], 2)
        };
        self.count = remain;
        // `remain` is at most 4, so this fits.
        self.bits = (combined & mask(remain)) as u8;
        chars
    }

    fn flush(&mut self) -> Symbols {
        let chars = if self.count > 0 {
            let bits = u16::from(self.bits) << (BITS_PER_SYMBOL - self.count);
            symbols([char_for(bits), 0], 1)
        } else {
            symbols([0; 2], 0)
        };
        self.bits = 0;
        self.count = 0;
        self.finalized = true;
        chars
    }

    /// Encodes one byte, pushing zero, one, or two symbols to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if the encoder has been finalized. See [`Self::try_encode`] for
    /// a non-panicking version.
    pub fn encode<S: Sink<u8>>(&mut self, byte: u8, sink: S) {
        if let Err(e) = self.try_encode(byte, sink) {
            panic!("{}", e);
        }
    }

    /// Encodes one byte, or returns [`EncodeError::Finalized`] without
    /// pushing anything if the encoder has been finalized.
    pub fn try_encode<S: Sink<u8>>(
        &mut self,
        byte: u8,
        mut sink: S,
    ) -> EncodeResult<()> {
        if self.finalized {
            return Err(EncodeError::Finalized);
        }
        self.step(byte).for_each(|c| sink.push(c));
        Ok(())
    }

    /// Encodes every byte of `bytes` in order.
    ///
    /// # Panics
    ///
    /// Panics if the encoder has been finalized and `bytes` is not empty.
    pub fn encode_all<I, S>(&mut self, bytes: I, mut sink: S)
    where
        I: IntoIterator<Item = u8>,
        S: Sink<u8>,
    {
        bytes.into_iter().for_each(|b| self.encode(b, &mut sink));
    }

    /// Pushes the final symbol, if any bits are pending, and marks the
    /// encoder as finalized. Calling this again does nothing.
    pub fn finalize<S: Sink<u8>>(&mut self, mut sink: S) {
        self.flush().for_each(|c| sink.push(c));
    }
}

/// An [`Encoder`] bound to a sink that is finalized when dropped.
///
/// ```
/// use clockwork_base32::ScopedEncoder;
///
/// let mut out = Vec::new();
/// {
///     let mut encoder = ScopedEncoder::new(&mut out);
///     encoder.write_all(*b"foo");
///     encoder.write_all(*b"bar");
/// }
/// assert_eq!(out, b"CSQPYRK1E8");
/// ```
pub struct ScopedEncoder<S: Sink<u8>> {
    encoder: Encoder,
    sink: S,
}

impl<S: Sink<u8>> ScopedEncoder<S> {
    /// Creates a new encoder that pushes symbols to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            encoder: Encoder::new(),
            sink,
        }
    }

    /// Encodes one byte.
    pub fn write(&mut self, byte: u8) {
        self.encoder.encode(byte, &mut self.sink);
    }

    /// Encodes every byte of `bytes` in order.
    pub fn write_all<I: IntoIterator<Item = u8>>(&mut self, bytes: I) {
        self.encoder.encode_all(bytes, &mut self.sink);
    }

    /// The number of input bits not yet emitted as a symbol.
    pub fn pending_bits(&self) -> u8 {
        self.encoder.pending_bits()
    }

    /// Finalizes the encoder. Equivalent to dropping it.
    pub fn finish(mut self) {
        self.encoder.finalize(&mut self.sink);
    }
}

impl<S: Sink<u8>> Drop for ScopedEncoder<S> {
    fn drop(&mut self) {
        self.encoder.finalize(&mut self.sink);
    }
}

fn symbols_for(pending: u8, bytes: usize) -> Option<usize> {
    bytes
        .checked_mul(BITS_PER_BYTE.into())?
        .checked_add(usize::from(pending + BITS_PER_SYMBOL - 1))
        .map(|n| n / usize::from(BITS_PER_SYMBOL))
}

struct BytesToUnflatSymbols<I> {
    iter: I,
    encoder: Encoder,
}

impl<I> BytesToUnflatSymbols<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            encoder: Encoder::new(),
        }
    }
}

impl<I: Iterator<Item = u8>> BytesToUnflatSymbols<I> {
    /// Bounds on the number of symbols still to be produced, not counting
    /// any already returned in a [`Symbols`] iterator.
    fn symbols_hint(&self) -> (usize, Option<usize>) {
        if self.encoder.is_finalized() {
            return (0, Some(0));
        }
        let pending = self.encoder.pending_bits();
        let (lower, upper) = self.iter.size_hint();
        (
            symbols_for(pending, lower).unwrap_or(lower),
            upper.and_then(|n| symbols_for(pending, n)),
        )
    }
}

impl<I: Iterator<Item = u8>> Iterator for BytesToUnflatSymbols<I> {
    type Item = Symbols;

    fn next(&mut self) -> Option<Self::Item> {
        if self.encoder.is_finalized() {
            return None;
        }
        Some(match self.iter.next() {
            Some(b) => self.encoder.step(b),
            None => self.encoder.flush(),
        })
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for BytesToUnflatSymbols<I> {}

/// Iterator returned by [`encode_to_bytes`].
///
/// Yields the ASCII characters of the encoded data.
pub struct BytesEncoder<I>(Flatten<BytesToUnflatSymbols<I>, Symbols>);

impl<I> BytesEncoder<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self(Flatten::new(BytesToUnflatSymbols::new(iter)))
    }
}

impl<I> Iterator for BytesEncoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = self.0.inner().map_or(0, |sub| sub.len());
        let (lower, upper) = self.0.outer().symbols_hint();
        (
            lower.saturating_add(current),
            upper.and_then(|n| n.checked_add(current)),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for BytesEncoder<I> {}

/// Iterator returned by [`encode_to_chars`].
pub struct CharEncoder<I>(BytesEncoder<I>);

impl<I> Iterator for CharEncoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(char::from)
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, |b, c| f(b, char::from(c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for CharEncoder<I> {}

/// Encodes `bytes`, pushing every symbol character to `sink`.
pub fn encode_into<I, S>(bytes: I, mut sink: S)
where
    I: IntoIterator<Item = u8>,
    S: Sink<u8>,
{
    let mut encoder = Encoder::new();
    encoder.encode_all(bytes, &mut sink);
    encoder.finalize(sink);
}

/// Encodes `bytes` lazily as a sequence of ASCII characters.
pub fn encode_to_bytes<I>(bytes: I) -> BytesEncoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    BytesEncoder::new(bytes.into_iter())
}

/// Encodes `bytes` lazily as a sequence of [`char`]s.
pub fn encode_to_chars<I>(bytes: I) -> CharEncoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    CharEncoder(encode_to_bytes(bytes))
}

/// Encodes `bytes` into a [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string<I>(bytes: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    encode_to_chars(bytes).collect()
}
