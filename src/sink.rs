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

//! Destinations for encoder and decoder output.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An append-only destination owned by the caller.
///
/// [`Encoder`](crate::Encoder) pushes symbol characters into a
/// `Sink<u8>`; [`Decoder`](crate::Decoder) pushes decoded bytes.
pub trait Sink<T> {
    /// Appends `item`.
    fn push(&mut self, item: T);
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    fn push(&mut self, item: T) {
        (**self).push(item);
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
impl<T> Sink<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

/// Sink returned by [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

impl<T, F: FnMut(T)> Sink<T> for FromFn<F> {
    fn push(&mut self, item: T) {
        (self.0)(item);
    }
}

/// Creates a sink that calls `f` with each item.
///
/// ```
/// use clockwork_base32::{encode_into, sink};
///
/// let mut len = 0;
/// encode_into(*b"foobar", sink::from_fn(|_: u8| len += 1));
/// assert_eq!(len, 10);
/// ```
pub fn from_fn<T, F: FnMut(T)>(f: F) -> FromFn<F> {
    FromFn(f)
}
