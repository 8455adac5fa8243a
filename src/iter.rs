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

use core::iter::FusedIterator;

/// Like [`core::iter::Flatten`], but the outer iterator and the current
/// inner iterator can be inspected (for size hints).
pub struct Flatten<I, Sub> {
    iter: I,
    sub: Option<Sub>,
}

impl<I, Sub> Flatten<I, Sub> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            sub: None,
        }
    }

    pub fn outer(&self) -> &I {
        &self.iter
    }

    pub fn inner(&self) -> Option<&Sub> {
        self.sub.as_ref()
    }
}

impl<I, Sub: Iterator> Iterator for Flatten<I, Sub>
where
    I: Iterator<Item = Sub>,
{
    type Item = Sub::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sub) = &mut self.sub {
            if let Some(item) = sub.next() {
                return Some(item);
            }
        }
        for mut sub in &mut self.iter {
            if let Some(item) = sub.next() {
                self.sub = Some(sub);
                return Some(item);
            }
        }
        self.sub = None;
        None
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let init = match self.sub {
            Some(sub) => sub.fold(init, &mut f),
            None => init,
        };
        self.iter.fold(init, |b, item| item.fold(b, &mut f))
    }
}

impl<I, Sub: Iterator> FusedIterator for Flatten<I, Sub> where
    I: FusedIterator<Item = Sub>
{
}

#[cfg(test)]
mod tests {
    use super::Flatten;

    #[test]
    fn fold_includes_partially_consumed_inner() {
        let data: [&[u32]; 3] = [&[1, 2, 3], &[], &[4]];
        let mut iter = Flatten::new(data.iter().map(|s| s.iter().copied()));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.inner().map(|s| s.len()), Some(2));
        assert_eq!(iter.fold(0, |sum, n| sum + n), 2 + 3 + 4);
    }
}
