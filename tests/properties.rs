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

use clockwork_base32::{decode_into, decode_to_vec, encode_to_bytes};
use clockwork_base32::{Decoder, Encoder};
use proptest::prelude::*;

fn encode(bytes: &[u8]) -> Vec<u8> {
    encode_to_bytes(bytes.iter().copied()).collect()
}

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Rewrites one symbol character into another spelling of the same value.
fn respell(c: u8, choice: u8) -> u8 {
    match c {
        b'0' => [b'0', b'o', b'O'][usize::from(choice % 3)],
        b'1' => [b'1', b'i', b'I', b'l', b'L'][usize::from(choice % 5)],
        c if choice % 2 == 0 => c.to_ascii_lowercase(),
        c => c,
    }
}

proptest! {
    #[test]
    fn round_trip(input in bytes()) {
        let text = encode(&input);
        prop_assert_eq!(decode_to_vec(text.iter().copied()).unwrap(), input);
    }

    #[test]
    fn output_length(input in bytes()) {
        let text = encode(&input);
        prop_assert_eq!(text.len(), (input.len() * 8 + 4) / 5);
    }

    #[test]
    fn round_trip_with_respelling(
        input in bytes(),
        choices in prop::collection::vec(any::<u8>(), 410),
    ) {
        let text: Vec<u8> = encode(&input)
            .into_iter()
            .zip(choices.iter().cycle())
            .map(|(c, &choice)| respell(c, choice))
            .collect();
        prop_assert_eq!(decode_to_vec(text.iter().copied()).unwrap(), input);
    }

    #[test]
    fn encoding_is_chunk_independent(
        input in bytes(),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut cuts: Vec<usize> =
            cuts.iter().map(|i| i.index(input.len() + 1)).collect();
        cuts.sort_unstable();

        let mut encoder = Encoder::new();
        let mut text = Vec::new();
        let mut start = 0;
        for &cut in cuts.iter().chain(Some(&input.len())) {
            encoder.encode_all(input[start..cut].iter().copied(), &mut text);
            prop_assert!(encoder.pending_bits() < 5);
            start = cut;
        }
        encoder.finalize(&mut text);
        prop_assert_eq!(&text, &encode(&input));
    }

    #[test]
    fn decoding_is_chunk_independent(
        first in bytes(),
        second in bytes(),
        split in any::<prop::sample::Index>(),
    ) {
        let mut encoder = Encoder::new();
        let mut text = Vec::new();
        encoder.encode_all(first.iter().copied(), &mut text);
        encoder.encode_all(second.iter().copied(), &mut text);
        encoder.finalize(&mut text);

        let whole = [first, second].concat();
        prop_assert_eq!(&text, &encode(&whole));

        let split = split.index(text.len() + 1);
        let mut decoder = Decoder::new();
        let mut out = Vec::new();
        decoder.decode_all(text[..split].iter().copied(), &mut out).unwrap();
        prop_assert!(decoder.pending_bits() < 8);
        decoder.decode_all(text[split..].iter().copied(), &mut out).unwrap();
        prop_assert_eq!(out, whole);
    }

    #[test]
    fn decode_fails_at_the_bad_symbol(
        input in prop::collection::vec(any::<u8>(), 1..256),
        position in any::<prop::sample::Index>(),
        bad in prop::sample::select(&b"*~$=Uu \n\x80"[..]),
    ) {
        let text = encode(&input);
        let position = position.index(text.len());
        let mut mutated = text.clone();
        mutated[position] = bad;

        let mut expected = Vec::new();
        decode_into(text[..position].iter().copied(), &mut expected).unwrap();

        let mut out = Vec::new();
        let err =
            decode_into(mutated.iter().copied(), &mut out).unwrap_err();
        prop_assert_eq!(err.index(), position);
        prop_assert_eq!(err.byte(), bad);
        prop_assert_eq!(&out, &expected);
        prop_assert_eq!(&out[..], &input[..out.len()]);
    }
}
