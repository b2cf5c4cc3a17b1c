// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const HEX_BODY: Grammar = Grammar::new(Alphabet::Hex, 6, usize::MAX);

/// A raw multihash frame carried verbatim in the token bytes: 1-byte
/// function code, 1-byte declared length, then exactly that many digest
/// bytes.
pub(crate) fn parse_raw(token: &str) -> Option<Parsed> {
    let (algo, _) = multihash_table::decode(token.as_bytes()).ok()?;
    // The 2-byte header must also be a char boundary to split the text.
    if !token.is_char_boundary(2) {
        return None;
    }
    let (header, digest) = token.split_at(2);
    Some(Parsed::new(
        format!("multihash {}", algo.name()),
        Some(header.to_string()),
        digest,
        None,
    ))
}

/// The same frame hex-encoded: an even-length pure-hex token of at least
/// 6 characters whose decoding validates as a multihash. Header and digest
/// are reported as lower-case hex.
pub(crate) fn parse_hex(token: &str) -> Option<Parsed> {
    if token.len() % 2 != 0 || !HEX_BODY.matches(token) {
        return None;
    }
    let bytes = basecodec::decode_hex(token).ok()?;
    let (algo, digest) = multihash_table::decode(&bytes).ok()?;
    Some(Parsed::new(
        format!("hex multihash {}", algo.name()),
        Some(basecodec::encode_hex(&bytes[..2])),
        basecodec::encode_hex(digest),
        None,
    ))
}
