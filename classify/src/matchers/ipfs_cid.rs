// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::io::Cursor;

use integer_encoding::VarIntReader;

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;
use multihash_table::HashAlgo;

const V0_BODY: Grammar = Grammar::fixed(Alphabet::Base58, 44);
const V1_BODY: Grammar = Grammar::new(Alphabet::Base32AnyCase, 58, 112);

/// CIDv0 is `Qm` + 44 Base58 characters whose decoding must be a sha2-256
/// multihash. CIDv1 is the multibase marker `b` + a Base32 body carrying
/// `<version 1><codec><multihash>`, labelled with the digest algorithm.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    v0(token).or_else(|| v1(token))
}

fn v0(token: &str) -> Option<Parsed> {
    let body = token.strip_prefix("Qm")?;
    if !V0_BODY.matches(body) {
        return None;
    }
    let bytes = basecodec::decode_base58(token).ok()?;
    let (algo, digest) = multihash_table::decode(&bytes).ok()?;
    if algo != HashAlgo::Sha2_256 || digest.len() != 32 {
        return None;
    }
    Some(Parsed::new(
        "IPFS CID v0 (sha2-256)",
        Some("Qm".to_string()),
        body,
        None,
    ))
}

fn v1(token: &str) -> Option<Parsed> {
    let body = token.strip_prefix('b')?;
    if !V1_BODY.matches(body) {
        return None;
    }
    let bytes = basecodec::decode_base32_any_case(body).ok()?;
    let algo = read_cid_header(&bytes)?;
    Some(Parsed::new(
        format!("IPFS CID v1 ({})", algo.name()),
        Some("b".to_string()),
        body.to_ascii_lowercase(),
        None,
    ))
}

/// Walks `<version varint><codec varint><hash code varint><length varint>`
/// and checks the digest fills the rest of the buffer exactly.
fn read_cid_header(bytes: &[u8]) -> Option<HashAlgo> {
    let mut cursor = Cursor::new(bytes);
    let version = cursor.read_varint::<u8>().ok()?;
    if version != 1 {
        return None;
    }
    let _codec = cursor.read_varint::<u64>().ok()?;
    let code = cursor.read_varint::<u64>().ok()?;
    let algo = HashAlgo::from_code(code).ok()?;
    let declared = cursor.read_varint::<u64>().ok()?;
    let remaining = bytes.len() as u64 - cursor.position();
    if remaining != declared {
        return None;
    }
    Some(algo)
}
