// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::eip55;
use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BODY: Grammar = Grammar::fixed(Alphabet::Hex, 40);

/// 40 hex characters, optionally preceded by `0x`. The body is re-encoded
/// through the EIP-55 checksum regardless of its input casing, then split
/// into a 32-character core and an 8-character checksum suffix. The result
/// prefix is always `"0x"`.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    let body = token.strip_prefix("0x").unwrap_or(token);
    if !BODY.matches(body) {
        return None;
    }
    let cased = eip55::checksum_case(body);
    let (core, suffix) = cased.split_at(32);
    Some(Parsed::new(
        "Ethereum",
        Some("0x".to_string()),
        core,
        Some(suffix.to_string()),
    ))
}
