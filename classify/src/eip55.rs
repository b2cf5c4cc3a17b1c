// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use sha3::{Digest, Sha3_256};

/// Re-derive the EIP-55 mixed-case form of a 40-hex-character address body.
///
/// The casing conveys the checksum: a hex letter is upper-cased when the
/// corresponding nibble of `sha3_256(lowercase_body)` is `>= 8`. The
/// input casing is never trusted; the canonical form is always recomputed.
pub(crate) fn checksum_case(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let digest = Sha3_256::digest(lower.as_bytes());
    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
