// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BODY: Grammar = Grammar::fixed(Alphabet::Base32AnyCase, 55);

/// Literal prefix `G` (case-insensitive) + 55 Base32 characters in either
/// case. The result is normalized to upper case.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    let mut chars = token.chars();
    let lead = chars.next()?;
    if lead != 'G' && lead != 'g' {
        return None;
    }
    let body = chars.as_str();
    if !BODY.matches(body) {
        return None;
    }
    Some(Parsed::new(
        "Stellar",
        Some("G".to_string()),
        body.to_ascii_uppercase(),
        None,
    ))
}
