// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const LEGACY_BODY: Grammar = Grammar::fixed(Alphabet::Base58, 33);
const LTC_BODY: Grammar = Grammar::new(Alphabet::Base58, 42, 62);

/// Legacy form `t?L` + 33 Base58 characters, alternate form `ltc` +
/// 42-62 Base58 characters.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    legacy(token).or_else(|| ltc(token))
}

fn legacy(token: &str) -> Option<Parsed> {
    let (prefix, body) = if let Some(rest) = token.strip_prefix("tL") {
        ("tL", rest)
    } else if let Some(rest) = token.strip_prefix('L') {
        ("L", rest)
    } else {
        return None;
    };
    if !LEGACY_BODY.matches(body) {
        return None;
    }
    Some(Parsed::new(
        "Litecoin legacy",
        Some(prefix.to_string()),
        body,
        None,
    ))
}

fn ltc(token: &str) -> Option<Parsed> {
    let body = token.strip_prefix("ltc")?;
    if !LTC_BODY.matches(body) {
        return None;
    }
    Some(Parsed::new("Litecoin", Some("ltc".to_string()), body, None))
}
