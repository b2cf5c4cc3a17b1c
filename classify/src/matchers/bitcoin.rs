// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const LEGACY_BODY: Grammar = Grammar::new(Alphabet::Base58, 21, 30);
const LEGACY_CHECKSUM: Grammar = Grammar::fixed(Alphabet::Base58, 4);
const SEGWIT_BODY: Grammar = Grammar::new(Alphabet::Base32AnyCase, 39, 69);

/// Bitcoin addresses: legacy Base58Check and SegWit (bech32-style).
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    legacy(token).or_else(|| segwit(token))
}

/// A 1-character version symbol from `{1,2,3,m,n}`, a 21-30 character
/// Base58 body and a 4-character Base58 checksum suffix.
fn legacy(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let mut chars = token.chars();
    let version = chars.next()?;
    if !matches!(version, '1' | '2' | '3' | 'm' | 'n') {
        return None;
    }
    let rest = chars.as_str();
    if rest.len() < 25 {
        return None;
    }
    let (body, checksum) = rest.split_at(rest.len() - 4);
    if !LEGACY_BODY.matches(body) || !LEGACY_CHECKSUM.matches(checksum) {
        return None;
    }
    Some(Parsed::new(
        "Bitcoin legacy",
        Some(token[..1].to_string()),
        body,
        Some(checksum.to_string()),
    ))
}

/// `bc1` or `tb1` followed by 39-69 Base32 characters in either case.
/// The result prefix and core are lower-cased.
fn segwit(token: &str) -> Option<Parsed> {
    if !token.is_ascii() || token.len() < 4 {
        return None;
    }
    let (hrp, body) = token.split_at(3);
    if !hrp.eq_ignore_ascii_case("bc1") && !hrp.eq_ignore_ascii_case("tb1") {
        return None;
    }
    if !SEGWIT_BODY.matches(body) {
        return None;
    }
    Some(Parsed::new(
        "Bitcoin SegWit",
        Some(hrp.to_ascii_lowercase()),
        body.to_ascii_lowercase(),
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_addresses() {
        for addr in &[
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2",
            "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
            "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn",
            "nipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn",
        ] {
            let parsed = parse(addr).expect(addr);
            assert_eq!(parsed.label, "Bitcoin legacy");
            assert_eq!(parsed.prefix.as_deref(), Some(&addr[..1]));
            assert_eq!(parsed.suffix.as_deref(), Some(&addr[addr.len() - 4..]));
        }
    }

    #[test]
    fn segwit_addresses() {
        let parsed = parse("bc1qrp33g2q55j75r5psq4zhdjfx5u27q2sqjycr2xnwatqpzrqj").unwrap();
        assert_eq!(parsed.label, "Bitcoin SegWit");
        assert_eq!(parsed.prefix.as_deref(), Some("bc1"));

        let upper = parse("BC1QRP33G2Q55J75R5PSQ4ZHDJFX5U27Q2SQJYCR2XNWATQPZRQJ").unwrap();
        assert_eq!(upper.prefix.as_deref(), Some("bc1"));
        assert_eq!(upper.core, parsed.core);
    }

    #[test]
    fn non_matches() {
        assert!(parse("4A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").is_none());
        assert!(parse("1A1zP1eP").is_none());
        // '0' is outside the Base58 alphabet.
        assert!(parse("10ated00000000000000000000000aaaaa").is_none());
    }
}
