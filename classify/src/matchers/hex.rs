// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BODY: Grammar = Grammar::new(Alphabet::Hex, 6, usize::MAX);

/// Generic hex fallback: an even run of at least 6 hex digits, optionally
/// `0x`-prefixed. Must stay last in the dispatch order, since every
/// hex-based format also satisfies this grammar.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    let (prefix, body) = match token.strip_prefix("0x") {
        Some(rest) => (Some("0x".to_string()), rest),
        None => (None, token),
    };
    if body.len() % 2 != 0 || !BODY.matches(body) {
        return None;
    }
    Some(Parsed::new("hex", prefix, body.to_ascii_lowercase(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_prefixed() {
        let bare = parse("deadbeef").unwrap();
        assert_eq!(bare.label, "hex");
        assert_eq!(bare.prefix, None);
        assert_eq!(bare.core, "deadbeef");

        let prefixed = parse("0xDEADBEEF").unwrap();
        assert_eq!(prefixed.prefix.as_deref(), Some("0x"));
        assert_eq!(prefixed.core, "deadbeef");
    }

    #[test]
    fn non_matches() {
        // Too short.
        assert!(parse("dead").is_none());
        // Odd length.
        assert!(parse("deadbee").is_none());
        assert!(parse("deadbeeg").is_none());
        assert!(parse("0x").is_none());
    }
}
