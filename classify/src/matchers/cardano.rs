// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BYRON_CHECKSUM: Grammar = Grammar::fixed(Alphabet::Base58, 6);
const SHELLEY_BODY: Grammar = Grammar::new(Alphabet::Base32AnyCase, 50, 100);
const SHELLEY_CHECKSUM: Grammar = Grammar::fixed(Alphabet::Base32AnyCase, 6);

/// Byron short (`Ae2`) and long (`DdzFF`) Base58 forms with a 6-character
/// checksum, and the Shelley bech32-style form with an `addr`/`stake`
/// human-readable part, optionally suffixed `_test`.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    byron(token, "Ae2", 50)
        .or_else(|| byron(token, "DdzFF", 65))
        .or_else(|| shelley(token))
}

fn byron(token: &str, prefix: &str, body_len: usize) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let rest = token.strip_prefix(prefix)?;
    if rest.len() != body_len + 6 {
        return None;
    }
    let (body, checksum) = rest.split_at(body_len);
    let body_grammar = Grammar::fixed(Alphabet::Base58, body_len);
    if !body_grammar.matches(body) || !BYRON_CHECKSUM.matches(checksum) {
        return None;
    }
    Some(Parsed::new(
        "Cardano Byron",
        Some(prefix.to_string()),
        body,
        Some(checksum.to_string()),
    ))
}

/// `addr`/`stake` (optionally `_test`) + `1` + 50-100 Base32 characters in
/// either case + a 6-character checksum. Core and suffix are lower-cased.
fn shelley(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let lower = token.to_ascii_lowercase();
    // Longest human-readable part first, so `addr_test1...` is not read as
    // `addr` followed by a `_test1...` body.
    let hrp = ["addr_test1", "stake_test1", "addr1", "stake1"]
        .iter()
        .find(|hrp| lower.starts_with(*hrp))?;
    let rest = &token[hrp.len()..];
    if rest.len() < 56 || rest.len() > 106 {
        return None;
    }
    let (body, checksum) = rest.split_at(rest.len() - 6);
    if !SHELLEY_BODY.matches(body) || !SHELLEY_CHECKSUM.matches(checksum) {
        return None;
    }
    Some(Parsed::new(
        "Cardano Shelley",
        Some(hrp.to_string()),
        body.to_ascii_lowercase(),
        Some(checksum.to_ascii_lowercase()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byron_short() {
        let parsed = parse("Ae2tdPwUPEZ7SZaSCeU8sGZXGZ7YrVc96FnzYdZcLkbry4CqUKax9dNeEoe").unwrap();
        assert_eq!(parsed.label, "Cardano Byron");
        assert_eq!(parsed.prefix.as_deref(), Some("Ae2"));
        assert_eq!(parsed.core.len(), 50);
        assert_eq!(parsed.suffix.as_deref(), Some("dNeEoe"));
    }

    #[test]
    fn byron_long() {
        let parsed = parse(
            "DdzFFzCqrht1D2Tv5F9HLtZHEd4P9Tddf9DFv3d4KXa2RxudcL4uHKWtc2HfiDopch5UHyZkXQx7",
        )
        .unwrap();
        assert_eq!(parsed.label, "Cardano Byron");
        assert_eq!(parsed.prefix.as_deref(), Some("DdzFF"));
        assert_eq!(parsed.core.len(), 65);
    }

    #[test]
    fn shelley() {
        let addr = "addr1q7vggz4gzfn6c6xxp3q4t6gyg3e7azjrdms7hyhfpaam7hrcc2ha2lhxj2htfz7ndxhm6vfcvhx4zkszt2dfpqfy7w7sy72c2d";
        let parsed = parse(addr).unwrap();
        assert_eq!(parsed.label, "Cardano Shelley");
        assert_eq!(parsed.prefix.as_deref(), Some("addr1"));
        assert_eq!(parsed.suffix.as_deref(), Some("y72c2d"));

        let upper = parse(&addr.to_ascii_uppercase()).unwrap();
        assert_eq!(upper.core, parsed.core);
        assert_eq!(upper.prefix.as_deref(), Some("addr1"));
    }

    #[test]
    fn shelley_test_network() {
        let body = "q7vggz4gzfn6c6xxp3q4t6gyg3e7azjrdms7hyhfpaam7hrcc2ha2lhxj2htfz7ndxhm6vfcvhx4zkszt2dfpqfy7w7sy72c2d";
        let parsed = parse(&format!("stake_test1{}", body)).unwrap();
        assert_eq!(parsed.prefix.as_deref(), Some("stake_test1"));
    }

    #[test]
    fn non_matches() {
        assert!(parse("Ae2tdPwUPEZ7SZaSCeU8sGZXGZ7YrVc96FnzYdZcLkbry4CqUKax9dNeEo").is_none());
        assert!(parse("addr1shortbody").is_none());
    }

    #[test]
    fn byron_non_ascii_is_a_non_match() {
        // A multi-byte character placed so the byte length still equals
        // prefix + body + checksum; splitting the body must not land
        // inside it.
        let token = format!("Ae2{}\u{e9}{}", "a".repeat(49), "a".repeat(5));
        assert!(parse(&token).is_none());
    }
}
