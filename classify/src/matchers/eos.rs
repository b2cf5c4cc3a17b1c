// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::parsed::Parsed;

/// EOS account names: 1-12 characters from `a-z`, `1-5` and `.`, and the
/// name may not end with `.`.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    if token.is_empty() || token.len() > 12 {
        return None;
    }
    if !token
        .bytes()
        .all(|b| matches!(b, b'a'..=b'z' | b'1'..=b'5' | b'.'))
    {
        return None;
    }
    if token.ends_with('.') {
        return None;
    }
    Some(Parsed::new("EOS", None, token, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_names() {
        let parsed = parse("eosio.token").unwrap();
        assert_eq!(parsed.label, "EOS");
        assert_eq!(parsed.prefix, None);
        assert_eq!(parsed.core, "eosio.token");
        assert!(parse("a").is_some());
        assert!(parse("account12345").is_some());
    }

    #[test]
    fn non_matches() {
        assert!(parse("").is_none());
        assert!(parse("toolongaccount").is_none());
        assert!(parse("Eosio.token").is_none());
        assert!(parse("eosio6").is_none());
        assert!(parse("eosio.").is_none());
    }
}
