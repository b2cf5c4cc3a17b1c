// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BODY: Grammar = Grammar::fixed(Alphabet::Base58, 33);

/// Literal prefix `r` followed by 33 Base58 characters.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    let body = token.strip_prefix('r')?;
    if !BODY.matches(body) {
        return None;
    }
    Some(Parsed::new("Ripple", Some("r".to_string()), body, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_address() {
        let parsed = parse("rUocf1ixKzTuEe34kmVhRvGqNCofY1NJzV").unwrap();
        assert_eq!(parsed.label, "Ripple");
        assert_eq!(parsed.prefix.as_deref(), Some("r"));
        assert_eq!(parsed.core, "Uocf1ixKzTuEe34kmVhRvGqNCofY1NJzV");
        assert_eq!(parsed.suffix, None);
    }

    #[test]
    fn non_matches() {
        assert!(parse("RUocf1ixKzTuEe34kmVhRvGqNCofY1NJzV").is_none());
        assert!(parse("rUocf1ixKzTuEe34kmVhRvGqNCofY1NJz").is_none());
    }
}
