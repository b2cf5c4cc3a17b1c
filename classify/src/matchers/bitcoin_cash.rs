// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::{Alphabet, Grammar};
use crate::parsed::Parsed;

const BODY: Grammar = Grammar::fixed(Alphabet::Base32AnyCase, 41);

/// Optional `bitcoincash:` or `bchtest:` URI scheme (case-insensitive),
/// then a leading `p` or `q` and 41 Base32 characters. The scheme is
/// reported lower-cased and is absent from the result when the caller
/// omitted it.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let (scheme, rest) = match token.find(':') {
        Some(pos) => {
            let (scheme, rest) = token.split_at(pos + 1);
            (Some(scheme), rest)
        }
        None => (None, token),
    };
    if let Some(scheme) = scheme {
        let lower = scheme.to_ascii_lowercase();
        if lower != "bitcoincash:" && lower != "bchtest:" {
            return None;
        }
    }
    let mut chars = rest.chars();
    let lead = chars.next()?;
    if lead != 'p' && lead != 'q' {
        return None;
    }
    if !BODY.matches(chars.as_str()) {
        return None;
    }
    Some(Parsed::new(
        "Bitcoin Cash",
        scheme.map(|s| s.to_ascii_lowercase()),
        rest,
        None,
    ))
}
