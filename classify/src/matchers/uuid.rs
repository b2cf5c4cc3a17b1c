// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::Alphabet;
use crate::parsed::Parsed;

/// 32 hex digits, optionally grouped 8-4-4-4-12 with hyphens and optionally
/// wrapped in braces. The core is the lower-cased digits with all grouping
/// stripped.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let inner = match token.strip_prefix('{') {
        Some(rest) => rest.strip_suffix('}')?,
        None => token,
    };
    let mut digits = String::with_capacity(32);
    let mut prev_was_hyphen = false;
    for c in inner.chars() {
        if c == '-' {
            // Hyphens only at the canonical group boundaries.
            if prev_was_hyphen || !matches!(digits.len(), 8 | 12 | 16 | 20) {
                return None;
            }
            prev_was_hyphen = true;
        } else if Alphabet::Hex.contains(c) {
            digits.push(c.to_ascii_lowercase());
            prev_was_hyphen = false;
        } else {
            return None;
        }
    }
    if digits.len() != 32 || prev_was_hyphen {
        return None;
    }
    Some(Parsed::new("UUID", None, digits, None))
}
