// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::Alphabet;
use crate::parsed::Parsed;

/// Fixed-length CESR primitives. The code tables carry the total encoded
/// length for each code, so the length check runs before the code lookup
/// and a correct code with the wrong length never matches.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    let entry = cesr_codes::identify(token)?;
    let payload = &token[entry.code.len()..];
    if !payload.chars().all(|c| Alphabet::Base64Url.contains(c)) {
        return None;
    }
    Some(Parsed::new(
        entry.label,
        Some(entry.code.to_string()),
        payload,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_char_code() {
        let token = format!("D{}", "z".repeat(43));
        let parsed = parse(&token).unwrap();
        assert_eq!(parsed.label, "CESR Ed25519 pubkey");
        assert_eq!(parsed.prefix.as_deref(), Some("D"));
        assert_eq!(parsed.core.len(), 43);
    }

    #[test]
    fn two_char_code() {
        let token = format!("0A{}", "_-".repeat(11));
        let parsed = parse(&token).unwrap();
        assert_eq!(parsed.prefix.as_deref(), Some("0A"));
    }

    #[test]
    fn wrong_length_never_matches() {
        assert!(parse(&format!("D{}", "z".repeat(42))).is_none());
        assert!(parse(&format!("D{}", "z".repeat(44))).is_none());
    }

    #[test]
    fn payload_must_be_url_safe_base64() {
        assert!(parse(&format!("D{}+", "z".repeat(42))).is_none());
    }
}
