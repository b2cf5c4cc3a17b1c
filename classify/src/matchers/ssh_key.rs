// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::grammar::Alphabet;
use crate::parsed::Parsed;

/// SSH public key blobs start with the `AAAA` length marker of the wire
/// format. This is a substring search rather than an anchored match: key
/// lines carry an algorithm name before the blob, which is reported as
/// the prefix.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let mut start = 0;
    while let Some(found) = token[start..].find("AAAA") {
        let begin = start + found;
        let bytes = token.as_bytes();
        let mut end = begin;
        while end < bytes.len() && Alphabet::Base64.contains(bytes[end] as char) {
            end += 1;
        }
        // The marker alone is not a blob.
        if end - begin > 4 {
            let mut pad = 0;
            while pad < 3 && end + pad < bytes.len() && bytes[end + pad] == b'=' {
                pad += 1;
            }
            end += pad;
            let prefix = &token[..begin];
            let suffix = &token[end..];
            return Some(Parsed::new(
                "SSH public key",
                (!prefix.is_empty()).then(|| prefix.to_string()),
                &token[begin..end],
                (!suffix.is_empty()).then(|| suffix.to_string()),
            ));
        }
        start = begin + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = "AAAAC3NzaC1lZDI1NTE5AAAAIKzs6Zk0D8ZiHCajJqBrmB4zp9VtB0jBY8GIs0lR7kYc";

    #[test]
    fn bare_blob() {
        let parsed = parse(BLOB).unwrap();
        assert_eq!(parsed.label, "SSH public key");
        assert_eq!(parsed.prefix, None);
        assert_eq!(parsed.core, BLOB);
        assert_eq!(parsed.suffix, None);
    }

    #[test]
    fn authorized_keys_line() {
        let line = format!("ssh-ed25519 {} user@host", BLOB);
        let parsed = parse(&line).unwrap();
        assert_eq!(parsed.prefix.as_deref(), Some("ssh-ed25519 "));
        assert_eq!(parsed.core, BLOB);
        assert_eq!(parsed.suffix.as_deref(), Some(" user@host"));
    }

    #[test]
    fn padding_is_kept_with_the_blob() {
        let parsed = parse("AAAAB3Nza==").unwrap();
        assert_eq!(parsed.core, "AAAAB3Nza==");
    }

    #[test]
    fn non_matches() {
        assert!(parse("AAAA").is_none());
        assert!(parse("AAA_B3Nza").is_none());
        assert!(parse("no marker here").is_none());
    }
}
