// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Fixed-length CESR derivation code tables.
//!
//! CESR primitives are self-framing: the leading character(s) of a token
//! select both the primitive type and its total encoded length. Three
//! tables cover 1-, 2- and 4-character leading codes; tokens starting with
//! `'0'` use the 2-character table, tokens starting with `'1'` use the
//! 4-character table, everything else uses the 1-character table.
//!
//! Lookup is length-first: a token whose length matches no entry of its
//! table can never be a primitive, even if a code happens to prefix it.

#![deny(missing_docs)]

/// A fixed-length CESR derivation code.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Code {
    /// The leading code characters.
    pub code: &'static str,
    /// Human-readable label of the primitive.
    pub label: &'static str,
    /// Total encoded length, code included.
    pub full_len: usize,
}

const fn code(code: &'static str, label: &'static str, full_len: usize) -> Code {
    Code {
        code,
        label,
        full_len,
    }
}

/// Codes of one leading character.
pub const ONE_CHAR_CODES: &[Code] = &[
    code("A", "CESR Ed25519 seed", 44),
    code("B", "CESR Ed25519 nontransferable pubkey", 44),
    code("C", "CESR X25519 pubkey", 44),
    code("D", "CESR Ed25519 pubkey", 44),
    code("E", "CESR Blake3-256 digest", 44),
    code("F", "CESR Blake2b-256 digest", 44),
    code("G", "CESR Blake2s-256 digest", 44),
    code("H", "CESR SHA3-256 digest", 44),
    code("I", "CESR SHA2-256 digest", 44),
    code("J", "CESR ECDSA secp256k1 seed", 44),
    code("K", "CESR Ed448 seed", 76),
    code("L", "CESR X448 pubkey", 76),
    code("M", "CESR short number", 4),
    code("N", "CESR big number", 12),
    code("O", "CESR X25519 private key", 44),
];

/// Codes of two leading characters (first character `'0'`).
pub const TWO_CHAR_CODES: &[Code] = &[
    code("0A", "CESR 128-bit salt", 24),
    code("0B", "CESR Ed25519 signature", 88),
    code("0C", "CESR ECDSA secp256k1 signature", 88),
    code("0D", "CESR Blake3-512 digest", 88),
    code("0E", "CESR Blake2b-512 digest", 88),
    code("0F", "CESR SHA3-512 digest", 88),
    code("0G", "CESR SHA2-512 digest", 88),
    code("0H", "CESR long number", 8),
];

/// Codes of four leading characters (first character `'1'`).
pub const FOUR_CHAR_CODES: &[Code] = &[
    code("1AAA", "CESR ECDSA secp256k1 nontransferable pubkey", 48),
    code("1AAB", "CESR ECDSA secp256k1 pubkey", 48),
    code("1AAC", "CESR Ed448 nontransferable pubkey", 80),
    code("1AAD", "CESR Ed448 pubkey", 80),
    code("1AAE", "CESR Ed448 signature", 156),
];

/// Select the table responsible for tokens starting with `first`.
pub fn table_for(first: char) -> &'static [Code] {
    match first {
        '0' => TWO_CHAR_CODES,
        '1' => FOUR_CHAR_CODES,
        _ => ONE_CHAR_CODES,
    }
}

/// Find the code entry describing `token`.
///
/// The token length is checked against the selected table before any code
/// comparison, so a token of the wrong size never matches even when its
/// leading characters coincide with a code. Alphabet validation of the
/// payload is left to the caller.
pub fn identify(token: &str) -> Option<&'static Code> {
    let first = token.chars().next()?;
    let table = table_for(first);
    if !table.iter().any(|c| c.full_len == token.len()) {
        return None;
    }
    table
        .iter()
        .find(|c| token.starts_with(c.code) && token.len() == c.full_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_selection() {
        assert_eq!(table_for('0'), TWO_CHAR_CODES);
        assert_eq!(table_for('1'), FOUR_CHAR_CODES);
        assert_eq!(table_for('D'), ONE_CHAR_CODES);
        assert_eq!(table_for('z'), ONE_CHAR_CODES);
    }

    #[test]
    fn identify_by_code_and_length() {
        let token = format!("D{}", "A".repeat(43));
        let entry = identify(&token).unwrap();
        assert_eq!(entry.code, "D");
        assert_eq!(entry.label, "CESR Ed25519 pubkey");

        let token = format!("0B{}", "A".repeat(86));
        assert_eq!(identify(&token).unwrap().label, "CESR Ed25519 signature");

        let token = format!("1AAB{}", "A".repeat(44));
        assert_eq!(
            identify(&token).unwrap().label,
            "CESR ECDSA secp256k1 pubkey"
        );
    }

    #[test]
    fn wrong_length_never_matches() {
        // Correct leading code, one character short.
        let token = format!("D{}", "A".repeat(42));
        assert!(identify(&token).is_none());
        // One character long.
        let token = format!("D{}", "A".repeat(44));
        assert!(identify(&token).is_none());
        // A length that exists in a different table does not help.
        let token = format!("0B{}", "A".repeat(42));
        assert!(identify(&token).is_none());
    }

    #[test]
    fn empty_token() {
        assert!(identify("").is_none());
    }
}
