// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use basecodec::{
    is_base32_char, is_base32_char_any_case, is_base58_char, is_base64_char, is_base64url_char,
    is_hex_char,
};

/// Character sets used by the format grammars.
///
/// Case rules are part of the alphabet, not of the matcher code, so two
/// formats sharing an encoding but disagreeing on case cannot silently
/// diverge.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Alphabet {
    /// Base58, bitcoin variant. Case significant.
    Base58,
    /// RFC 4648 Base32, upper case only.
    Base32,
    /// RFC 4648 Base32 in either case.
    Base32AnyCase,
    /// Hex digits in either case.
    Hex,
    /// RFC 4648 Base64 (`+` and `/`), padding excluded.
    Base64,
    /// URL-safe Base64 (`-` and `_`), no padding.
    Base64Url,
    /// EOS account-name characters: `a-z`, `1-5` and `.`.
    EosName,
}

impl Alphabet {
    /// Whether `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            Alphabet::Base58 => is_base58_char(c),
            Alphabet::Base32 => is_base32_char(c),
            Alphabet::Base32AnyCase => is_base32_char_any_case(c),
            Alphabet::Hex => is_hex_char(c),
            Alphabet::Base64 => is_base64_char(c),
            Alphabet::Base64Url => is_base64url_char(c),
            Alphabet::EosName => matches!(c, 'a'..='z' | '1'..='5' | '.'),
        }
    }
}

/// A format grammar: an alphabet plus an inclusive length range.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Grammar {
    /// Character set of the grammar.
    pub alphabet: Alphabet,
    /// Minimum accepted length.
    pub min: usize,
    /// Maximum accepted length.
    pub max: usize,
}

impl Grammar {
    /// A grammar accepting lengths in `min..=max`.
    pub const fn new(alphabet: Alphabet, min: usize, max: usize) -> Grammar {
        Grammar { alphabet, min, max }
    }

    /// A grammar accepting exactly `len` characters.
    pub const fn fixed(alphabet: Alphabet, len: usize) -> Grammar {
        Grammar::new(alphabet, len, len)
    }

    /// Whether `s` is drawn from the alphabet and within the length range.
    ///
    /// All alphabets are ASCII, so byte length and character count agree
    /// for any string that passes the membership check.
    pub fn matches(&self, s: &str) -> bool {
        s.len() >= self.min
            && s.len() <= self.max
            && s.chars().all(|c| self.alphabet.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        let g = Grammar::new(Alphabet::Base58, 2, 4);
        assert!(!g.matches("a"));
        assert!(g.matches("ab"));
        assert!(g.matches("abcd"));
        assert!(!g.matches("abcde"));
    }

    #[test]
    fn alphabet_membership() {
        let g = Grammar::fixed(Alphabet::Base58, 4);
        assert!(g.matches("abcd"));
        assert!(!g.matches("ab0d"));

        let hex = Grammar::new(Alphabet::Hex, 1, 8);
        assert!(hex.matches("DeadBeef"));
        assert!(!hex.matches("xyz"));
    }

    #[test]
    fn non_ascii_never_matches() {
        let g = Grammar::new(Alphabet::Base32AnyCase, 1, 64);
        assert!(!g.matches("abcé"));
    }

    #[test]
    fn eos_alphabet() {
        let g = Grammar::new(Alphabet::EosName, 1, 12);
        assert!(g.matches("eosio.token"));
        assert!(!g.matches("eosio6"));
        assert!(!g.matches("Eosio"));
    }
}
