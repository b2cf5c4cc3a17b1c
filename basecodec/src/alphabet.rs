// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

/// Base58 alphabet (bitcoin variant, case significant).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// RFC 4648 Base32 alphabet, upper case, no padding.
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// RFC 4648 Base64 alphabet (`+` and `/`).
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe Base64 alphabet (`-` and `_`), no padding.
pub const BASE64URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Whether `c` belongs to the Base58 (bitcoin) alphabet.
pub fn is_base58_char(c: char) -> bool {
    c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
}

/// Whether `c` belongs to the upper-case RFC 4648 Base32 alphabet.
pub fn is_base32_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | '2'..='7')
}

/// Whether `c` belongs to the RFC 4648 Base32 alphabet in either case.
pub fn is_base32_char_any_case(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '2'..='7')
}

/// Whether `c` is a hex digit in either case.
pub fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Whether `c` belongs to the RFC 4648 Base64 alphabet (padding excluded).
pub fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

/// Whether `c` belongs to the URL-safe Base64 alphabet (padding excluded).
pub fn is_base64url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
