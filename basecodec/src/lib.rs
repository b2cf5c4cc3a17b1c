// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Alphabet definitions and binary decode helpers shared by the entropy
//! format matchers.
//!
//! All functions are pure; a decoding failure is reported as a
//! [`BasecodecError`] and carries no state.

#![deny(missing_docs)]

mod alphabet;
mod error;

pub use self::alphabet::{
    is_base32_char, is_base32_char_any_case, is_base58_char, is_base64_char, is_base64url_char,
    is_hex_char, BASE32_ALPHABET, BASE58_ALPHABET, BASE64URL_ALPHABET, BASE64_ALPHABET,
};
pub use self::error::{BasecodecError, Result};

/// Decode a Base58 string using the bitcoin alphabet.
///
/// # Examples
///
/// ```
/// assert_eq!(basecodec::decode_base58("bQbp").unwrap(), b"foo".to_vec());
/// ```
pub fn decode_base58<I: AsRef<[u8]>>(input: I) -> Result<Vec<u8>> {
    Ok(bs58::decode(input)
        .with_alphabet(bs58::alphabet::BITCOIN)
        .into_vec()?)
}

/// Decode an RFC 4648 Base32 string without padding (upper-case alphabet).
///
/// # Examples
///
/// ```
/// assert_eq!(basecodec::decode_base32("MZXW6").unwrap(), b"foo".to_vec());
/// ```
pub fn decode_base32<I: AsRef<[u8]>>(input: I) -> Result<Vec<u8>> {
    Ok(data_encoding::BASE32_NOPAD.decode(input.as_ref())?)
}

/// Decode an RFC 4648 Base32 string without padding, accepting either case.
pub fn decode_base32_any_case(input: &str) -> Result<Vec<u8>> {
    let upper = input.to_ascii_uppercase();
    decode_base32(upper)
}

/// Decode a hex string, accepting either case.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    Ok(data_encoding::HEXLOWER_PERMISSIVE.decode(input.as_bytes())?)
}

/// Encode bytes as lower-case hex.
pub fn encode_hex(input: &[u8]) -> String {
    data_encoding::HEXLOWER.encode(input)
}
