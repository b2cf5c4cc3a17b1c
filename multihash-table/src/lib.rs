// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! The fixed mapping from multihash function codes to hash-algorithm names,
//! plus strict decoding of multihash-framed byte sequences.
//!
//! A multihash frame is self-describing: a 1-byte function code, a 1-byte
//! declared digest length, then exactly that many digest bytes. No
//! truncation or padding is tolerated.

#![deny(missing_docs)]

use std::fmt;

mod error;

pub use self::error::{MultihashTableError, Result};

macro_rules! build_hash_enum {
    {$( $code:expr => $algo:ident, $name:expr, )*} => {
        /// Hash algorithms assigned a code in the multihash registry.
        #[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
        pub enum HashAlgo {
            $(
                #[doc = $name]
                $algo,
            )*
        }

        impl HashAlgo {
            /// Get the registry code of the algorithm.
            pub fn code(&self) -> u64 {
                match self {
                    $( Self::$algo => $code, )*
                }
            }

            /// Convert a code to the matching algorithm, or `Error` if no
            /// algorithm is matching.
            pub fn from_code(raw: u64) -> Result<Self> {
                match raw {
                    $( $code => Ok(Self::$algo), )*
                    _ => Err(MultihashTableError::UnknownCode(raw)),
                }
            }

            /// The registry name of the algorithm, e.g. `"sha2-256"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$algo => $name, )*
                }
            }
        }
    }
}

build_hash_enum! {
    0x11 => Sha1, "sha1",
    0x12 => Sha2_256, "sha2-256",
    0x13 => Sha2_512, "sha2-512",
    0x14 => Sha3_224, "sha3-224",
    0x15 => Sha3_256, "sha3-256",
    0x16 => Sha3_384, "sha3-384",
    0x17 => Sha3_512, "sha3-512",
    0x18 => Shake128, "shake-128",
    0x19 => Shake256, "shake-256",
    0x1a => Keccak224, "keccak-224",
    0x1b => Keccak256, "keccak-256",
    0x1c => Keccak384, "keccak-384",
    0x1d => Keccak512, "keccak-512",
    0x22 => Blake2b8, "blake2b-8",
    0x23 => Blake2b16, "blake2b-16",
    0x24 => Blake2b24, "blake2b-24",
    0x25 => Blake2b32, "blake2b-32",
    0x26 => Blake2b40, "blake2b-40",
    0x27 => Blake2b48, "blake2b-48",
    0x28 => Blake2b56, "blake2b-56",
    0x29 => Blake2b64, "blake2b-64",
    0x2a => Blake2b72, "blake2b-72",
    0x2b => Blake2b80, "blake2b-80",
    0x2c => Blake2b88, "blake2b-88",
    0x2d => Blake2b96, "blake2b-96",
    0x2e => Blake2b104, "blake2b-104",
    0x2f => Blake2b112, "blake2b-112",
    0x30 => Blake2b120, "blake2b-120",
    0x31 => Blake2b128, "blake2b-128",
    0x32 => Blake2b136, "blake2b-136",
    0x33 => Blake2b144, "blake2b-144",
    0x34 => Blake2b152, "blake2b-152",
    0x35 => Blake2b160, "blake2b-160",
    0x36 => Blake2b168, "blake2b-168",
    0x37 => Blake2b176, "blake2b-176",
    0x38 => Blake2b184, "blake2b-184",
    0x39 => Blake2b192, "blake2b-192",
    0x3a => Blake2b200, "blake2b-200",
    0x3b => Blake2b208, "blake2b-208",
    0x3c => Blake2b216, "blake2b-216",
    0x3d => Blake2b224, "blake2b-224",
    0x3e => Blake2b232, "blake2b-232",
    0x3f => Blake2b240, "blake2b-240",
    0x40 => Blake2b248, "blake2b-248",
    0x41 => Blake2b256, "blake2b-256",
    0xb201 => DblSha2_256, "dbl-sha2-256",
    0xb202 => Murmur3_128, "murmur3-128",
    0xb203 => Murmur3_32, "murmur3-32",
}

impl fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split a multihash frame into its algorithm and digest.
///
/// The function code must be a known single-byte code and the byte count
/// after the 2-byte header must equal the declared length exactly.
///
/// # Examples
///
/// ```
/// use multihash_table::{decode, HashAlgo};
///
/// let mut frame = vec![0x12, 0x20];
/// frame.extend_from_slice(&[0u8; 32]);
/// let (algo, digest) = decode(&frame).unwrap();
/// assert_eq!(algo, HashAlgo::Sha2_256);
/// assert_eq!(digest.len(), 32);
/// ```
pub fn decode(bytes: &[u8]) -> Result<(HashAlgo, &[u8])> {
    if bytes.len() < 2 {
        return Err(MultihashTableError::TooShort(bytes.len()));
    }
    let algo = HashAlgo::from_code(u64::from(bytes[0]))?;
    let declared = bytes[1] as usize;
    let digest = &bytes[2..];
    if digest.len() != declared {
        return Err(MultihashTableError::LengthMismatch {
            declared,
            actual: digest.len(),
        });
    }
    Ok((algo, digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha2_256_frame() -> Vec<u8> {
        let mut frame = vec![0x12, 0x20];
        frame.extend_from_slice(&[0xab; 32]);
        frame
    }

    #[test]
    fn decode_sha2_256() {
        let frame = sha2_256_frame();
        let (algo, digest) = decode(&frame).unwrap();
        assert_eq!(algo, HashAlgo::Sha2_256);
        assert_eq!(algo.name(), "sha2-256");
        assert_eq!(digest, &[0xab; 32][..]);
    }

    #[test]
    fn reject_truncated_digest() {
        let mut frame = sha2_256_frame();
        frame.pop();
        match decode(&frame) {
            Err(MultihashTableError::LengthMismatch { declared, actual }) => {
                assert_eq!((declared, actual), (32, 31));
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn reject_padded_digest() {
        let mut frame = sha2_256_frame();
        frame.push(0);
        assert!(decode(&frame).is_err());
    }

    #[test]
    fn reject_unknown_code() {
        assert!(decode(&[0xff, 0x01, 0x00]).is_err());
        assert!(HashAlgo::from_code(0x10).is_err());
    }

    #[test]
    fn reject_short_frame() {
        assert!(decode(&[]).is_err());
        assert!(decode(&[0x12]).is_err());
    }

    #[test]
    fn code_round_trip() {
        for algo in &[HashAlgo::Sha1, HashAlgo::Blake2b256, HashAlgo::DblSha2_256] {
            assert_eq!(HashAlgo::from_code(algo.code()).unwrap(), *algo);
        }
    }
}
