// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Classification of entropy tokens into structured identifier formats.
//!
//! The engine tries an ordered catalog of format matchers (cryptocurrency
//! addresses, IPFS CIDs, UUIDs, DIDs, SSH public keys, multihash frames,
//! CESR primitives and a generic hex fallback) and returns the first match,
//! decomposed into a format marker (`prefix`), a payload (`core`) and an
//! optional checksum or trailer (`suffix`).
//!
//! Classification is total: malformed input is a non-match, never an error.
//!
//! # Examples
//!
//! ```
//! let parsed = entropy_classify::classify("did:peer:abc123").unwrap();
//! assert_eq!(parsed.label, "DID");
//! assert_eq!(parsed.prefix.as_deref(), Some("did:peer:"));
//! assert_eq!(parsed.core, "abc123");
//!
//! assert!(entropy_classify::classify("notAValidAddress12345").is_none());
//! ```

#![deny(missing_docs)]

mod eip55;
mod grammar;
mod matchers;
mod parsed;
mod registry;

pub use self::grammar::{Alphabet, Grammar};
pub use self::parsed::Parsed;
pub use self::registry::{classify, matchers, Matcher};
