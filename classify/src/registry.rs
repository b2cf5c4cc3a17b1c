// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use lazy_static::lazy_static;
use log::trace;

use crate::matchers::{
    bitcoin, bitcoin_cash, cardano, cesr, did, eos, ethereum, hex, ipfs_cid, litecoin, multihash,
    ripple, ssh_key, stellar, uuid,
};
use crate::parsed::Parsed;

pub(crate) const LOG_TARGET: &str = "classify";

/// A named matcher entry in the dispatch order.
pub struct Matcher {
    /// Short name identifying the format family.
    pub name: &'static str,
    func: fn(&str) -> Option<Parsed>,
}

impl Matcher {
    /// Attempt to recognize `token` as this matcher's format.
    pub fn run(&self, token: &str) -> Option<Parsed> {
        (self.func)(token)
    }
}

fn entry(name: &'static str, func: fn(&str) -> Option<Parsed>) -> Matcher {
    Matcher { name, func }
}

lazy_static! {
    /// The format catalog in priority order. The first success wins.
    ///
    /// Ordering invariants:
    /// - the generic hex fallback stays last: any pure-hex token satisfies
    ///   its grammar, so an earlier position would shadow every more
    ///   specific hex-based format (Ethereum, UUID, hex multihash);
    /// - UUID runs before the multihash matchers, so a bare 32-digit hex
    ///   UUID is not claimed as a hex multihash frame;
    /// - CESR runs before the SSH key matcher, because four-character CESR
    ///   codes can contain the `AAAA` marker the SSH search looks for.
    static ref MATCHERS: Vec<Matcher> = vec![
        entry("bitcoin", bitcoin::parse),
        entry("ethereum", ethereum::parse),
        entry("ripple", ripple::parse),
        entry("litecoin", litecoin::parse),
        entry("bitcoin-cash", bitcoin_cash::parse),
        entry("cardano", cardano::parse),
        entry("stellar", stellar::parse),
        entry("ipfs-cid", ipfs_cid::parse),
        entry("uuid", uuid::parse),
        entry("did", did::parse),
        entry("cesr", cesr::parse),
        entry("ssh-pubkey", ssh_key::parse),
        entry("eos", eos::parse),
        entry("multihash", multihash::parse_raw),
        entry("hex-multihash", multihash::parse_hex),
        entry("hex", hex::parse),
    ];
}

/// Classify `token` against the format catalog.
///
/// Matchers are evaluated in priority order and the first success is
/// returned; there is no "best match". The empty string and any token
/// matching no grammar yield `None`, which is a normal outcome.
pub fn classify(token: &str) -> Option<Parsed> {
    if token.is_empty() {
        return None;
    }
    for matcher in MATCHERS.iter() {
        if let Some(parsed) = matcher.run(token) {
            trace!(
                target: LOG_TARGET,
                "token matched {}: {}",
                matcher.name,
                parsed.label
            );
            return Some(parsed);
        }
    }
    trace!(target: LOG_TARGET, "token matched no format");
    None
}

/// The matcher catalog in dispatch order, for read-only enumeration.
pub fn matchers() -> &'static [Matcher] {
    &MATCHERS
}
