// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! One matcher module per format family.
//!
//! Every matcher is a pure function `&str -> Option<Parsed>`. A grammar or
//! validation failure is a non-match, never an error.

pub(crate) mod bitcoin;
pub(crate) mod bitcoin_cash;
pub(crate) mod cardano;
pub(crate) mod cesr;
pub(crate) mod did;
pub(crate) mod eos;
pub(crate) mod ethereum;
pub(crate) mod hex;
pub(crate) mod ipfs_cid;
pub(crate) mod litecoin;
pub(crate) mod multihash;
pub(crate) mod ripple;
pub(crate) mod ssh_key;
pub(crate) mod stellar;
pub(crate) mod uuid;
