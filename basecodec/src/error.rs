// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

/// Type alias to use this library's [`BasecodecError`].
pub type Result<T> = std::result::Result<T, BasecodecError>;

/// Error types
#[derive(Error, Debug)]
pub enum BasecodecError {
    /// Invalid Base58 string.
    #[error("invalid base58 string: {0}")]
    Base58(#[from] bs58::decode::Error),
    /// Invalid string for the selected RFC 4648 encoding.
    #[error("invalid base string: {0}")]
    Decode(#[from] data_encoding::DecodeError),
}
