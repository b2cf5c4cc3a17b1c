// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

/// Type alias to use this library's [`MultihashTableError`].
pub type Result<T> = std::result::Result<T, MultihashTableError>;

/// Error types
#[derive(Error, Debug)]
pub enum MultihashTableError {
    /// The frame is shorter than the 2-byte header.
    #[error("multihash frame too short: {0} bytes")]
    TooShort(usize),
    /// The function code is not in the table.
    #[error("unknown multihash code: {0:#x}")]
    UnknownCode(u64),
    /// The declared digest length disagrees with the remaining byte count.
    #[error("declared digest length {declared} does not match actual length {actual}")]
    LengthMismatch {
        /// Length announced in the frame header.
        declared: usize,
        /// Byte count actually present after the header.
        actual: usize,
    },
}
