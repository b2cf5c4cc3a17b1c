// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Logger setup for the binary.

/// Initialize the global logger from the `RUST_LOG` environment variable.
pub fn init() {
    use env_logger::Builder;

    let mut builder = Builder::new();
    builder.parse_env("RUST_LOG");

    builder.init()
}
