// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

/// The decomposed, normalized result of a successful classification.
///
/// A fresh value is produced per call and never mutated afterwards.
/// Concatenating `prefix + core + suffix` reproduces the structurally
/// meaningful portion of the input, modulo the per-format case
/// normalization documented on each matcher.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Parsed {
    /// Human-readable format label, e.g. `"Bitcoin legacy"`. Never empty.
    pub label: String,
    /// Format marker preceding the payload, when the format has one.
    pub prefix: Option<String>,
    /// The payload.
    pub core: String,
    /// Checksum or trailer following the payload, when the format has one.
    pub suffix: Option<String>,
}

impl Parsed {
    /// Create a new `Parsed` result.
    pub fn new<L, C>(label: L, prefix: Option<String>, core: C, suffix: Option<String>) -> Parsed
    where
        L: Into<String>,
        C: Into<String>,
    {
        Parsed {
            label: label.into(),
            prefix,
            core: core.into(),
            suffix,
        }
    }
}
