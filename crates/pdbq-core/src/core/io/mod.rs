//! Input functionality for fixed-column structure files.
//!
//! The only supported format is PDB ([`pdb::PdbFile`]); the trait in
//! [`traits`] keeps the reading surface format-agnostic.

pub mod pdb;
pub mod traits;

use serde::Deserialize;

/// Policy knobs for the structure reader.
///
/// The default is strict: any line under a recognized leading token that
/// fails column or type decoding aborts the whole parse. Setting
/// `skip_malformed` downgrades such failures to per-line warnings, which is
/// useful for files damaged by hand editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ParseOptions {
    /// Skip lines that fail decoding instead of aborting (default: false).
    pub skip_malformed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_options_default_is_abort() {
        assert!(!ParseOptions::default().skip_malformed);
    }
}
