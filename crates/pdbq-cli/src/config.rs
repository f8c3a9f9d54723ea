use crate::cli::Cli;
use crate::error::{CliError, Result};
use pdbq::core::io::ParseOptions;
use pdbq::engine::session::MaskKind;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

fn default_radius() -> f64 {
    5.0
}

fn default_mask_kind() -> MaskKind {
    MaskKind::Atoms
}

/// Query defaults that flags may override per invocation.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct QueryDefaults {
    /// Neighborhood radius in Angstroms for `near`.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Mask kind printed when none is requested.
    #[serde(default = "default_mask_kind")]
    pub mask_kind: MaskKind,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            mask_kind: default_mask_kind(),
        }
    }
}

/// The TOML configuration file layout.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct FileConfig {
    pub parse: ParseOptions,
    pub query: QueryDefaults,
}

/// Loads the configuration file, or the built-in defaults when no path is
/// given.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    debug!("Loaded configuration from {}: {config:?}", path.display());
    Ok(config)
}

/// Merges the config file's parse policy with the command-line override.
pub fn effective_parse_options(cli: &Cli, config: &FileConfig) -> ParseOptions {
    ParseOptions {
        skip_malformed: cli.skip_malformed || config.parse.skip_malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(!config.parse.skip_malformed);
        assert_eq!(config.query.radius, 5.0);
        assert_eq!(config.query.mask_kind, MaskKind::Atoms);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [parse]
            skip-malformed = true

            [query]
            radius = 3.5
            mask-kind = "residues"
            "#,
        )
        .unwrap();
        assert!(config.parse.skip_malformed);
        assert_eq!(config.query.radius, 3.5);
        assert_eq!(config.query.mask_kind, MaskKind::Residues);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("[plot]\ndpi = 300\n");
        assert!(result.is_err());
    }
}
