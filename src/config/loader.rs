//! Config file loading

use super::LoaderConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "fingerprint-db";

/// Load the loader config from `config_path`, or discover one in `base`.
///
/// An explicitly given file must parse. A discovered file that fails to
/// parse is reported and ignored.
pub fn load_config(base: &Path, config_path: Option<&Path>) -> Result<LoaderConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(base),
    };

    let Some(config_file) = discovered else {
        return Ok(LoaderConfig::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .map_err(|e| {
            Error::Config(format!("Failed reading config file {}: {}", config_file.display(), e))
        })
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered config {}: {}", config_file.display(), e);
            Ok(LoaderConfig::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<LoaderConfig> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => Err(Error::Config(format!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ))),
    }
}

/// Parse TOML config, supporting a nested `[fingerprint-db]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<LoaderConfig> {
    let raw: toml::Value = toml::from_str(content).map_err(|e| {
        Error::Config(format!("Invalid TOML syntax in {}: {}", config_file.display(), e))
    })?;

    let config_val = raw.get(SECTION).cloned().unwrap_or(raw);

    config_val
        .try_into()
        .map_err(|e| Error::Config(format!("Invalid TOML config {}: {}", config_file.display(), e)))
}

/// Parse YAML config, supporting a nested `fingerprint-db` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<LoaderConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        Error::Config(format!("Invalid YAML syntax in {}: {}", config_file.display(), e))
    })?;

    let config_val = raw.get(SECTION).cloned().unwrap_or(raw);

    serde_yaml::from_value(config_val)
        .map_err(|e| Error::Config(format!("Invalid YAML config {}: {}", config_file.display(), e)))
}

fn discover_config(base: &Path) -> Option<PathBuf> {
    let candidates = [
        "fingerprint-db.toml",
        ".fingerprint-db.toml",
        "fingerprint-db.yml",
        ".fingerprint-db.yml",
    ];

    candidates.iter().map(|candidate| base.join(candidate)).find(|path| path.is_file())
}
