//! Shared CLI utilities.

use anyhow::{Context, Result};
use fingerprint_db::config::{load_config, normalize_includes};
use fingerprint_db::Database;
use std::path::PathBuf;

use super::SourceArgs;

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| normalize_includes(s.split(',')))
}

/// Resolve config, env and flags into a directory and open the database there.
pub fn open_database(source: &SourceArgs) -> Result<(PathBuf, Database)> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd, source.config.as_deref())?
        .with_overrides(source.dir.clone(), parse_csv(&source.include));

    let Some(dir) = config.yaml_dir else {
        anyhow::bail!(
            "No definitions directory given (use --dir, FINGERPRINT_DB_DIR or a config file)"
        );
    };

    let database = Database::open(&dir, &config.includes)
        .with_context(|| format!("Failed to load definitions from {}", dir.display()))?;
    Ok((dir, database))
}
