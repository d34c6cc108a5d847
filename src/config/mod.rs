//! Loader configuration
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

pub mod loader;

pub use loader::load_config;

/// Where to load definitions from and which files to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Directory holding the `.yml` definition files
    pub yaml_dir: Option<PathBuf>,

    /// Base names (without `.yml`) to load; empty loads everything
    #[serde(deserialize_with = "string_or_list")]
    pub includes: Vec<String>,
}

impl LoaderConfig {
    /// Apply CLI/env overrides on top of file values.
    pub fn with_overrides(
        mut self,
        yaml_dir: Option<PathBuf>,
        includes: Option<Vec<String>>,
    ) -> Self {
        if let Some(dir) = yaml_dir {
            self.yaml_dir = Some(dir);
        }
        if let Some(includes) = includes {
            self.includes = normalize_includes(includes);
        }
        self
    }
}

/// Trim entries and drop empty ones.
pub fn normalize_includes<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        String(String),
        List(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::String(s) => normalize_includes(s.split(',')),
        StringOrList::List(items) => normalize_includes(items),
    })
}
