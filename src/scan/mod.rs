//! Definition file discovery

use crate::error::Result;
use std::path::Path;

pub mod selector;

pub use selector::{YamlFileSelector, YamlSource};

/// Select the definition files in `dir`, optionally restricted to `includes`.
pub fn select_yaml_files<P: AsRef<Path>>(dir: P, includes: &[String]) -> Result<YamlFileSelector> {
    YamlFileSelector::new(dir.as_ref(), includes)
}
