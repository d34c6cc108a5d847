//! Core data types for fingerprint definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Issues for one application, keyed by issue identifier, in file order.
pub type IssueSet = IndexMap<String, Issue>;

/// All loaded applications, keyed by application name, in merge order.
pub type IssueDatabase = IndexMap<String, IssueSet>;

/// Where on a filesystem an issue is looked for.
///
/// Definitions may give either one path or an ordered list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Single(String),
    Multiple(Vec<String>),
}

impl Location {
    /// Append this location to `out`, expanding a list by one level.
    pub fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            Location::Single(path) => out.push(path.clone()),
            Location::Multiple(paths) => out.extend(paths.iter().cloned()),
        }
    }

    /// Iterate the individual paths of this location.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        let paths: &[String] = match self {
            Location::Single(path) => std::slice::from_ref(path),
            Location::Multiple(paths) => paths,
        };
        paths.iter().map(String::as_str)
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Single(path.to_string())
    }
}

impl From<Vec<String>> for Location {
    fn from(paths: Vec<String>) -> Self {
        Location::Multiple(paths)
    }
}

/// A single fingerprint definition.
///
/// Only `location` is interpreted; every other field is carried through
/// untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub location: Location,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Issue {
    pub fn new(location: impl Into<Location>) -> Self {
        Self { location: location.into(), extra: IndexMap::new() }
    }
}
