//! In-memory fingerprint database
//!
//! Built once from a directory of YAML definitions and read-only afterwards.

use crate::domain::{IssueDatabase, IssueSet, Location};
use crate::error::{Error, Result};
use std::path::Path;

pub mod aggregate;

pub use aggregate::{aggregate, merge, parse_document};

/// Loaded fingerprint definitions, keyed by application name.
#[derive(Debug, Clone, Default)]
pub struct Database {
    issues: IssueDatabase,
}

impl Database {
    /// Load every definition file in `dir`, or only those named in `includes`.
    ///
    /// An empty `includes` loads all `.yml` files.
    pub fn open<P: AsRef<Path>>(dir: P, includes: &[String]) -> Result<Self> {
        let issues = aggregate(dir.as_ref(), includes)?;
        Ok(Self { issues })
    }

    pub fn from_issues(issues: IssueDatabase) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &IssueDatabase {
        &self.issues
    }

    pub fn get(&self, application: &str) -> Option<&IssueSet> {
        self.issues.get(application)
    }

    /// Application names in load order.
    pub fn applications(&self) -> impl Iterator<Item = &str> {
        self.issues.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Locations of every issue of `application`, in definition order.
    ///
    /// With `with_lists` each issue contributes its location as written, so
    /// the result can mix single paths and lists. Without it, lists are
    /// expanded one level and every entry is a [`Location::Single`].
    pub fn locations(&self, application: &str, with_lists: bool) -> Result<Vec<Location>> {
        let issue_set = self.lookup(application)?;
        if with_lists {
            return Ok(issue_set.values().map(|issue| issue.location.clone()).collect());
        }
        Ok(flatten(issue_set).into_iter().map(Location::Single).collect())
    }

    /// Same as `locations(application, false)`, as plain paths.
    pub fn flat_locations(&self, application: &str) -> Result<Vec<String>> {
        self.lookup(application).map(flatten)
    }

    fn lookup(&self, application: &str) -> Result<&IssueSet> {
        self.issues
            .get(application)
            .ok_or_else(|| Error::UnknownApplication(application.to_string()))
    }
}

fn flatten(issue_set: &IssueSet) -> Vec<String> {
    let mut paths = Vec::with_capacity(issue_set.len());
    for issue in issue_set.values() {
        issue.location.flatten_into(&mut paths);
    }
    paths
}
