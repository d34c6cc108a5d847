//! Parsing and merging of definition files

use crate::domain::{Issue, IssueDatabase, IssueSet};
use crate::error::{Error, Result};
use crate::scan::select_yaml_files;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info};

/// Load every selected definition file in `dir` and merge them.
///
/// Files are merged in selection order. The first error aborts the load.
pub fn aggregate(dir: &Path, includes: &[String]) -> Result<IssueDatabase> {
    let selector = select_yaml_files(dir, includes)?;
    let dir = selector.dir().to_path_buf();
    info!("Loading definitions from: {}", dir.display());

    let mut issues = IssueDatabase::new();
    let mut files = 0usize;
    for source in selector {
        // The handle is released inside read_to_string, before the next file is opened.
        let (path, content) = source?.read_to_string()?;
        let document = parse_document(&path, &content)?;
        debug!("Parsed {} application(s) from {}", document.len(), path.display());
        merge(&mut issues, document);
        files += 1;
    }

    info!("Loaded {} application(s) from {} file(s) in {}", issues.len(), files, dir.display());
    Ok(issues)
}

/// Merge `incoming` into `acc`, replacing whole applications on collision.
///
/// A replaced application keeps its original position in `acc`.
pub fn merge(acc: &mut IssueDatabase, incoming: IssueDatabase) {
    for (application, issue_set) in incoming {
        if acc.insert(application.clone(), issue_set).is_some() {
            debug!("Application '{}' replaced by a later file", application);
        }
    }
}

/// Parse one definition file into applications and their issues.
pub fn parse_document(path: &Path, content: &str) -> Result<IssueDatabase> {
    let syntax =
        |e: serde_yaml::Error| Error::Syntax { path: path.to_path_buf(), message: e.to_string() };
    let mut raw: Value = serde_yaml::from_str(content).map_err(syntax)?;
    // Resolve `<<: *anchor` merge keys so shared issue sets expand in place.
    raw.apply_merge().map_err(syntax)?;

    let Value::Mapping(applications) = raw else {
        return Err(Error::NoData { path: path.to_path_buf() });
    };

    let mut document = IssueDatabase::with_capacity(applications.len());
    for (key, value) in applications {
        let application = key_to_string(&key)
            .ok_or_else(|| invalid(path, "application names must be scalars"))?;
        let issue_set = parse_issue_set(path, &application, value)?;
        document.insert(application, issue_set);
    }
    Ok(document)
}

fn parse_issue_set(path: &Path, application: &str, value: Value) -> Result<IssueSet> {
    let issues: Mapping = match value {
        Value::Mapping(issues) => issues,
        Value::Null => Mapping::new(),
        _ => {
            let message = format!("application '{}' is not a mapping of issues", application);
            return Err(invalid(path, message));
        }
    };

    let mut issue_set = IssueSet::with_capacity(issues.len());
    for (key, value) in issues {
        let id = key_to_string(&key).ok_or_else(|| {
            invalid(path, format!("issue names in '{}' must be scalars", application))
        })?;
        let issue: Issue = serde_yaml::from_value(value)
            .map_err(|e| invalid(path, format!("{}/{}: {}", application, id, e)))?;
        issue_set.insert(id, issue);
    }
    Ok(issue_set)
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn invalid(path: &Path, message: impl Into<String>) -> Error {
    Error::InvalidDefinition { path: path.to_path_buf(), message: message.into() }
}
