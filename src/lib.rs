//! fingerprint-db: load YAML vulnerability fingerprints into a lookup database
//!
//! A directory of `.yml` files maps application names to issue definitions.
//! [`Database::open`] selects the eligible files, parses each one, and merges
//! them into a single read-only map. [`Database::locations`] then answers
//! where on a filesystem each of an application's issues is detected.

pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod scan;

pub use database::Database;
pub use domain::{Issue, IssueDatabase, IssueSet, Location};
pub use error::{Error, Result};
