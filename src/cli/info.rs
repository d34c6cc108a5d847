//! Info command implementation

use anyhow::Result;

use super::utils::open_database;
use super::SourceArgs;

pub fn run(source: &SourceArgs) -> Result<()> {
    let (dir, database) = open_database(source)?;

    println!("Definitions: {}", dir.display());
    println!("Applications: {}", database.len());
    for (application, issues) in database.issues() {
        println!("  {}: {} issues", application, issues.len());
    }

    Ok(())
}
