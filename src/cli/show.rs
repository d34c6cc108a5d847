//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::open_database;
use super::SourceArgs;

#[derive(Args)]
pub struct ShowArgs {
    /// Application name as it appears in the definition files
    #[arg(value_name = "APPLICATION")]
    pub application: String,
}

pub fn run(source: &SourceArgs, args: ShowArgs) -> Result<()> {
    let (_, database) = open_database(source)?;
    let issues = database
        .get(&args.application)
        .ok_or_else(|| fingerprint_db::Error::UnknownApplication(args.application.clone()))?;

    let rendered = serde_yaml::to_string(issues).context("Failed to render issues as YAML")?;
    print!("{}", rendered);
    Ok(())
}
