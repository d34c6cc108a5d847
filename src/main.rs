//! fingerprint-db: inspect directories of YAML vulnerability fingerprints

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
