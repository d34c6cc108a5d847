//! Locations command implementation

use anyhow::Result;
use clap::Args;
use fingerprint_db::Location;

use super::utils::open_database;
use super::SourceArgs;

#[derive(Args)]
pub struct LocationsArgs {
    /// Application name as it appears in the definition files
    #[arg(value_name = "APPLICATION")]
    pub application: String,

    /// Expand multi-path locations into one entry per path
    #[arg(long)]
    pub flatten: bool,

    /// Print the result as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(source: &SourceArgs, args: LocationsArgs) -> Result<()> {
    let (_, database) = open_database(source)?;
    let locations = database.locations(&args.application, !args.flatten)?;

    if args.json {
        println!("{}", serde_json::to_string(&locations)?);
        return Ok(());
    }

    for location in &locations {
        println!("{}", render_plain(location));
    }
    Ok(())
}

fn render_plain(location: &Location) -> String {
    location.paths().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::render_plain;
    use fingerprint_db::Location;

    #[test]
    fn render_plain_joins_multiple_paths() {
        assert_eq!(render_plain(&Location::from("/a")), "/a");
        let multiple = Location::from(vec!["/b".to_string(), "/c".to_string()]);
        assert_eq!(render_plain(&multiple), "/b, /c");
    }
}
