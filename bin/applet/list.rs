use anyhow::Error as Anyhow;
use clap::Parser;
use lib::strategy::Catalog;
use std::{fs::read_to_string, path::PathBuf};
use tracing::instrument;

/// Lists the strategies in a catalog.
#[derive(Debug, Parser)]
pub struct List {
    /// Path to the strategy catalog in RON notation.
    #[clap(short, long)]
    catalog: PathBuf,
}

impl List {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let catalog: Catalog = read_to_string(&self.catalog)?.parse()?;

        for (name, config) in catalog.entries() {
            println!("{}\t{}", name, config);
        }

        Ok(())
    }
}
