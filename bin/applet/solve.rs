use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::{reversi::Board, reversi::Point, Snapshot};
use lib::strategy::{spawn, Catalog, Registry};
use lib::util::Build;
use std::io::{read_to_string, stdin};
use std::{fs::File, path::PathBuf};
use tokio::runtime;
use tracing::{info, instrument};

/// Asks a strategy for the best move in a reversi position.
#[derive(Debug, Parser)]
pub struct Solve {
    /// Path to the strategy catalog in RON notation.
    #[clap(short, long)]
    catalog: PathBuf,

    /// The name of the strategy to consult.
    #[clap(short, long)]
    strategy: String,

    /// Path to the game snapshot in JSON notation, reads standard input if omitted.
    snapshot: Option<PathBuf>,
}

impl Solve {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let catalog: Catalog = std::fs::read_to_string(&self.catalog)?.parse()?;
        let registry: Registry<Board, Point> = catalog.build()?;
        let strategy = registry.lookup(&self.strategy)?;

        let snapshot: Snapshot<Board, Point> = match &self.snapshot {
            Some(path) => serde_json::from_reader(File::open(path)?)?,
            None => serde_json::from_str(&read_to_string(stdin())?)?,
        };

        let rt = runtime::Builder::new_multi_thread().build()?;
        let best = rt.block_on(async { spawn(strategy, snapshot).await })??;

        info!(strategy = %self.strategy, %best);
        println!("{}", serde_json::to_string(&best)?);

        Ok(())
    }
}
