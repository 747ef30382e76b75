use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::stderr;
use tracing::{instrument, level_filters::LevelFilter, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Consults remote move solvers on behalf of a reversi engine.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// How much of the solver client's own diagnostics to write to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// How much of the HTTP stack's diagnostics to write to stderr.
    #[clap(long, default_value_t = LevelFilter::ERROR)]
    transport: LevelFilter,

    /// Also report how long each exchange with a solver took.
    #[clap(long)]
    timings: bool,

    #[clap(subcommand)]
    applet: Applet,
}

impl Cli {
    fn subscribe(&self) {
        let filter = Targets::new()
            .with_targets([("cli", self.verbosity), ("lib", self.verbosity)])
            .with_default(self.transport);

        let spans = match self.timings {
            true => FmtSpan::CLOSE,
            false => FmtSpan::NONE,
        };

        let diagnostics = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(spans)
            .with_writer(stderr);

        registry().with(filter).with(diagnostics).init();
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.subscribe();
        self.applet.execute()
    }
}
