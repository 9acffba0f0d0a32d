use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use arraywalk::{sample, walk, write_report, LocationMode, WalkConfig};
use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt, Default)]
#[structopt(
    name = "arraywalk",
    about = "Walks a fixed 2x3x4 array in row-major order, printing each element's location and value."
)]
struct Opt {
    /// Print linear offsets instead of memory addresses
    #[structopt(short, long)]
    offsets: bool,

    /// Raise log verbosity (repeatable)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Opt {
    fn walk_config(&self) -> WalkConfig {
        let location = if self.offsets {
            LocationMode::Offset
        } else {
            LocationMode::Address
        };
        WalkConfig::default().with_location(location)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let args = Opt::from_args();

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let array = sample().context("Building the sample array")?;
    let config = args.walk_config();

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let n = write_report(out, walk(&array, config)).context("Writing report to stdout")?;

    info!(records = n, "done");
    Ok(())
}
