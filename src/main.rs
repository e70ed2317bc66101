mod cli;
mod error;
mod geometry;
mod output;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use geometry::SpiralPoints;

fn main() -> Result<()> {
    // stdout carries only points, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let count = cli.point_count()?;
    if !cli.ignored.is_empty() {
        tracing::debug!(ignored = ?cli.ignored, "ignoring extra arguments");
    }

    tracing::info!("Generating {} spiral points", count.get());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = output::write_points(&mut out, SpiralPoints::new(count))
        .context("Failed to write points to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    tracing::debug!(written, "done");
    Ok(())
}
