mod affinity;
mod class;
mod composite;
mod data_loader;
mod error;
mod ranking;
mod ranking_context;
mod report;
mod util;

use std::io::BufRead;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;

use affinity::*;
use composite::*;
use data_loader::*;
use report::*;

/*
    Ranks the fourteen classes with three PageRank variants and a Markov exchange.
    Set RUST_LOG=debug to see the link sets, RUST_LOG=trace for every Markov iteration.
*/
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding any RankingContext field
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of iterations for every engine
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Write all six rankings to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the affinity matrix to this CSV file
    #[arg(long)]
    matrix_csv: Option<PathBuf>,

    /// Wait for Enter between listings
    #[arg(long)]
    pause: bool,

    /// Skip printing the affinity grid
    #[arg(long)]
    no_grid: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ranking_context = resolve_context(args.config.as_deref(), args.iterations)
        .context("Failed to set up the ranking context")?;

    let matrix = AffinityMatrix::build();
    if !args.no_grid {
        print_grid(&matrix);
    }

    let report = RankingReport::compute(&matrix, &ranking_context);

    let stdin = std::io::stdin();
    for (idx, (title, rankings)) in report.sections().into_iter().enumerate() {
        if args.pause && idx > 0 {
            let mut line = String::new();
            stdin.lock().read_line(&mut line).context("Failed to read from stdin")?;
        }
        print_in_order(rankings, title);
    }

    if let Some(path) = &args.matrix_csv {
        write_matrix_csv(path, &matrix).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if let Some(path) = &args.csv {
        write_rankings_csv(path, &report).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
