//! mpwalk - metapath-guided random walk generation from the command line.
//!
//! # Usage
//!
//! ```bash
//! mpwalk --input data/adjlist.txt --output walks.txt \
//!     --metapath vapav --exclude ap --num-walks 10 --walk-length 20
//! ```
//!
//! The input is a line-oriented adjacency list: the first token of each
//! line is a source node, every following token is a neighbor, and a
//! node's type is the first character of its label. The output holds one
//! walk per line, space-separated labels, grouped by starting node in
//! discovery order.

mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use mpwalk_core::{run_walks, ExcludeSet, Metapath, NetworkIndex, WalkConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use progress::ProgressMonitor;

#[derive(Parser)]
#[command(name = "mpwalk")]
#[command(about = "Metapath-guided random walk generator for heterogeneous networks")]
#[command(after_help = "Example:\n  mpwalk --input data/adjlist.txt --output walks.txt \
--metapath vapav --exclude ap --num-walks 10 --walk-length 20")]
struct Cli {
    /// Input file as an adjacency list
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file for writing walks, one per line
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Metapath to guide the walk (each character denotes a node type)
    #[arg(short, long, value_name = "STRING")]
    metapath: Metapath,

    /// Node types excluded from the recorded walks
    #[arg(short, long, value_name = "STRING", default_value = "")]
    exclude: String,

    /// Number of walks per starting node
    #[arg(short, long, default_value_t = 100)]
    num_walks: usize,

    /// Length of each walk
    #[arg(short, long, default_value_t = 100)]
    walk_length: usize,

    /// Base seed for the per-node random streams
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads (default: all available cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        mpwalk_core::rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }

    println!("reading network...");
    let start = Instant::now();
    let (index, report) = NetworkIndex::from_file(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    for line_no in &report.skipped {
        eprintln!(
            "warning: skipped malformed record at {}:{}",
            cli.input.display(),
            line_no
        );
    }

    let stats = index.stats();
    println!(
        "loaded {} nodes, {} edges in {:.2?}",
        stats.node_count,
        stats.edge_count,
        start.elapsed()
    );

    let mut config = WalkConfig::new(cli.metapath);
    config.exclude = ExcludeSet::new(&cli.exclude);
    config.num_walks = cli.num_walks;
    config.walk_length = cli.walk_length;
    config.seed = cli.seed;

    let total = index.starting_nodes(config.metapath.start_type()).len();
    println!(
        "running random walks from {} starting nodes of type '{}'...",
        total,
        config.metapath.start_type()
    );

    let start = Instant::now();
    let completed = Arc::new(AtomicUsize::new(0));
    let monitor = ProgressMonitor::spawn(total, Arc::clone(&completed));
    let batches = run_walks(&index, &config, &completed);
    monitor.join();

    let walk_count: usize = batches.iter().map(|b| b.walks.len()).sum();
    println!("generated {} walks in {:.2?}", walk_count, start.elapsed());

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    for batch in &batches {
        for walk in &batch.walks {
            let line: Vec<&str> = walk.iter().map(|&n| index.label(n)).collect();
            writeln!(writer, "{}", line.join(" "))
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
        }
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("done.");
    Ok(())
}
