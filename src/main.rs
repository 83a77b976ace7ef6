use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use kl_partition::{Graph, InitialPartitioningMethod, KernighanLinConfig, SelectionPolicy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::{self, SystemTime, UNIX_EPOCH};

/// Bisects a netlist graph with the Kernighan-Lin heuristic.
///
/// Prints the final cutset, then the vertices of set A, then the vertices of set B.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Netlist file: vertex count, net count, then one 1-based vertex pair per line.
    input: PathBuf,

    /// Seed for the initial partition. Defaults to the current time.
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Selection::Exhaustive)]
    selection: Selection,

    #[arg(long, value_enum, default_value_t = Initial::Random)]
    initial: Initial,

    /// Stop after this many committed generations.
    #[arg(long)]
    max_generations: Option<u32>,

    /// Recompute the cutset after every generation and abort on a mismatch.
    #[arg(long, default_value_t = false)]
    verify: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Selection {
    Exhaustive,
    Greedy,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Initial {
    Random,
    Modulo,
    Bfs,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("Using seed: {seed}");

    log::info!("Reading file: {}", cli.input.display());
    let netlist = Graph::from_netlist_file(&cli.input)
        .with_context(|| format!("could not load {}", cli.input.display()))?;
    log::info!(
        "{} vertices, {} distinct edges, total weight {}",
        netlist.graph.vertex_count(),
        netlist.graph.edge_count(),
        netlist.graph.total_weight()
    );

    let config = KernighanLinConfig {
        rng_seed: seed,
        initial_partitioning: match cli.initial {
            Initial::Random => InitialPartitioningMethod::Random,
            Initial::Modulo => InitialPartitioningMethod::Modulo,
            Initial::Bfs => InitialPartitioningMethod::Bfs,
        },
        selection: match cli.selection {
            Selection::Exhaustive => SelectionPolicy::Exhaustive,
            Selection::Greedy => SelectionPolicy::Greedy,
        },
        max_generations: cli.max_generations,
        verify_cutset: cli.verify,
    };

    let t1 = time::Instant::now();
    let bisection = netlist
        .graph
        .partition_kernighan_lin(&config)
        .with_context(|| format!("could not bisect {}", cli.input.display()))?;
    log::info!("time: {}ms", t1.elapsed().as_millis());
    log::info!("final cutset: {}", bisection.cutset);

    let mut out = io::stdout().lock();
    bisection.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
