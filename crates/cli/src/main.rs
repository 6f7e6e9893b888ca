//! Trace-driven cache simulator CLI.
//!
//! This binary replays a valgrind memory trace against one set-associative
//! LRU cache and reports the totals. It performs:
//! 1. **Argument parsing:** Geometry (`-s`, `-E`, `-b`) and trace path (`-t`), all required.
//! 2. **Simulation:** Validates the geometry, reads the trace, and folds it through the cache.
//! 3. **Reporting:** Prints `hits:<h> misses:<m> evictions:<e>`, optionally per-access lines (`-v`) or JSON (`--json`).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use csim_core::config::CacheConfig;
use csim_core::sim::{Simulator, trace};
use csim_core::stats::RunResult;

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Set-associative LRU cache simulator",
    long_about = "Replays a valgrind memory trace against a set-associative cache with LRU replacement and reports hits, misses, and evictions.\n\nExamples:\n  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -v -s 1 -E 2 -b 4 -t traces/dave.trace\n\nSet RUST_LOG=debug for simulator diagnostics on stderr."
)]
struct Cli {
    /// Number of set index bits (S = 2^s sets).
    #[arg(short = 's', value_name = "s")]
    set_index_bits: u32,

    /// Associativity (number of lines per set).
    #[arg(short = 'E', value_name = "E")]
    associativity: usize,

    /// Number of block bits (B = 2^b bytes per block).
    #[arg(short = 'b', value_name = "b")]
    block_offset_bits: u32,

    /// Valgrind trace to replay.
    #[arg(short = 't', value_name = "tracefile")]
    trace: PathBuf,

    /// Print the outcome of every access.
    #[arg(short, long)]
    verbose: bool,

    /// Print the configuration and totals as JSON instead of the summary line.
    #[arg(long)]
    json: bool,
}

/// JSON report for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a CacheConfig,
    result: RunResult,
    skipped: u64,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = CacheConfig::new(cli.set_index_bits, cli.associativity, cli.block_offset_bits);
    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("csim: invalid cache configuration: {e}");
        process::exit(1);
    });

    info!(trace = %cli.trace.display(), verbose = cli.verbose, "replaying trace");
    let records = trace::read_trace(&cli.trace).unwrap_or_else(|e| {
        eprintln!("csim: {e}");
        process::exit(1);
    });

    if cli.verbose {
        sim.run_with(&records, |outcome| println!("{outcome}"));
    } else {
        sim.run(&records);
    }

    let skipped = sim.skipped();
    let result = sim.finish();
    if cli.json {
        print_json(&config, result, skipped);
    } else {
        result.print_summary();
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(config: &CacheConfig, result: RunResult, skipped: u64) {
    let report = Report {
        config,
        result,
        skipped,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("csim: failed to encode report: {e}");
            process::exit(1);
        }
    }
}
