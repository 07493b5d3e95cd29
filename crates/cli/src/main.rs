//! Trace-driven cache simulator CLI.
//!
//! This binary replays a binary address trace through one set-associative cache
//! and prints the hit rate, miss rate, and miss-kind breakdown. It performs:
//! 1. **Validation:** Geometry, policy code, and output flag are checked before the trace is read.
//! 2. **Loading:** The whole trace is read into memory (big-endian 32-bit addresses).
//! 3. **Replay:** Every address is simulated in order.
//! 4. **Reporting:** Verbose, compact single-line, or JSON output on stdout.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{CacheConfig, FifoScope, ReplacementPolicy};
use cachesim_core::sim::simulate_file;
use cachesim_core::stats::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a binary trace of big-endian 32-bit addresses through a set-associative cache \
and classify every miss as compulsory, capacity, or conflict.\n\nExamples:\n  cachesim 256 4 1 R 1 bin_100.bin\n  cachesim 1 4 32 L 0 vortex.in.sem.bin\n  cachesim 64 16 4 F 1 trace.bin --fifo-scope cache-wide",
    allow_negative_numbers = true
)]
struct Cli {
    /// Number of sets (power of two).
    nsets: u32,

    /// Block size in bytes (power of two).
    bsize: u32,

    /// Associativity (ways per set).
    assoc: u32,

    /// Replacement policy: R (random), F (FIFO), or L (LRU).
    #[arg(value_parser = ReplacementPolicy::from_code)]
    policy: ReplacementPolicy,

    /// Output format: 0 for verbose, 1 for a compact single line.
    #[arg(value_parser = parse_output_flag)]
    flag: OutputFormat,

    /// Binary trace file.
    trace: PathBuf,

    /// Seed for random replacement (fresh seed if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Scope of the FIFO insertion queue.
    #[arg(long, value_enum, default_value_t = FifoScopeArg::PerSet)]
    fifo_scope: FifoScopeArg,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FifoScopeArg {
    /// One insertion queue per set.
    PerSet,
    /// One insertion queue shared by all sets.
    CacheWide,
}

impl From<FifoScopeArg> for FifoScope {
    fn from(value: FifoScopeArg) -> Self {
        match value {
            FifoScopeArg::PerSet => Self::PerSet,
            FifoScopeArg::CacheWide => Self::CacheWide,
        }
    }
}

/// Parses the output flag, which must be exactly `0` or `1`.
fn parse_output_flag(s: &str) -> Result<OutputFormat, String> {
    s.parse::<u8>()
        .ok()
        .and_then(OutputFormat::from_flag)
        .ok_or_else(|| format!("output flag must be 0 or 1 (got {s:?})"))
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs one simulation and prints its report.
fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = CacheConfig {
        sets: cli.nsets,
        block_size: cli.bsize,
        associativity: cli.assoc,
        policy: cli.policy,
        fifo_scope: cli.fifo_scope.into(),
        seed: cli.seed,
    };

    debug!(?config, trace = %cli.trace.display(), "starting simulation");
    let report = simulate_file(config, &cli.trace)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render(cli.flag));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
