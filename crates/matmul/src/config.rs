//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use matmul_core::{Options, DEFAULT_BENCH_SIZES};
use matmul_orchestration::RunConfig;

/// Benchmark dense matrix multiplication strategies on random square matrices.
#[derive(Parser, Debug)]
#[command(name = "matmul", version, about)]
pub struct AppConfig {
    /// Matrix side lengths to benchmark, comma separated.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_BENCH_SIZES,
        env = "MATMUL_SIZES"
    )]
    pub sizes: Vec<usize>,

    /// Strategies to run: naive, delegated (blas), strassen, strassen-par,
    /// a comma-separated list of those, or all.
    #[arg(short, long, default_value = "all", env = "MATMUL_ALGO")]
    pub algo: String,

    /// Side length at or below which Strassen delegates (0 = default).
    #[arg(long, default_value = "0", env = "MATMUL_STRASSEN_THRESHOLD")]
    pub strassen_threshold: usize,

    /// Padded side from which strassen-par forks (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Relative tolerance for cross-strategy agreement (0 = default).
    #[arg(long, default_value = "0")]
    pub tolerance: f64,

    /// Seed for the random operands.
    #[arg(long, default_value = "42", env = "MATMUL_SEED")]
    pub seed: u64,

    /// Timed repetitions per strategy and size.
    #[arg(short, long, default_value = "1")]
    pub repeats: u32,

    /// Run the strategies of one size concurrently.
    #[arg(long)]
    pub concurrent: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (one line per size).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Core options, normalized.
    pub fn options(&self) -> Options {
        Options {
            strassen_threshold: self.strassen_threshold,
            parallel_threshold: self.parallel_threshold,
            tolerance: self.tolerance,
        }
        .normalize()
    }

    pub fn run_config(&self, opts: &Options) -> RunConfig {
        RunConfig {
            repeats: self.repeats.max(1),
            concurrent: self.concurrent,
            tolerance: opts.tolerance,
        }
    }
}
