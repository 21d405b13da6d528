//! # matmul-orchestration
//!
//! Random operand generation, timed execution of the selected strategies,
//! and cross-strategy result analysis.

pub mod error;
pub mod generator;
pub mod interfaces;
pub mod orchestrator;
pub mod runner;
pub mod selection;

pub use error::BenchError;
pub use interfaces::{MultiplicationResult, ResultPresenter, SizeReport};
pub use orchestrator::{
    analyze_comparison_results, execute_multiplications, run_benchmark, run_size, RunConfig,
};
