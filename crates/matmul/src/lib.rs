//! matmul library: application logic for the benchmark binary.

pub mod app;
pub mod config;
pub mod errors;
