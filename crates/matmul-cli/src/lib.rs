//! # matmul-cli
//!
//! Terminal rendering of benchmark reports, JSON export, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;
