//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use matmul_cli::output::{write_report, JsonReport};
use matmul_core::exit_codes;
use matmul_core::registry::DefaultFactory;
use matmul_orchestration::interfaces::{ResultPresenter, SizeReport};
use matmul_orchestration::orchestrator::run_size;
use matmul_orchestration::selection::get_multipliers_to_run;

use crate::config::AppConfig;
use crate::errors::{exit_code, handle_error};

/// Run the application, report a failure through `presenter`, and return
/// the process exit code.
pub fn run_and_report(config: &AppConfig, presenter: &dyn ResultPresenter) -> i32 {
    match run(config, presenter) {
        Ok(code) => code,
        Err(err) => {
            presenter.present_error(&format!("{err:#}"));
            exit_code(&err)
        }
    }
}

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matmul_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    run_cli(config, presenter)
}

fn run_cli(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<i32> {
    let opts = config.options();
    let factory = DefaultFactory::with_options(opts);
    let multipliers = get_multipliers_to_run(&config.algo, &factory)
        .with_context(|| format!("selecting strategies from {:?}", config.algo))?;
    let run_config = config.run_config(&opts);

    info!(
        sizes = ?config.sizes,
        strategies = multipliers.len(),
        strassen_threshold = opts.strassen_threshold,
        concurrent = run_config.concurrent,
        "starting benchmark"
    );

    let mut reports: Vec<SizeReport> = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let report = run_size(size, &multipliers, &run_config, config.seed);
        presenter.present_size(&report);
        reports.push(report);
    }

    if reports.len() > 1 {
        presenter.present_summary(&reports);
    }

    if let Some(path) = &config.output {
        let report = JsonReport::from_reports(&reports, config.seed, opts);
        write_report(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(exit_code_for(&reports))
}

/// Exit code of the first failing size, or success.
fn exit_code_for(reports: &[SizeReport]) -> i32 {
    reports
        .iter()
        .find_map(|r| r.mismatch.as_ref())
        .map_or(exit_codes::SUCCESS, handle_error)
}
