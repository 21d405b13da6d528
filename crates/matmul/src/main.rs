//! matmul: benchmark dense matrix multiplication strategies.

use matmul_cli::CLIResultPresenter;
use matmul_lib::{app, config};

fn main() {
    // Logs go to stderr so quiet output stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    std::process::exit(app::run_and_report(&config, &presenter));
}
