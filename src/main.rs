use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safe_to_test::{Config, GateReport, Reporter};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for workflow commands
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safe_to_test=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            let mut reporter = Reporter::new(std::io::stdout(), None, None);
            if let Err(io_err) = reporter.report_error(&e.to_string()) {
                error!("Failed to write report: {}", io_err);
            }
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = Reporter::from_config(&config);

    match safe_to_test::run(&config) {
        Ok(evaluation) => {
            let report = GateReport::new(&evaluation.input, &evaluation.outcome, &config.label);
            if let Err(e) = reporter.report(&report) {
                error!("Failed to write report: {}", e);
                return ExitCode::FAILURE;
            }
            if evaluation.outcome.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("Gate evaluation failed: {}", e);
            if let Err(io_err) = reporter.report_error(&e.to_string()) {
                error!("Failed to write report: {}", io_err);
            }
            ExitCode::FAILURE
        }
    }
}
