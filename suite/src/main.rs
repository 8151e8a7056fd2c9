use std::process::ExitCode;

use ads_suite::{runner, Harness, SuiteConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match SuiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    let filters: Vec<String> = std::env::args().skip(1).collect();
    let selected = match runner::select(&filters) {
        Ok(selected) => selected,
        Err(e) => {
            error!(error = %e, "cannot select scenarios");
            return ExitCode::from(2);
        }
    };

    info!(base_url = %config.base_url, scenarios = selected.len(), "starting suite");
    let harness = Harness::new(config);
    let outcomes = runner::run_all(&harness, &selected);

    let summary = runner::summarize(&outcomes);
    println!(
        "{} passed, {} failed in {:.2?}",
        summary.passed,
        summary.failed.len(),
        summary.elapsed
    );
    if !summary.failed.is_empty() {
        println!("failed: {}", summary.failed.join(", "));
    }

    if summary.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
