//! Sequential execution of scenarios with per-scenario logging.

use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::error::SuiteError;
use crate::harness::Harness;
use crate::scenarios::{self, Scenario, SCENARIOS};

pub struct Outcome {
    pub scenario: &'static Scenario,
    pub elapsed: Duration,
    pub result: Result<(), SuiteError>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolve command-line filters to scenarios. No filters selects all of them.
pub fn select(filters: &[String]) -> Result<Vec<&'static Scenario>, SuiteError> {
    if filters.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }
    filters
        .iter()
        .map(|id| scenarios::find(id).ok_or_else(|| SuiteError::UnknownScenario(id.clone())))
        .collect()
}

pub fn run_scenario(harness: &Harness, scenario: &'static Scenario) -> Outcome {
    info!(id = scenario.id, title = scenario.title, "running");
    let started = Instant::now();
    let result = (scenario.run)(harness);
    let elapsed = started.elapsed();

    match &result {
        Ok(()) => info!(id = scenario.id, ?elapsed, "PASS"),
        Err(e) => error!(id = scenario.id, ?elapsed, error = %e, "FAIL"),
    }

    Outcome {
        scenario,
        elapsed,
        result,
    }
}

/// Run scenarios one after another. A failure does not stop the run.
pub fn run_all(harness: &Harness, scenarios: &[&'static Scenario]) -> Vec<Outcome> {
    scenarios
        .iter()
        .copied()
        .map(|scenario| run_scenario(harness, scenario))
        .collect()
}

/// Totals over a finished run.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: Vec<&'static str>,
    pub elapsed: Duration,
}

pub fn summarize(outcomes: &[Outcome]) -> Summary {
    Summary {
        passed: outcomes.iter().filter(|o| o.passed()).count(),
        failed: outcomes
            .iter()
            .filter(|o| !o.passed())
            .map(|o| o.scenario.id)
            .collect(),
        elapsed: outcomes.iter().map(|o| o.elapsed).sum(),
    }
}
