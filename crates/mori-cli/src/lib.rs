//! mori command-line interface.
//!
pub mod options;
pub mod scenario;

use mori_error::Result;

pub use options::{Scenario, ScenarioOptions};
pub use scenario::{Report, run_scenario};

/// Runs every scenario `opts.scenario` selects, stopping at the first failure.
pub fn run_scenarios(opts: &ScenarioOptions) -> Result<Vec<Report>> {
    opts.scenario
        .expand()
        .iter()
        .map(|&scenario| {
            tracing::info!(%scenario, "running scenario");
            run_scenario(scenario, opts)
        })
        .collect()
}
