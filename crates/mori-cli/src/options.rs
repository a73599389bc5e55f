//! Command-line options shared by the `mori` binary and its tests.

use clap::{Args, ValueEnum};
use strum_macros::{Display, IntoStaticStr};

/// Which scenario to exercise.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Scenario {
    /// Every scenario, in declaration order.
    #[default]
    All,
    /// Failure built from a wrapped error code, then emplaced with a value.
    Demo,
    /// Success without a payload, then assigned a failure.
    Void,
    /// A fallible re-assignment that fails and must leave the container as it was.
    Rollback,
}

impl Scenario {
    /// The concrete scenarios this selection stands for.
    pub fn expand(self) -> &'static [Scenario] {
        match self {
            Scenario::All => &[Scenario::Demo, Scenario::Void, Scenario::Rollback],
            Scenario::Demo => &[Scenario::Demo],
            Scenario::Void => &[Scenario::Void],
            Scenario::Rollback => &[Scenario::Rollback],
        }
    }
}

/// Inputs fed into the scenarios.
#[derive(Args, Debug, Clone)]
pub struct ScenarioOptions {
    /// Scenario to run
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Error code used to build the initial failure
    #[arg(long = "error-code", value_name = "N", default_value_t = 3)]
    pub error_code: i32,

    /// Success value emplaced after the failure
    #[arg(long, value_name = "F", default_value_t = 4.2)]
    pub value: f64,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            scenario: Scenario::All,
            error_code: 3,
            value: 4.2,
        }
    }
}

impl ScenarioOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_error_code(mut self, error_code: i32) -> Self {
        self.error_code = error_code;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}
