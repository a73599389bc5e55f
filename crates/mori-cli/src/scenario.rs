//! The scenarios behind `mori --scenario`.
//!
//! Each scenario drives the containers through a short script, recording one
//! line per step. A failed check stops the scenario with an
//! `AssertionFailed` error naming the check.

use mori_error::{Error, ErrorKind, Result};
use mori_expected::{Expected, Unexpected, VoidExpected};

use crate::options::{Scenario, ScenarioOptions};

/// Output of one scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub scenario: Scenario,
    pub lines: Vec<String>,
}

impl Report {
    fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            lines: Vec::new(),
        }
    }

    fn step(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(scenario = %self.scenario, %line, "step");
        self.lines.push(line);
    }

    fn check(&mut self, holds: bool, what: &str) -> Result<()> {
        if !holds {
            let operation: &'static str = self.scenario.into();
            return Err(Error::assertion_failed(what).with_operation(operation));
        }
        self.step(format!("ok: {what}"));
        Ok(())
    }
}

/// Runs a single concrete scenario. `Scenario::All` runs nothing.
pub fn run_scenario(scenario: Scenario, opts: &ScenarioOptions) -> Result<Report> {
    match scenario {
        Scenario::All => Ok(Report::new(Scenario::All)),
        Scenario::Demo => demo(opts),
        Scenario::Void => void(),
        Scenario::Rollback => rollback(opts),
    }
}

fn demo(opts: &ScenarioOptions) -> Result<Report> {
    let mut report = Report::new(Scenario::Demo);

    let mut c: Expected<f64, i32> = Unexpected::new(opts.error_code).into();
    report.step(format!("built {c:?}"));
    report.check(c.has_error(), "holds the failure")?;
    report.check(c == Unexpected::new(opts.error_code), "equals Unexpected(error_code)")?;

    c.emplace(opts.value);
    report.step(format!("emplaced {c:?}"));
    report.check(c.has_value(), "holds a value after emplace")?;
    report.check(c == opts.value, "equals the emplaced value")?;

    let value = c.value()?;
    report.step(format!("value = {value}"));
    Ok(report)
}

fn void() -> Result<Report> {
    let mut report = Report::new(Scenario::Void);

    let mut c: VoidExpected<Error> = VoidExpected::new();
    report.step(format!("built {c:?}"));
    report.check(c.has_value(), "holds success")?;
    c.value()?;

    c.assign_error(Error::unsupported("quota exceeded").with_context("limit", "0"));
    report.step(format!("assigned failure: {}", c.error()));
    report.check(c.has_error(), "holds the failure")?;
    report.check(c.error().kind() == ErrorKind::Unsupported, "error kind survives")?;
    report.check(c.value().is_err(), "value() reports bad access")?;
    Ok(report)
}

fn rollback(opts: &ScenarioOptions) -> Result<Report> {
    let mut report = Report::new(Scenario::Rollback);

    let mut c: Expected<String, i32> = Expected::from_error(opts.error_code);
    let before = c.clone();
    report.step(format!("built {c:?}"));

    let attempt = c
        .try_assign_value_with(|| Err(Error::construction_failed("payload")))
        .map(|_| ());
    match attempt {
        Ok(()) => {
            let operation: &'static str = Scenario::Rollback.into();
            return Err(
                Error::assertion_failed("failing build was accepted").with_operation(operation),
            );
        }
        Err(err) => {
            let from = c.state();
            let aborted =
                Error::transition_aborted(from.as_str(), from.flipped().as_str()).set_source(err);
            tracing::info!(error = %aborted, "re-assignment rejected");
            report.step(format!("rejected: {aborted}"));
        }
    }
    report.check(c == before, "container unchanged after failed build")?;

    let mut narrow: Expected<u8, i32> = Expected::new(1);
    let accepted = narrow
        .try_assign_value(opts.error_code.saturating_add(i32::from(u8::MAX)))
        .is_ok();
    report.step(format!("narrowing conversion accepted: {accepted}"));
    if !accepted {
        report.check(narrow == 1_u8, "value unchanged after failed conversion")?;
    }
    Ok(report)
}
