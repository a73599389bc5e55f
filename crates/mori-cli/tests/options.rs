//! Argument parsing for the `mori` binary, driven through the same
//! `ScenarioOptions` the binary flattens into its parser.

use clap::Parser;
use mori::{Scenario, ScenarioOptions, run_scenarios};
use mori_error::ErrorKind;
use pretty_assertions::assert_eq;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    opts: ScenarioOptions,
}

fn parse(args: &[&str]) -> ScenarioOptions {
    let argv = std::iter::once("mori").chain(args.iter().copied());
    Harness::try_parse_from(argv).unwrap().opts
}

#[test]
fn test_defaults() {
    let opts = parse(&[]);
    assert_eq!(opts.scenario, Scenario::All);
    assert_eq!(opts.error_code, 3);
    assert_eq!(opts.value, 4.2);
}

#[test]
fn test_explicit_arguments() {
    let opts = parse(&["--scenario", "rollback", "--error-code=-8", "--value", "0.5"]);
    assert_eq!(opts.scenario, Scenario::Rollback);
    assert_eq!(opts.error_code, -8);
    assert_eq!(opts.value, 0.5);
}

#[test]
fn test_failed_scenario_surfaces_assertion_kind() {
    let opts = parse(&["--scenario", "demo", "--value", "NaN"]);
    let err = run_scenarios(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AssertionFailed);
    assert_eq!(err.operation(), "demo");
}

#[test]
fn test_unknown_scenario_is_rejected() {
    let argv = ["mori", "--scenario", "sideways"];
    assert!(Harness::try_parse_from(argv).is_err());
}

#[test]
fn test_custom_inputs_flow_into_demo() {
    let opts = parse(&["--scenario", "demo", "--error-code", "11", "--value", "2.5"]);
    let reports = run_scenarios(&opts).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].lines.first().map(String::as_str), Some("built Error(11)"));
    assert_eq!(reports[0].lines.last().map(String::as_str), Some("value = 2.5"));
}

#[test]
fn test_rollback_with_small_code_still_passes() {
    // -255 + 255 fits in a u8, so the narrowing assignment is accepted
    let opts = parse(&["--scenario", "rollback", "--error-code=-255"]);
    let reports = run_scenarios(&opts).unwrap();
    assert!(
        reports[0]
            .lines
            .iter()
            .any(|l| l == "narrowing conversion accepted: true")
    );
}
