//! Behavioural laws of the result containers.
//!
//! These tests validate:
//! - exactly one alternative is active at a time
//! - payload round trips through construction and access
//! - `emplace` and cross-state assignment
//! - short-circuiting of `and_then` / `or_else`
//! - `transform` / `transform_error` mapping
//! - equality between containers, wrappers and bare values

use std::cell::Cell;

use mori_expected::{BadAccess, Expected, State, Unexpected, VoidExpected};
use pretty_assertions::assert_eq;

fn assert_one_state<T, E>(ex: &Expected<T, E>) {
    assert!(ex.has_value() ^ ex.has_error(), "exactly one state must be active");
    assert_eq!(ex.has_value(), ex.state() == State::Value);
}

// ============================================================================
// State
// ============================================================================

#[test]
fn test_exactly_one_state_through_mutations() {
    let mut ex: Expected<String, u32> = Expected::new("start".into());
    assert_one_state(&ex);

    ex.assign_error(1);
    assert_one_state(&ex);
    ex.emplace("again".into());
    assert_one_state(&ex);
    ex.assign_unexpected(Unexpected::new(2_u8));
    assert_one_state(&ex);
    ex.clone_from(&Expected::new("copied".into()));
    assert_one_state(&ex);
    ex.assign(Expected::from_error(3));
    assert_one_state(&ex);
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_value_round_trip() {
    let payload = vec!["a".to_string(), "b".to_string()];
    let ex: Expected<Vec<String>, ()> = Expected::new(payload.clone());
    assert_eq!(ex.value(), Ok(&payload));
    assert_eq!(ex.into_value(), Ok(payload));
}

#[test]
fn test_error_round_trip() {
    let ex: Expected<(), String> = Expected::from_error("lost".into());
    assert_eq!(ex.error(), "lost");

    let ex: Expected<(), String> = Unexpected::new("lost").into();
    assert_eq!(ex.into_error(), "lost");
}

#[test]
fn test_value_on_failure_hands_back_error() {
    let ex: Expected<u8, String> = Expected::from_error("why".into());
    let signal = ex.value().unwrap_err();
    assert_eq!(signal.error(), "why");
    assert_eq!(signal.as_bad_access(), BadAccess);

    let err: mori_expected::Error = ex.into_value().unwrap_err().into();
    assert_eq!(err.kind(), mori_expected::ErrorKind::BadAccess);
}

// ============================================================================
// Emplace and assignment
// ============================================================================

#[test]
fn test_emplace_always_lands_in_success() {
    let mut from_error: Expected<u8, &str> = Expected::from_error("x");
    from_error.emplace(1);
    assert_eq!(from_error, 1_u8);

    let mut from_value: Expected<u8, &str> = Expected::new(0);
    from_value.emplace(2);
    assert_eq!(from_value, 2_u8);

    let mut void: VoidExpected<&str> = VoidExpected::from_error("x");
    void.emplace();
    assert!(void.has_value());
}

#[test]
fn test_assign_failure_then_success() {
    let mut ex: Expected<String, i32> = Expected::new("v".into());
    ex.assign_unexpected(Unexpected::new(42));
    assert_eq!(*ex.error(), 42);

    ex.assign_value("back".into());
    assert_eq!(ex.value().map(String::as_str), Ok("back"));
}

#[test]
fn test_copy_assignment_returns_updated_container() {
    let failed: Expected<String, u8> = Expected::from_error(2);
    let ok: Expected<String, u8> = Expected::new("copied".into());
    let mut ex: Expected<String, u8> = Expected::new("start".into());

    let updated = ex.assign_cloned(&failed);
    assert_eq!(*updated.error(), 2);

    let updated = updated.assign_cloned(&ok);
    assert_eq!(*updated, ok);
    assert_eq!(failed.error(), &2);
}

#[test]
fn test_move_assignment_returns_updated_container() {
    let mut ex: Expected<u8, u8> = Expected::new(1);
    let updated = ex.assign(Expected::from_error(2)).assign_value(3);
    assert_eq!(*updated, 3_u8);
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_and_then_short_circuit_law() {
    let calls = Cell::new(0);
    let failed: Expected<i32, String> = Expected::from_error("original".into());

    let out: Expected<i64, String> = failed.and_then_ref(|v| {
        calls.set(calls.get() + 1);
        Expected::new(i64::from(*v))
    });
    assert_eq!(out.error(), "original");

    let out: Expected<(), String> = failed.and_then(|_| {
        calls.set(calls.get() + 1);
        Expected::from_error("replaced".into())
    });
    assert_eq!(out.error(), "original");
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_or_else_passes_success_through() {
    let calls = Cell::new(0);
    let ok: Expected<u8, String> = Expected::new(9);
    let out: Expected<u8, ()> = ok.or_else(|_| {
        calls.set(calls.get() + 1);
        Expected::from_error(())
    });
    assert_eq!(out, 9_u8);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_transform_maps_only_success() {
    let f = |v: i32| v * 10;

    let ok: Expected<i32, String> = Expected::new(4);
    assert_eq!(ok.clone().transform(f), f(4));

    let failed: Expected<i32, String> = Expected::from_error("same".into());
    assert_eq!(failed.transform(f), Unexpected::new("same"));
}

#[test]
fn test_transform_error_maps_only_failure() {
    let ok: Expected<i32, String> = Expected::new(4);
    assert_eq!(ok.transform_error(|e| e.len()), 4_i32);

    let failed: Expected<i32, String> = Expected::from_error("four".into());
    assert_eq!(failed.transform_error(|e| e.len()), Unexpected::new(4_usize));
}

#[test]
fn test_chaining_across_container_shapes() {
    let checked: VoidExpected<String> = VoidExpected::new();
    let total = checked
        .transform(|| 20_u32)
        .and_then(|n| Expected::<u32, String>::new(n + 1))
        .transform(|n| n * 2);
    assert_eq!(total, 42_u32);

    let refused: VoidExpected<String> = VoidExpected::from_error("denied".into());
    let total = refused
        .transform(|| 20_u32)
        .and_then(|n| Expected::<u32, String>::new(n + 1));
    assert_eq!(total, Unexpected::new("denied"));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality_laws() {
    let a: Expected<i32, i32> = Expected::new(1);
    let b: Expected<i32, i32> = Expected::new(1);
    let e1: Expected<i32, i32> = Expected::from_error(1);
    let e2: Expected<i32, i32> = Expected::from_error(1);

    assert_eq!(a, b);
    assert_eq!(e1, e2);
    assert_ne!(a, e1);
    assert_ne!(e1, a);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_failure_then_emplace_scenario() {
    let mut c: Expected<f64, i32> = Unexpected::new(3).into();
    assert!(c.has_error());
    assert_eq!(c, Unexpected::new(3));

    c.emplace(4.2);
    assert!(c.has_value());
    assert_eq!(c, 4.2_f64);
}

#[test]
fn test_void_success_then_failure_scenario() {
    let e = "quota exceeded".to_string();
    let mut c: VoidExpected<String> = VoidExpected::new();
    assert!(c.has_value());

    c.assign_unexpected(Unexpected::new(e.clone()));
    assert!(c.has_error());
    assert_eq!(c.error(), &e);
    assert_eq!(c.value(), Err(BadAccess));
}
