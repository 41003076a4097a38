//! Tests for result/option extensions and macros

use serde_json::json;
use std::error::Error as StdError;
use trace_error::{bail, ensure, trace_error, Cause, OptionExt, ResultExt, TraceError};

fn read_missing() -> Result<String, TraceError> {
    std::fs::read_to_string("/nonexistent/trace_error/config.toml").trace("Could not read config")
}

fn parse_port(raw: &str) -> Result<u16, TraceError> {
    raw.parse::<u16>()
        .trace_with(|| format!("Invalid port `{raw}`"))
}

fn checked_ratio(numerator: u32, denominator: u32) -> Result<u32, TraceError> {
    ensure!(denominator != 0, "Division by zero", json!({"numerator": numerator}));
    Ok(numerator / denominator)
}

fn always_fails() -> Result<(), TraceError> {
    bail!("Always fails", json!({"attempt": 1}))
}

#[test]
fn test_result_trace_wraps_native_error() {
    let error = read_missing().expect_err("file does not exist");
    assert_eq!(error.message(), "Could not read config");
    assert!(matches!(error.cause(0), Some(Cause::Native(_))));
    assert!(error.source().is_some());
    assert_eq!(error.messages().len(), 2);
}

#[test]
fn test_result_trace_with_builds_message_lazily() {
    assert_eq!(parse_port("8080").ok(), Some(8080));

    let error = parse_port("eighty").expect_err("not a number");
    assert_eq!(error.message(), "Invalid port `eighty`");
}

#[test]
fn test_result_trace_keeps_trace_errors_chainable() {
    let inner: Result<(), TraceError> = Err(trace_error!("inner", json!({"id": 3})));
    let error = inner.trace("outer").expect_err("inner failed");

    let cause = error.cause(0).and_then(Cause::as_trace).expect("trace cause");
    assert_eq!(cause.message(), "inner");
    assert_eq!(
        serde_json::to_value(error.messages()).expect("messages serialize"),
        json!(["outer", "inner", {"id": 3}])
    );
}

#[test]
fn test_option_trace_none() {
    assert_eq!(Some(1).trace_none("missing").ok(), Some(1));

    let error = None::<u8>.trace_none("missing value").expect_err("none");
    assert_eq!(error.message(), "missing value");
    assert!(error.causes().is_empty());
}

#[test]
fn test_ensure_and_bail() {
    assert_eq!(checked_ratio(6, 3).ok(), Some(2));

    let error = checked_ratio(6, 0).expect_err("zero denominator");
    assert_eq!(error.message(), "Division by zero");
    assert_eq!(error.extra_data().get("numerator"), Some(&json!(6)));

    let error = always_fails().expect_err("bails");
    assert_eq!(error.message(), "Always fails");
    assert_eq!(error.cause(0).and_then(|c| c.get("attempt")), Some(&json!(1)));
}

#[test]
fn test_empty_macro_invocation() {
    let error = trace_error!();
    assert_eq!(error.message(), "");
    assert!(error.causes().is_empty());
}
