//! Tests for hidden properties

use serde_json::json;
use trace_error::{trace_error, TraceError};

#[test]
fn test_hidden_property_round_trip() {
    let error = TraceError::msg("coded");
    error.define_hidden_property("code", "lol");

    assert_eq!(error.hidden_property("code"), Some(json!("lol")));
    assert!(error.hidden_property("missing").is_none());
}

#[test]
fn test_hidden_property_not_in_keys() {
    let error = trace_error!("coded", json!({"visible": 1}));
    error.define_hidden_property("code", "lol");

    let keys = error.own_keys();
    assert!(!keys.iter().any(|key| key == "code"));
    assert!(keys.iter().any(|key| key == "visible"));
    assert!(error.extra_data().get("code").is_none());
}

#[test]
fn test_hidden_property_overwrite() {
    let error = TraceError::default();
    error.define_hidden_property("attempts", 1);
    error.define_hidden_property("attempts", json!({"count": 2}));

    assert_eq!(error.hidden_property("attempts"), Some(json!({"count": 2})));
}
