//! Tests for construction, argument classification and kind checks

use proptest::prelude::*;
use serde_json::{json, Map};
use std::error::Error as StdError;
use std::io;
use trace_error::{classify, trace_error, Arg, Base, Cause, Kind, TraceError};

#[derive(Debug)]
struct MyError;

impl Kind for MyError {}

#[derive(Debug)]
struct MyDeepError;

impl Kind for MyDeepError {
    fn parent(&self) -> Option<&dyn Kind> {
        Some(&MyError)
    }
}

#[test]
fn test_constructor_name() {
    assert_eq!(TraceError::msg("sup").name(), "TraceError");
    assert_eq!(TraceError::with_kind(MyError, ["Cat dog"]).name(), "MyError");
    assert_eq!(trace_error!(MyDeepError => "x").name(), "MyDeepError");
}

#[test]
fn test_type_checks() {
    let error = TraceError::default();
    assert!(error.is_kind::<Base>());
    assert!(!error.is_kind::<MyError>());

    let deep = trace_error!(MyDeepError =>);
    assert!(deep.is_kind::<MyDeepError>());
    assert!(deep.is_kind::<MyError>());
    assert!(deep.is_kind::<Base>());

    let boxed: Box<dyn StdError + Send + Sync> = Box::new(deep);
    assert!(boxed.downcast_ref::<TraceError>().is_some());
}

#[test]
fn test_display_is_name_and_message() {
    assert_eq!(TraceError::msg("sup").to_string(), "TraceError: sup");
    assert_eq!(TraceError::default().to_string(), "TraceError");
    assert_eq!(trace_error!(MyError => "lol").to_string(), "MyError: lol");
}

#[test]
fn test_leading_non_text_becomes_data() {
    let error = trace_error!(json!({"a": 1}), "later");
    assert_eq!(error.message(), "");
    assert_eq!(error.cause(0).and_then(Cause::data), Some(&json!({"a": 1})));
    assert_eq!(error.cause(1).and_then(Cause::data), Some(&json!("later")));
    assert_eq!(error.extra_data().get("a"), Some(&json!(1)));
    assert_eq!(error.extra_data().len(), 1);
}

#[test]
fn test_extra_data_later_keys_win() {
    let error = trace_error!("merge", json!({"k": 1, "a": true}), json!({"k": 2}));
    assert_eq!(error.extra_data().get("k"), Some(&json!(2)));
    assert_eq!(error.extra_data().get("a"), Some(&json!(true)));
    assert_eq!(error.own_keys(), ["name", "message", "a", "k"]);
}

#[test]
fn test_first_error_argument_is_source() {
    let error = trace_error!(
        "two causes",
        io::Error::other("first"),
        trace_error!("second")
    );
    assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("first"));
    assert_eq!(error.causes().len(), 2);
}

#[test]
fn test_boxed_trace_error_is_recovered() {
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(TraceError::msg("boxed"));
    assert!(matches!(Arg::from(boxed), Arg::Trace(error) if error.message() == "boxed"));

    let wrapped = anyhow::Error::new(TraceError::msg("anyhow"));
    assert!(matches!(Arg::from(wrapped), Arg::Trace(error) if error.message() == "anyhow"));

    let plain = anyhow::anyhow!("plain");
    match Arg::from(plain) {
        Arg::Native(error) => assert_eq!(error.to_string(), "plain"),
        other => panic!("expected a native cause, got {other:?}"),
    }
}

#[test]
fn test_clones_share_identity() {
    let error = TraceError::msg("shared");
    let clone = error.clone();
    clone.define_hidden_property("seen", true);
    assert_eq!(error.hidden_property("seen"), Some(json!(true)));
}

#[derive(Debug, Clone)]
enum ArgShape {
    Text(String),
    Object(String, i64),
    Scalar(i64),
    Error(String),
}

fn arg_shape() -> impl Strategy<Value = ArgShape> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(ArgShape::Text),
        ("[a-c]", any::<i64>()).prop_map(|(key, value)| ArgShape::Object(key, value)),
        any::<i64>().prop_map(ArgShape::Scalar),
        "[a-z]{1,8}".prop_map(ArgShape::Error),
    ]
}

fn to_arg(shape: &ArgShape) -> Arg {
    match shape {
        ArgShape::Text(text) => Arg::from(text.as_str()),
        ArgShape::Object(key, value) => {
            let mut object = Map::new();
            object.insert(key.clone(), json!(value));
            Arg::from(object)
        }
        ArgShape::Scalar(value) => Arg::from(json!(value)),
        ArgShape::Error(message) => Arg::error(io::Error::other(message.clone())),
    }
}

proptest! {
    #[test]
    fn classify_keeps_every_non_message_argument(shapes in prop::collection::vec(arg_shape(), 0..8)) {
        let parts = classify(shapes.iter().map(to_arg));

        match shapes.first() {
            Some(ArgShape::Text(text)) => {
                prop_assert_eq!(&parts.message, text);
                prop_assert_eq!(parts.causes.len(), shapes.len() - 1);
            }
            _ => {
                prop_assert!(parts.message.is_empty());
                prop_assert_eq!(parts.causes.len(), shapes.len());
            }
        }

        let first_error = shapes.iter().find_map(|shape| match shape {
            ArgShape::Error(message) => Some(message.clone()),
            _ => None,
        });
        prop_assert_eq!(parts.source().and_then(Cause::message), first_error);
    }

    #[test]
    fn classify_merges_objects_last_wins(shapes in prop::collection::vec(arg_shape(), 0..8)) {
        let parts = classify(shapes.iter().map(to_arg));

        for key in ["a", "b", "c"] {
            let last = shapes.iter().rev().find_map(|shape| match shape {
                ArgShape::Object(k, value) if k == key => Some(json!(value)),
                _ => None,
            });
            prop_assert_eq!(parts.extra.get(key).cloned(), last);
        }
    }
}
