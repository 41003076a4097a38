//! Constructor argument classification
//!
//! A [`TraceError`] is built from a heterogeneous argument list. The first
//! argument is the message only when it is text; everything else becomes a
//! [`Cause`], and object payloads are additionally merged into the extra data.

use super::cause::Cause;
use super::types::TraceError;
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::sync::Arc;

/// A single constructor argument
#[derive(Debug, Clone)]
pub enum Arg {
    /// Text; the message when leading, data otherwise
    Text(String),
    /// Data payload
    Data(Value),
    /// A chainable error
    Trace(TraceError),
    /// Any other error
    Native(Arc<dyn StdError + Send + Sync>),
}

impl Arg {
    /// Wrap any error, recovering chainable errors hidden behind the type
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from(Box::new(error) as Box<dyn StdError + Send + Sync>)
    }

    fn into_text(self) -> Option<String> {
        match self {
            Arg::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_owned())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Data(value)
    }
}

impl From<Map<String, Value>> for Arg {
    fn from(map: Map<String, Value>) -> Self {
        Arg::Data(Value::Object(map))
    }
}

impl From<TraceError> for Arg {
    fn from(error: TraceError) -> Self {
        Arg::Trace(error)
    }
}

impl From<&TraceError> for Arg {
    fn from(error: &TraceError) -> Self {
        Arg::Trace(error.clone())
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Arg {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<TraceError>() {
            Ok(trace) => Arg::Trace(*trace),
            Err(other) => Arg::Native(Arc::from(other)),
        }
    }
}

impl From<std::io::Error> for Arg {
    fn from(error: std::io::Error) -> Self {
        Arg::error(error)
    }
}

impl From<anyhow::Error> for Arg {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<TraceError>() {
            Ok(trace) => Arg::Trace(trace),
            Err(other) => Self::from(Box::<dyn StdError + Send + Sync>::from(other)),
        }
    }
}

/// Result of classifying a constructor argument list
#[derive(Debug, Clone, Default)]
pub struct Parts {
    /// Leading text argument, empty when absent
    pub message: String,
    /// Remaining arguments in encounter order
    pub causes: Vec<Cause>,
    /// Object payloads merged in encounter order; later keys win
    pub extra: Map<String, Value>,
}

impl Parts {
    /// The first error-typed cause, which is what `source()` reports
    #[must_use]
    pub fn source(&self) -> Option<&Cause> {
        self.causes.iter().find(|cause| cause.is_error())
    }
}

/// Split an argument list into message, causes and extra data
///
/// Never fails. Non-leading text and non-object payloads are kept as
/// [`Cause::Data`] but contribute nothing to [`Parts::extra`].
pub fn classify<I>(args: I) -> Parts
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let message = args
        .next_if(|arg| matches!(arg, Arg::Text(_)))
        .and_then(Arg::into_text)
        .unwrap_or_default();

    let mut parts = Parts {
        message,
        ..Parts::default()
    };
    for arg in args {
        let cause = match arg {
            Arg::Text(text) => Cause::Data(Value::String(text)),
            Arg::Data(value) => {
                if let Value::Object(fields) = &value {
                    parts
                        .extra
                        .extend(fields.iter().map(|(key, field)| (key.clone(), field.clone())));
                }
                Cause::Data(value)
            }
            Arg::Trace(error) => Cause::Trace(error),
            Arg::Native(error) => Cause::Native(error),
        };
        parts.causes.push(cause);
    }
    parts
}
