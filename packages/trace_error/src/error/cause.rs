//! Cause entries and flattened messages

use super::types::TraceError;
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// One non-message constructor argument, kept in encounter order
#[derive(Debug, Clone)]
pub enum Cause {
    /// Plain data payload, stored as given
    Data(Value),
    /// Another chainable error
    Trace(TraceError),
    /// Any other error
    Native(Arc<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Message of an error cause; `None` for data
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Cause::Data(_) => None,
            Cause::Trace(error) => Some(error.message().to_owned()),
            Cause::Native(error) => Some(error.to_string()),
        }
    }

    /// The payload of a data cause
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            Cause::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Look up a field on a data payload or on a chainable error's extra data
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Cause::Data(value) => value.get(key),
            Cause::Trace(error) => error.extra_data().get(key),
            Cause::Native(_) => None,
        }
    }

    /// The chainable error, if this cause is one
    #[must_use]
    pub fn as_trace(&self) -> Option<&TraceError> {
        match self {
            Cause::Trace(error) => Some(error),
            _ => None,
        }
    }

    /// The cause as a standard error; `None` for data
    #[must_use]
    pub fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Cause::Data(_) => None,
            Cause::Trace(error) => Some(error as &(dyn StdError + 'static)),
            Cause::Native(error) => Some(&**error as &(dyn StdError + 'static)),
        }
    }

    /// Whether this cause is error-typed
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Cause::Data(_))
    }
}

/// Entry of a flattened message chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// An error message
    Text(String),
    /// A data payload, as given at construction
    Data(Value),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Data(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_owned())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Data(value)
    }
}
