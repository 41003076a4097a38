//! Core error type definition

use super::cause::Cause;
use super::kind::Kind;
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::Arc;
#[cfg(feature = "full-backtrace")]
use std::sync::Mutex;

/// Error value carrying a message, an ordered cause list and extra data
///
/// Cloning is cheap and preserves identity: clones share the same hidden
/// properties and resolve as the same instance during trace rendering.
#[derive(Debug, Clone)]
pub struct TraceError {
    /// The shared error state
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// Subtype behaviour (name, trace overrides, extra properties)
    pub kind: Box<dyn Kind>,
    /// Leading text argument, empty when none was given
    pub message: String,
    /// Every non-message argument, in encounter order
    pub causes: Vec<Cause>,
    /// Object payloads merged in encounter order
    pub extra: Map<String, Value>,
    /// Values excluded from keys and the JSON view
    pub hidden: DashMap<String, Value>,
    /// Backtrace captured at error creation, symbolized on first render
    #[cfg(feature = "full-backtrace")]
    pub backtrace: Mutex<backtrace::Backtrace>,
}
