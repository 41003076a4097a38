//! Error constructors and accessors

use super::args::{classify, Arg, Parts};
use super::cause::Cause;
use super::kind::{Base, Kind};
use super::types::{ErrorInner, TraceError};
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::Arc;
#[cfg(feature = "full-backtrace")]
use std::sync::{Mutex, PoisonError};

impl TraceError {
    /// Create an error of the base kind from an argument list
    ///
    /// The first argument is the message if it is text. Every other
    /// argument is kept as a [`Cause`] in the order given.
    #[must_use]
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::with_kind(Base, args)
    }

    /// Create an error of a specific kind from an argument list
    #[must_use]
    pub fn with_kind<K, I>(kind: K, args: I) -> Self
    where
        K: Kind,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::from_parts(kind, classify(args))
    }

    /// Create an error of a specific kind from already classified parts
    #[must_use]
    pub fn from_parts<K: Kind>(kind: K, parts: Parts) -> Self {
        let Parts {
            message,
            causes,
            extra,
        } = parts;
        Self {
            inner: Arc::new(ErrorInner {
                kind: Box::new(kind),
                message,
                causes,
                extra,
                hidden: DashMap::new(),
                #[cfg(feature = "full-backtrace")]
                backtrace: Mutex::new(backtrace::Backtrace::new_unresolved()),
            }),
        }
    }

    /// Create an error carrying only a message
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new([Arg::Text(message.into())])
    }

    /// The kind's name, e.g. `TraceError`
    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.kind.name()
    }

    /// The message, empty when none was given
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Every non-message argument, in encounter order
    #[must_use]
    pub fn causes(&self) -> &[Cause] {
        &self.inner.causes
    }

    /// Object payloads merged in encounter order
    #[must_use]
    pub fn extra_data(&self) -> &Map<String, Value> {
        &self.inner.extra
    }

    /// Visible keys: `name`, `message`, then the extra data keys
    ///
    /// Hidden properties never appear here.
    #[must_use]
    pub fn own_keys(&self) -> Vec<String> {
        ["name", "message"]
            .into_iter()
            .map(str::to_owned)
            .chain(self.inner.extra.keys().cloned())
            .collect()
    }

    /// Store a value that is excluded from [`own_keys`](Self::own_keys) and
    /// the JSON view
    pub fn define_hidden_property<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.inner.hidden.insert(key.into(), value.into());
    }

    /// Read back a hidden property
    #[must_use]
    pub fn hidden_property(&self, key: &str) -> Option<Value> {
        self.inner.hidden.get(key).map(|entry| entry.value().clone())
    }

    /// Get the backtrace captured at construction
    ///
    /// Symbols are resolved on the first call.
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> backtrace::Backtrace {
        let mut backtrace = self
            .inner
            .backtrace
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        backtrace.resolve();
        backtrace.clone()
    }

    /// Identity shared by clones of this error
    pub(super) fn identity(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl Default for TraceError {
    fn default() -> Self {
        Self::new(std::iter::empty::<Arg>())
    }
}
