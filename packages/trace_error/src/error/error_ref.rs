//! Borrowed view over any error in a chain

use super::types::TraceError;
use crate::config::{self, STACK_PROPERTY};
use std::error::Error as StdError;

/// Name reported for errors that are not a [`TraceError`]
pub const NATIVE_NAME: &str = "Error";

/// An error as seen by a trace property getter
///
/// Getters registered with [`config::define_property`] run for every error
/// whose trace is rendered, including native causes.
#[derive(Debug, Clone, Copy)]
pub enum ErrorRef<'a> {
    /// A chainable error
    Trace(&'a TraceError),
    /// Any other error
    Native(&'a (dyn StdError + 'static)),
}

impl<'a> ErrorRef<'a> {
    /// The kind name, or `Error` for native errors
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            ErrorRef::Trace(error) => error.name(),
            ErrorRef::Native(_) => NATIVE_NAME,
        }
    }

    /// The message; a native error's display text
    #[must_use]
    pub fn message(&self) -> String {
        match *self {
            ErrorRef::Trace(error) => error.message().to_owned(),
            ErrorRef::Native(error) => error.to_string(),
        }
    }

    /// The rendered trace
    ///
    /// Native errors carry no backtrace, so theirs is `Error: message`.
    #[must_use]
    pub fn stack(&self) -> String {
        match *self {
            ErrorRef::Trace(error) => error.stack(),
            ErrorRef::Native(error) => native_header(error),
        }
    }

    /// Read a named property, as [`TraceError::property`] does
    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        match *self {
            ErrorRef::Trace(error) => error.property(name),
            ErrorRef::Native(_) => match name {
                "name" => Some(NATIVE_NAME.to_owned()),
                "message" => Some(self.message()),
                STACK_PROPERTY => Some(self.stack()),
                _ => config::property(name).map(|getter| getter(*self)),
            },
        }
    }

    /// The underlying error
    #[must_use]
    pub fn as_error(&self) -> &'a (dyn StdError + 'static) {
        match *self {
            ErrorRef::Trace(error) => error as &(dyn StdError + 'static),
            ErrorRef::Native(error) => error,
        }
    }
}

impl<'a> From<&'a TraceError> for ErrorRef<'a> {
    fn from(error: &'a TraceError) -> Self {
        ErrorRef::Trace(error)
    }
}

pub(super) fn native_header(error: &dyn StdError) -> String {
    format!("{NATIVE_NAME}: {error}")
}
