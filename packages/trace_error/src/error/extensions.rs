//! Extension traits for wrapping results and options

use super::args::Arg;
use super::types::TraceError;
use std::error::Error as StdError;

/// Wrap a failed result's error as the cause of a new [`TraceError`]
pub trait ResultExt<T> {
    /// Wrap the error under `message`
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `Err`.
    fn trace<S: Into<String>>(self, message: S) -> Result<T, TraceError>;

    /// Wrap the error under a lazily built message
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `Err`.
    fn trace_with<F>(self, message: F) -> Result<T, TraceError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn trace<S: Into<String>>(self, message: S) -> Result<T, TraceError> {
        self.map_err(|error| TraceError::new([Arg::Text(message.into()), Arg::error(error)]))
    }

    fn trace_with<F>(self, message: F) -> Result<T, TraceError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|error| TraceError::new([Arg::Text(message()), Arg::error(error)]))
    }
}

/// Turn `None` into a [`TraceError`]
pub trait OptionExt<T> {
    /// Replace `None` with an error carrying `message`
    ///
    /// # Errors
    ///
    /// Returns the error when `self` is `None`.
    fn trace_none<S: Into<String>>(self, message: S) -> Result<T, TraceError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn trace_none<S: Into<String>>(self, message: S) -> Result<T, TraceError> {
        self.ok_or_else(|| TraceError::msg(message))
    }
}
