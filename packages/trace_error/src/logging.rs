//! Logging support for trace errors
//!
//! The crate logs through the `log` facade. [`TraceLogger`] installs an
//! `env_logger` backend for binaries and tests and renders error chains.
//! Configure levels via `RUST_LOG`, e.g. `RUST_LOG=trace_error=debug`.

use crate::error::TraceError;
use log::{debug, error, info};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// `env_logger` setup and error chain logging
pub struct TraceLogger;

impl TraceLogger {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("trace_error logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log an error at `error` level and its flattened chain at `debug`
    pub fn log_error(error: &TraceError) {
        error!("{error}");
        for (position, message) in error.messages().iter().enumerate().skip(1) {
            debug!("  [{position}] {message}");
        }
    }

    /// Log an error with its full trace
    pub fn log_error_trace(error: &TraceError) {
        error!("{}", error.stack());
    }
}
