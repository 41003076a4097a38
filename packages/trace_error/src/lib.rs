//! Chainable error values with configurable trace rendering
//!
//! This crate provides a single error type, [`TraceError`], with:
//! - Multi-argument construction (message, data payloads and causes in any order)
//! - Cause lists and flattened message chains
//! - Trace text resolved through a process-wide, swappable property name
//! - Hidden per-instance properties and a stable JSON view

pub mod config;
pub mod error;
pub mod logging;
#[doc(hidden)]
pub mod macros;

pub use config::{ConfigError, ConfigGuard, PropertyGuard, TraceConfig};
pub use error::*;
pub use logging::TraceLogger;
