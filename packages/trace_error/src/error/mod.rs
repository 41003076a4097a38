//! Chainable error type
//!
//! Provides the error value itself plus everything hanging off it:
//! - Argument classification for multi-argument construction
//! - Cause lists, source chains and flattened messages
//! - Subtype behaviour through the [`Kind`] trait
//! - Trace resolution and the JSON view

pub mod args;
pub mod cause;
pub mod chain;
pub mod constructors;
pub mod display;
pub mod error_ref;
pub mod extensions;
pub mod json;
pub mod kind;
pub mod stack;
pub mod types;

pub use args::{classify, Arg, Parts};
pub use cause::{Cause, Message};
pub use chain::Chain;
pub use error_ref::ErrorRef;
pub use extensions::{OptionExt, ResultExt};
pub use kind::{Base, Kind};
pub use types::TraceError;
