//! Trace text resolution
//!
//! [`TraceError::stack`] asks the error's [`Kind`](super::Kind) for its
//! trace. Unless a kind overrides it, that ends in
//! [`TraceError::base_stack`], which reads the property named by the global
//! configuration and appends one `Caused by:` line per error-typed cause.
//!
//! Native causes go through the same property, seen as an
//! [`ErrorRef::Native`].
//!
//! A property getter may itself call `stack()` on the same error. Such a
//! nested resolution is detected per thread and answered with
//! [`TraceError::native_stack`], so no configuration can recurse forever.

use super::cause::Cause;
use super::error_ref::ErrorRef;
use super::types::TraceError;
use crate::config::{self, STACK_PROPERTY};
use log::debug;
use std::cell::RefCell;
use std::error::Error as StdError;
#[cfg(feature = "full-backtrace")]
use std::fmt::Write as _;

/// Symbols containing this belong to the crate itself
#[cfg(feature = "full-backtrace")]
const INTERNAL_FRAMES: &str = "trace_error::error::";

thread_local! {
    static RESOLVING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks an error as being resolved on this thread until dropped
struct ResolveGuard(usize);

impl ResolveGuard {
    fn enter(error: &TraceError) -> Option<Self> {
        let id = error.identity();
        RESOLVING.with(|resolving| {
            let mut resolving = resolving.borrow_mut();
            if resolving.contains(&id) {
                None
            } else {
                resolving.push(id);
                Some(Self(id))
            }
        })
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLVING.with(|resolving| {
            let mut resolving = resolving.borrow_mut();
            if let Some(pos) = resolving.iter().rposition(|id| *id == self.0) {
                resolving.remove(pos);
            }
        });
    }
}

impl TraceError {
    /// Trace text as rendered by this error's kind
    #[must_use]
    pub fn stack(&self) -> String {
        self.inner.kind.stack(self)
    }

    /// Trace text before any kind override
    ///
    /// Own trace (native, or the configured property) followed by the
    /// traces of error-typed causes. Data causes are not rendered.
    #[must_use]
    pub fn base_stack(&self) -> String {
        let Some(_guard) = ResolveGuard::enter(self) else {
            debug!("nested trace resolution for {}, using native trace", self.name());
            return self.native_stack();
        };

        let config = config::current();
        let mut trace = if config.stack_property == STACK_PROPERTY {
            self.native_stack()
        } else {
            self.property(&config.stack_property).unwrap_or_else(|| {
                debug!(
                    "trace property `{}` is not defined, using native trace",
                    config.stack_property
                );
                self.native_stack()
            })
        };

        for cause in self.causes() {
            match cause {
                Cause::Trace(error) => {
                    trace.push_str("\nCaused by: ");
                    trace.push_str(&error.stack());
                }
                Cause::Native(error) => {
                    let error: &(dyn StdError + 'static) = &**error;
                    trace.push_str("\nCaused by: ");
                    trace.push_str(&native_cause_stack(error, &config.stack_property));
                }
                Cause::Data(_) => {}
            }
        }
        trace
    }

    /// `Name: message` followed by the frames captured at construction,
    /// starting at the caller of the constructor
    #[must_use]
    pub fn native_stack(&self) -> String {
        #[cfg_attr(not(feature = "full-backtrace"), allow(unused_mut))]
        let mut trace = self.to_string();
        #[cfg(feature = "full-backtrace")]
        render_frames(&self.backtrace(), &mut trace);
        trace
    }

    /// Read a named property
    ///
    /// `name`, `message` and `stack` are built in. Other names are looked up
    /// on the kind chain first, then in the global property registry.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name().to_owned()),
            "message" => Some(self.message().to_owned()),
            STACK_PROPERTY => Some(self.stack()),
            _ => self
                .inner
                .kind
                .property(self, name)
                .or_else(|| config::property(name).map(|getter| getter(ErrorRef::Trace(self)))),
        }
    }
}

fn native_cause_stack(error: &(dyn StdError + 'static), property: &str) -> String {
    let view = ErrorRef::Native(error);
    if property == STACK_PROPERTY {
        return view.stack();
    }
    view.property(property).unwrap_or_else(|| view.stack())
}

#[cfg(feature = "full-backtrace")]
fn render_frames(backtrace: &backtrace::Backtrace, out: &mut String) {
    let symbols: Vec<&backtrace::BacktraceSymbol> = backtrace
        .frames()
        .iter()
        .flat_map(backtrace::BacktraceFrame::symbols)
        .collect();
    let start = symbols
        .iter()
        .rposition(|symbol| {
            symbol
                .name()
                .is_some_and(|name| name.to_string().contains(INTERNAL_FRAMES))
        })
        .map_or(0, |index| index + 1);

    // Writing into a String cannot fail
    for symbol in &symbols[start..] {
        match symbol.name() {
            Some(name) => {
                let _ = write!(out, "\n    at {name:#}");
            }
            None => out.push_str("\n    at <unknown>"),
        }
        if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
            let _ = write!(out, " ({}:{line})", file.display());
        }
    }
}
