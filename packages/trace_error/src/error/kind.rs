//! Subtype behaviour for [`TraceError`]
//!
//! A [`Kind`] plays the role of an error subclass: it names the error,
//! may override how the trace is rendered, and may expose extra named or
//! enumerable properties. Kinds form a single-inheritance chain through
//! [`Kind::parent`], ending at [`Base`].
//!
//! Overrides reach the inherited behaviour with an explicit call on the
//! parent kind (for example `Base.stack(error)`), never by re-entering
//! [`TraceError::stack`].

use super::types::TraceError;
use serde_json::{Map, Value};
use std::any::{type_name, TypeId};
use std::fmt;

/// Subtype capability of a [`TraceError`]
pub trait Kind: fmt::Debug + Send + Sync + 'static {
    /// Display name; defaults to the implementing type's name
    fn name(&self) -> &str {
        short_type_name(type_name::<Self>())
    }

    /// The kind this one extends
    fn parent(&self) -> Option<&dyn Kind> {
        Some(&Base)
    }

    /// Trace text for `error`
    ///
    /// Inherits the parent's rendering unless overridden.
    fn stack(&self, error: &TraceError) -> String {
        match self.parent() {
            Some(parent) => parent.stack(error),
            None => error.base_stack(),
        }
    }

    /// Named property defined by this kind or one of its ancestors
    fn property(&self, error: &TraceError, name: &str) -> Option<String> {
        self.parent()
            .and_then(|parent| parent.property(error, name))
    }

    /// Properties this kind contributes to the JSON view when prototype
    /// search is enabled. Only this level; ancestors are visited separately.
    fn enumerable_properties(&self, _error: &TraceError) -> Map<String, Value> {
        Map::new()
    }

    /// Type identity used by [`TraceError::is_kind`]
    #[doc(hidden)]
    fn kind_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

/// Root kind shared by every [`TraceError`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base;

impl Kind for Base {
    fn name(&self) -> &str {
        "TraceError"
    }

    fn parent(&self) -> Option<&dyn Kind> {
        None
    }
}

// "a::b::Thing<c::D>" -> "Thing"
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

impl TraceError {
    /// The kind this error was constructed with
    #[must_use]
    pub fn kind(&self) -> &dyn Kind {
        self.inner.kind.as_ref()
    }

    /// The kind followed by each of its ancestors, ending at [`Base`]
    pub fn ancestors(&self) -> impl Iterator<Item = &dyn Kind> {
        std::iter::successors(Some(self.kind()), |kind| {
            let kind: &dyn Kind = *kind;
            kind.parent()
        })
    }

    /// Whether this error's kind is `K` or extends it
    #[must_use]
    pub fn is_kind<K: Kind>(&self) -> bool {
        self.ancestors()
            .any(|kind| kind.kind_id() == TypeId::of::<K>())
    }
}
