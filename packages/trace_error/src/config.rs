//! Process-wide trace configuration
//!
//! Two switches affect every [`TraceError`](crate::TraceError):
//! - `stack_property`: the property that supplies an error's own trace text
//! - `search_prototype`: whether the JSON view includes kind properties
//!
//! Both are read on every trace or JSON request, so a change applies to
//! existing errors too. Changes are last-writer-wins; use [`scoped`] to
//! restore the previous configuration automatically.
//!
//! The initial values come from `TRACE_ERROR_STACK_PROPERTY` and
//! `TRACE_ERROR_SEARCH_PROTOTYPE` when set.

use crate::error::ErrorRef;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use log::{trace, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Name of the built-in trace property
pub const STACK_PROPERTY: &str = "stack";

/// Environment variable overriding the initial `stack_property`
pub const STACK_PROPERTY_ENV: &str = "TRACE_ERROR_STACK_PROPERTY";

/// Environment variable overriding the initial `search_prototype`
pub const SEARCH_PROTOTYPE_ENV: &str = "TRACE_ERROR_SEARCH_PROTOTYPE";

/// Getter for a globally defined trace property
pub type PropertyGetter = Arc<dyn Fn(ErrorRef<'_>) -> String + Send + Sync>;

static CONFIG: Lazy<ArcSwap<TraceConfig>> = Lazy::new(|| ArcSwap::from_pointee(initial()));

static PROPERTIES: Lazy<DashMap<String, PropertyGetter>> = Lazy::new(DashMap::new);

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognised flag
    #[error("invalid boolean `{value}` for {var}")]
    InvalidFlag {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },

    /// A property name was empty
    #[error("empty trace property name in {var}")]
    EmptyProperty {
        /// Variable name
        var: &'static str,
    },
}

/// Result type alias for configuration parsing
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Trace rendering switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Property supplying each error's own trace text
    pub stack_property: String,
    /// Include kind properties in the JSON view
    pub search_prototype: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            stack_property: STACK_PROPERTY.to_owned(),
            search_prototype: false,
        }
    }
}

impl TraceConfig {
    /// Read the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(property) = lookup(STACK_PROPERTY_ENV) {
            let property = property.trim();
            if property.is_empty() {
                return Err(ConfigError::EmptyProperty {
                    var: STACK_PROPERTY_ENV,
                });
            }
            config.stack_property = property.to_owned();
        }
        if let Some(flag) = lookup(SEARCH_PROTOTYPE_ENV) {
            config.search_prototype = parse_flag(SEARCH_PROTOTYPE_ENV, &flag)?;
        }
        Ok(config)
    }

    /// Set the trace property
    #[must_use]
    pub fn with_stack_property<S: Into<String>>(mut self, property: S) -> Self {
        self.stack_property = property.into();
        self
    }

    /// Set prototype search
    #[must_use]
    pub fn with_search_prototype(mut self, enabled: bool) -> Self {
        self.search_prototype = enabled;
        self
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_owned(),
        }),
    }
}

fn initial() -> TraceConfig {
    TraceConfig::from_env().unwrap_or_else(|err| {
        warn!("{err}; using default trace configuration");
        TraceConfig::default()
    })
}

/// The configuration in effect
#[must_use]
pub fn current() -> Arc<TraceConfig> {
    CONFIG.load_full()
}

/// Install `config`, returning the one it replaced
pub fn replace(config: TraceConfig) -> Arc<TraceConfig> {
    trace!(
        "trace configuration set: stack_property={}, search_prototype={}",
        config.stack_property,
        config.search_prototype
    );
    CONFIG.swap(Arc::new(config))
}

/// Restore the default configuration, returning the one it replaced
pub fn reset() -> Arc<TraceConfig> {
    replace(TraceConfig::default())
}

/// Change which property supplies trace text
pub fn set_global_stack_property<S: Into<String>>(property: S) {
    let property = property.into();
    trace!("trace property set to `{property}`");
    CONFIG.rcu(|config| TraceConfig::clone(config).with_stack_property(property.clone()));
}

/// Turn prototype search in the JSON view on or off
pub fn set_search_prototype(enabled: bool) {
    trace!("prototype search set to {enabled}");
    CONFIG.rcu(|config| TraceConfig::clone(config).with_search_prototype(enabled));
}

/// Install `config` until the returned guard is dropped
pub fn scoped(config: TraceConfig) -> ConfigGuard {
    ConfigGuard {
        previous: Some(replace(config)),
    }
}

/// Restores the previous configuration on drop
#[derive(Debug)]
#[must_use = "the previous configuration is restored when the guard is dropped"]
pub struct ConfigGuard {
    previous: Option<Arc<TraceConfig>>,
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            trace!("trace configuration restored");
            CONFIG.store(previous);
        }
    }
}

/// Define a trace property available on every error, returning the getter
/// it replaced
///
/// The getter also runs for native causes. Kinds that define a property of
/// the same name take precedence.
pub fn define_property<S, F>(name: S, getter: F) -> Option<PropertyGetter>
where
    S: Into<String>,
    F: Fn(ErrorRef<'_>) -> String + Send + Sync + 'static,
{
    let name = name.into();
    trace!("trace property `{name}` defined");
    PROPERTIES.insert(name, Arc::new(getter))
}

/// Define a trace property until the returned guard is dropped
///
/// On drop the getter it replaced is reinstated, or the property removed.
pub fn scoped_property<S, F>(name: S, getter: F) -> PropertyGuard
where
    S: Into<String>,
    F: Fn(ErrorRef<'_>) -> String + Send + Sync + 'static,
{
    let name = name.into();
    let previous = define_property(name.clone(), getter);
    PropertyGuard { name, previous }
}

/// Restores a trace property on drop
#[must_use = "the property is restored when the guard is dropped"]
pub struct PropertyGuard {
    name: String,
    previous: Option<PropertyGetter>,
}

impl std::fmt::Debug for PropertyGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyGuard")
            .field("name", &self.name)
            .field("replaced", &self.previous.is_some())
            .finish()
    }
}

impl Drop for PropertyGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => {
                PROPERTIES.insert(self.name.clone(), previous);
            }
            None => {
                PROPERTIES.remove(&self.name);
            }
        }
        trace!("trace property `{}` restored", self.name);
    }
}

/// Remove a globally defined trace property
pub fn remove_property(name: &str) -> Option<PropertyGetter> {
    PROPERTIES.remove(name).map(|(_, getter)| getter)
}

/// Look up a globally defined trace property
#[must_use]
pub fn property(name: &str) -> Option<PropertyGetter> {
    PROPERTIES.get(name).map(|entry| Arc::clone(entry.value()))
}
