//! Construction-time configuration for a [`Locator`](crate::Locator).

use crate::error::{LocatorError, Result};
use crate::locator::Locator;
use crate::registry::ClassRegistry;
use serde::Deserialize;
use std::sync::Arc;

/// The highest constructor arity supported unless configured otherwise.
pub const DEFAULT_MAX_PARAMETERS: usize = 6;

/// Settings fixed when a locator is created.
///
/// ```
/// use fibre_locator::LocatorConfig;
///
/// let config = LocatorConfig::from_yaml_str("default_namespace: \"App.\"").unwrap();
/// assert_eq!(config.default_namespace, "App.");
/// assert_eq!(config.max_parameters, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
  /// Namespace prefix restored by `reset_namespace`.
  pub default_namespace: String,
  /// Upper bound on positional constructor arguments.
  pub max_parameters: usize,
}

impl Default for LocatorConfig {
  fn default() -> Self {
    Self {
      default_namespace: String::new(),
      max_parameters: DEFAULT_MAX_PARAMETERS,
    }
  }
}

impl LocatorConfig {
  pub fn new(default_namespace: impl Into<String>) -> Self {
    Self {
      default_namespace: default_namespace.into(),
      ..Self::default()
    }
  }

  /// Parses a YAML (or JSON) document. Missing fields take their defaults.
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    serde_yaml::from_str(source).map_err(|e| LocatorError::Config(e.to_string()))
  }
}

/// A builder for creating [`Locator`] instances.
#[derive(Default)]
pub struct LocatorBuilder {
  config: LocatorConfig,
  classes: Option<Arc<ClassRegistry>>,
}

impl LocatorBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the namespace the locator starts with and returns to on reset.
  pub fn default_namespace(mut self, namespace: impl Into<String>) -> Self {
    self.config.default_namespace = namespace.into();
    self
  }

  /// Sets the constructor arity ceiling.
  pub fn max_parameters(mut self, max: usize) -> Self {
    self.config.max_parameters = max;
    self
  }

  pub fn config(mut self, config: LocatorConfig) -> Self {
    self.config = config;
    self
  }

  /// Shares an existing class registry instead of starting with an empty one.
  /// Several locators with different namespaces can then resolve against the
  /// same set of classes.
  pub fn classes(mut self, classes: Arc<ClassRegistry>) -> Self {
    self.classes = Some(classes);
    self
  }

  pub fn build(self) -> Locator {
    let classes = self.classes.unwrap_or_default();
    Locator::from_parts(self.config, classes)
  }
}
