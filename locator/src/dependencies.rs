//! The named dependency table: specs, stored instances and cached singletons.

use crate::core::{normalize_name, DependencyEntry, DependencySpec, Instance};
use crate::dispatch::Value;
use crate::error::{LocatorError, Result};
use dashmap::DashMap;
use std::sync::Arc;

/// Maps dependency names to the way their instance is obtained.
///
/// Names are case-insensitive. Each entry owns its singleton slot, so
/// replacing an entry can never leave an instance built from an older spec
/// behind.
#[derive(Default)]
pub struct DependencyRegistry {
  entries: DashMap<String, Arc<DependencyEntry>>,
}

impl DependencyRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records (or replaces) the spec for `name`, evicting any cached instance.
  pub fn define(&self, name: &str, spec: DependencySpec) {
    tracing::debug!(
      name,
      class = %spec.class,
      args = spec.args.len(),
      singleton = spec.singleton,
      "dependency defined"
    );
    self
      .entries
      .insert(normalize_name(name), Arc::new(DependencyEntry::from_spec(spec)));
  }

  /// Registers a value as the resolved instance for `name`. Only
  /// `Value::Instance` is accepted.
  pub fn store(&self, name: &str, value: Value) -> Result<()> {
    match value {
      Value::Instance(instance) => {
        self.store_instance(name, instance);
        Ok(())
      }
      _ => Err(LocatorError::InvalidDependencyValue(name.to_owned())),
    }
  }

  pub fn store_instance(&self, name: &str, instance: Instance) {
    tracing::debug!(name, "dependency instance stored");
    self.entries.insert(
      normalize_name(name),
      Arc::new(DependencyEntry::from_instance(instance)),
    );
  }

  /// Returns the instance for `name`.
  ///
  /// Singletons are built with `build` on first access and cached; multitons
  /// are built on every call.
  pub fn get(
    &self,
    name: &str,
    build: impl FnOnce(&DependencySpec) -> Result<Instance>,
  ) -> Result<Instance> {
    // Take the entry out of the map so construction runs without a shard
    // lock held.
    let entry = self
      .entries
      .get(&normalize_name(name))
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| LocatorError::MissingDependency(name.to_owned()))?;

    match entry.as_ref() {
      DependencyEntry::Singleton { spec, cell } => cell
        .get_or_try_init(|| match spec {
          Some(spec) => {
            tracing::trace!(name, "building singleton dependency");
            build(spec)
          }
          None => Err(LocatorError::MissingDependency(name.to_owned())),
        })
        .cloned(),
      DependencyEntry::Multiton { spec } => {
        tracing::trace!(name, "building multiton dependency");
        build(spec)
      }
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.entries.contains_key(&normalize_name(name))
  }

  /// The recorded spec, or `None` for unknown names and stored instances.
  pub fn spec(&self, name: &str) -> Option<DependencySpec> {
    self
      .entries
      .get(&normalize_name(name))
      .and_then(|entry| entry.spec().cloned())
  }

  pub fn is_singleton(&self, name: &str) -> Option<bool> {
    self
      .entries
      .get(&normalize_name(name))
      .map(|entry| entry.is_singleton())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Drops every spec, stored instance and cached singleton.
  pub fn reset(&self) {
    tracing::debug!(count = self.entries.len(), "dependencies reset");
    self.entries.clear();
  }
}
