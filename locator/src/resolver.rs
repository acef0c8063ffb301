//! Short identifier to fully-qualified class name resolution.
//!
//! Lookups go through, in order: explicit overrides, the memoized answers of
//! earlier lookups, then existence probing of `namespace + id` and plain `id`
//! against the [`ClassRegistry`].
//!
//! Memoized answers are only dropped by the mutations on this type. A class
//! registered after an identifier was memoized does not change that answer
//! until the namespace or the overrides change, or `reset_cache` is called.

use crate::error::{LocatorError, Result};
use crate::registry::ClassRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct ResolverState {
  namespace: String,
  overrides: HashMap<String, String>,
  cache: HashMap<String, String>,
}

impl ResolverState {
  // Overrides are mirrored into the cache on write, but they are checked
  // first so an override always wins.
  fn known(&self, id: &str) -> Option<&String> {
    self.overrides.get(id).or_else(|| self.cache.get(id))
  }

  fn qualified(&self, id: &str) -> String {
    format!("{}{}", self.namespace, id)
  }
}

/// Resolves short class identifiers within a mutable namespace.
///
/// All state sits behind one lock, so every mutation and every
/// check-then-memoize step is a single critical section.
#[derive(Debug)]
pub struct ClassResolver {
  default_namespace: String,
  state: RwLock<ResolverState>,
}

impl ClassResolver {
  /// Creates a resolver whose namespace starts at, and resets to,
  /// `default_namespace`.
  pub fn new(default_namespace: impl Into<String>) -> Self {
    let default_namespace = default_namespace.into();
    Self {
      state: RwLock::new(ResolverState {
        namespace: default_namespace.clone(),
        ..ResolverState::default()
      }),
      default_namespace,
    }
  }

  pub fn namespace(&self) -> String {
    self.state.read().namespace.clone()
  }

  pub fn default_namespace(&self) -> &str {
    &self.default_namespace
  }

  /// Resolves `id` to a registered class, failing with `UnknownClass` when
  /// neither an override, a memoized answer, `namespace + id` nor `id` names
  /// a class in `classes`.
  pub fn resolve(&self, id: &str, classes: &ClassRegistry) -> Result<String> {
    self.lookup(id, classes, true)
  }

  /// Best-effort resolution that never fails: when nothing matches, the
  /// namespace-qualified name is returned (and memoized).
  pub fn class_name(&self, id: &str, classes: &ClassRegistry) -> String {
    // The non-validating path has no failure case.
    self
      .lookup(id, classes, false)
      .unwrap_or_else(|_| self.state.read().qualified(id))
  }

  fn lookup(&self, id: &str, classes: &ClassRegistry, validate: bool) -> Result<String> {
    {
      let state = self.state.read();
      if let Some(class) = state.known(id) {
        tracing::trace!(id, class = %class, "class lookup hit");
        return Self::check(id, class.clone(), &state, classes, validate);
      }
    }

    let mut state = self.state.write();
    // Another caller may have filled the entry between the two locks.
    if let Some(class) = state.known(id) {
      return Self::check(id, class.clone(), &state, classes, validate);
    }

    let qualified = state.qualified(id);
    let class = if classes.contains(&qualified) {
      qualified
    } else if classes.contains(id) {
      id.to_owned()
    } else if !validate {
      qualified
    } else {
      tracing::trace!(id, qualified = %qualified, "class lookup miss");
      return Err(LocatorError::UnknownClass {
        class: id.to_owned(),
        tried: id.to_owned(),
        qualified,
      });
    };

    tracing::trace!(id, class = %class, "class lookup memoized");
    state.cache.insert(id.to_owned(), class.clone());
    Ok(class)
  }

  fn check(
    id: &str,
    class: String,
    state: &ResolverState,
    classes: &ClassRegistry,
    validate: bool,
  ) -> Result<String> {
    if validate && !classes.contains(&class) {
      return Err(LocatorError::UnknownClass {
        class: id.to_owned(),
        tried: class,
        qualified: state.qualified(id),
      });
    }
    Ok(class)
  }

  /// Switches to a new namespace and forgets every memoized answer.
  pub fn set_namespace(&self, namespace: impl Into<String>) {
    let namespace = namespace.into();
    tracing::debug!(namespace = %namespace, "namespace changed");
    let mut state = self.state.write();
    state.namespace = namespace;
    state.cache.clear();
  }

  /// Restores the default namespace and forgets every memoized answer.
  pub fn reset_namespace(&self) {
    self.set_namespace(self.default_namespace.clone());
  }

  /// Makes `id` resolve to `class` regardless of the namespace.
  pub fn override_class(&self, id: &str, class: impl Into<String>) {
    let class = class.into();
    tracing::debug!(id, class = %class, "class overridden");
    let mut state = self.state.write();
    state.overrides.insert(id.to_owned(), class.clone());
    state.cache.insert(id.to_owned(), class);
  }

  pub fn override_of(&self, id: &str) -> Option<String> {
    self.state.read().overrides.get(id).cloned()
  }

  /// Drops the override for `id`; the next lookup recomputes it.
  pub fn clear_override(&self, id: &str) {
    tracing::debug!(id, "class override cleared");
    let mut state = self.state.write();
    state.overrides.remove(id);
    state.cache.remove(id);
  }

  /// Drops every override and every memoized answer.
  pub fn clear_overrides(&self) {
    tracing::debug!("all class overrides cleared");
    let mut state = self.state.write();
    state.overrides.clear();
    state.cache.clear();
  }

  /// Forgets every memoized answer, keeping namespace and overrides.
  pub fn reset_cache(&self) {
    self.state.write().cache.clear();
  }
}

impl Default for ClassResolver {
  fn default() -> Self {
    Self::new("")
  }
}
