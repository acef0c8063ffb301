//! The class universe: every constructible class, keyed by its
//! fully-qualified name.

use crate::core::{Args, Instance};
use crate::error::{LocatorError, Result};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// A constructor for one class. Receives the positional arguments and
/// returns the built object.
pub type Constructor = Arc<dyn Fn(&Args) -> Result<Instance> + Send + Sync>;

/// Thread-safe table of class constructors, populated by the host at startup.
#[derive(Default)]
pub struct ClassRegistry {
  classes: DashMap<String, Constructor>,
}

impl ClassRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `class` with a constructor producing a `T`.
  ///
  /// Registering the same name twice replaces the previous constructor.
  pub fn register<T: Any + Send + Sync>(
    &self,
    class: &str,
    ctor: impl Fn(&Args) -> Result<T> + Send + Sync + 'static,
  ) {
    let ctor: Constructor =
      Arc::new(move |args: &Args| -> Result<Instance> { Ok(Arc::new(ctor(args)?)) });
    self.register_raw(class, ctor);
  }

  /// Registers an already type-erased constructor.
  pub fn register_raw(&self, class: &str, ctor: Constructor) {
    tracing::debug!(class, "registering class");
    self.classes.insert(class.to_owned(), ctor);
  }

  pub fn unregister(&self, class: &str) -> bool {
    self.classes.remove(class).is_some()
  }

  pub fn contains(&self, class: &str) -> bool {
    self.classes.contains_key(class)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }

  /// Runs the constructor registered under the fully-qualified `class`.
  pub fn construct(&self, class: &str, args: &Args) -> Result<Instance> {
    // Clone the constructor out so the shard lock is released before user
    // code runs; constructors may call back into the locator.
    let ctor = self
      .classes
      .get(class)
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| LocatorError::UnknownClass {
        class: class.to_owned(),
        tried: class.to_owned(),
        qualified: class.to_owned(),
      })?;
    tracing::trace!(class, args = args.len(), "constructing instance");
    ctor(args)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::args;

  struct Pair(u32, u32);

  #[test]
  fn construct_passes_arguments_through() {
    let registry = ClassRegistry::new();
    registry.register("Pair", |a: &Args| Ok(Pair(*a.get::<u32>(0)?, *a.get::<u32>(1)?)));

    let instance = registry.construct("Pair", &args![3_u32, 4_u32]).unwrap();
    let pair = instance.downcast_ref::<Pair>().unwrap();
    assert_eq!((pair.0, pair.1), (3, 4));
  }

  #[test]
  fn constructor_errors_propagate() {
    let registry = ClassRegistry::new();
    registry.register("Pair", |a: &Args| Ok(Pair(*a.get::<u32>(0)?, 0)));

    let err = registry.construct("Pair", &args![]).err().unwrap();
    assert_eq!(err, LocatorError::MissingArgument(0));
  }

  #[test]
  fn unknown_and_unregistered_classes() {
    let registry = ClassRegistry::new();
    assert!(registry.construct("Nope", &Args::new()).is_err());

    registry.register("Unit", |_: &Args| Ok(()));
    assert!(registry.contains("Unit"));
    assert!(registry.unregister("Unit"));
    assert!(!registry.contains("Unit"));
    assert!(registry.is_empty());
  }
}
