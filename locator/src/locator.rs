//! The main `Locator` struct and its associated methods.

use crate::config::{LocatorBuilder, LocatorConfig};
use crate::core::{downcast, Args, DependencySpec, Instance};
use crate::dependencies::DependencyRegistry;
use crate::dispatch::Value;
use crate::error::{LocatorError, Result};
use crate::registry::ClassRegistry;
use crate::resolver::ClassResolver;
use std::any::Any;
use std::sync::Arc;

/// A service locator scoped to one namespace.
///
/// It resolves short class identifiers to registered classes, constructs
/// them, and manages named dependencies built from those classes.
pub struct Locator {
  config: LocatorConfig,
  classes: Arc<ClassRegistry>,
  resolver: ClassResolver,
  dependencies: DependencyRegistry,
}

impl Default for Locator {
  fn default() -> Self {
    Self::new()
  }
}

impl Locator {
  /// Creates a locator with an empty namespace and no classes.
  pub fn new() -> Self {
    Self::with_config(LocatorConfig::default())
  }

  pub fn with_config(config: LocatorConfig) -> Self {
    Self::from_parts(config, Arc::default())
  }

  pub fn builder() -> LocatorBuilder {
    LocatorBuilder::new()
  }

  pub(crate) fn from_parts(config: LocatorConfig, classes: Arc<ClassRegistry>) -> Self {
    Self {
      resolver: ClassResolver::new(config.default_namespace.clone()),
      dependencies: DependencyRegistry::new(),
      classes,
      config,
    }
  }

  pub fn config(&self) -> &LocatorConfig {
    &self.config
  }

  /// The class universe this locator resolves against.
  pub fn classes(&self) -> &Arc<ClassRegistry> {
    &self.classes
  }

  // --- Class Registration ---

  /// Registers a constructible class under its fully-qualified name.
  pub fn register_class<T: Any + Send + Sync>(
    &self,
    class: &str,
    ctor: impl Fn(&Args) -> Result<T> + Send + Sync + 'static,
  ) {
    self.classes.register(class, ctor);
  }

  // --- Namespace ---

  pub fn namespace(&self) -> String {
    self.resolver.namespace()
  }

  pub fn set_namespace(&self, namespace: impl Into<String>) {
    self.resolver.set_namespace(namespace);
  }

  pub fn reset_namespace(&self) {
    self.resolver.reset_namespace();
  }

  // --- Class Resolution ---

  /// Returns the class `id` resolves to without checking that it exists.
  pub fn class_name(&self, id: &str) -> String {
    self.resolver.class_name(id, &self.classes)
  }

  /// Returns the registered class `id` resolves to.
  pub fn resolve(&self, id: &str) -> Result<String> {
    self.resolver.resolve(id, &self.classes)
  }

  /// Makes `id` resolve to `class`, ignoring the namespace.
  pub fn replace_class(&self, id: &str, class: impl Into<String>) {
    self.resolver.override_class(id, class);
  }

  pub fn reset_class(&self, id: &str) {
    self.resolver.clear_override(id);
  }

  pub fn reset_classes(&self) {
    self.resolver.clear_overrides();
  }

  pub fn reset_cache(&self) {
    self.resolver.reset_cache();
  }

  // --- Construction ---

  /// Resolves `id` and builds a new instance from the positional `args`.
  ///
  /// Fails with `UnknownClass` when `id` does not resolve and with
  /// `TooManyParameters` when `args` exceeds the configured arity ceiling.
  pub fn create(&self, id: &str, args: &Args) -> Result<Instance> {
    let class = self.resolve(id)?;
    let max = self.config.max_parameters;
    if args.len() > max {
      return Err(LocatorError::TooManyParameters {
        given: args.len(),
        max,
      });
    }
    self.classes.construct(&class, args)
  }

  pub fn create_as<T: Any + Send + Sync>(&self, id: &str, args: &Args) -> Result<Arc<T>> {
    downcast(id, self.create(id, args)?)
  }

  // --- Dependencies ---

  /// Defines `name` as an instance of `class` built from `args`.
  pub fn define(&self, name: &str, class: &str, args: Args, singleton: bool) {
    self.define_with(
      name,
      DependencySpec::new(class).with_args(args).singleton(singleton),
    );
  }

  pub fn define_with(&self, name: &str, spec: DependencySpec) {
    self.dependencies.define(name, spec);
  }

  /// Defines `name` and immediately returns its instance.
  pub fn initialize(&self, name: &str, spec: DependencySpec) -> Result<Instance> {
    self.define_with(name, spec);
    self.get(name)
  }

  /// Registers `value` as the instance returned for `name`.
  ///
  /// An [`Instance`] passed here is stored as is, so `get` hands back that
  /// same object.
  pub fn set<T: Any + Send + Sync>(&self, name: &str, value: T) {
    let value: Box<dyn Any + Send + Sync> = Box::new(value);
    let instance = match value.downcast::<Instance>() {
      Ok(instance) => *instance,
      Err(value) => Arc::from(value),
    };
    self.set_instance(name, instance);
  }

  /// Registers an already type-erased instance for `name`.
  pub fn set_instance(&self, name: &str, instance: Instance) {
    self.dependencies.store_instance(name, instance);
  }

  /// Registers a dispatch value as the instance for `name`; anything but
  /// `Value::Instance` fails with `InvalidDependencyValue`.
  pub fn store(&self, name: &str, value: Value) -> Result<()> {
    self.dependencies.store(name, value)
  }

  pub fn get(&self, name: &str) -> Result<Instance> {
    self
      .dependencies
      .get(name, |spec| self.create(&spec.class, &spec.args))
  }

  pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
    downcast(name, self.get(name)?)
  }

  pub fn contains_dependency(&self, name: &str) -> bool {
    self.dependencies.contains(name)
  }

  pub fn dependency_spec(&self, name: &str) -> Option<DependencySpec> {
    self.dependencies.spec(name)
  }

  pub fn reset_dependencies(&self) {
    self.dependencies.reset();
  }

  /// Restores the default namespace and drops all overrides and
  /// dependencies. Registered classes are kept.
  pub fn reset(&self) {
    self.reset_namespace();
    self.reset_classes();
    self.reset_dependencies();
  }
}
