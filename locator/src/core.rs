//! Core data structures shared by the resolver, the class registry and the
//! dependency table.

use crate::error::{LocatorError, Result};
use once_cell::sync::OnceCell;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A single positional constructor argument.
pub type Arg = Arc<dyn Any + Send + Sync>;

/// A constructed object. Singletons hand out clones of the same `Arc`, so
/// identity can be checked with `Arc::ptr_eq`.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Wraps any value as a constructor argument.
pub fn arg<T: Any + Send + Sync>(value: T) -> Arg {
  Arc::new(value)
}

/// Downcasts an instance to its concrete type.
pub fn downcast<T: Any + Send + Sync>(name: &str, instance: Instance) -> Result<Arc<T>> {
  instance
    .downcast::<T>()
    .map_err(|_| LocatorError::TypeMismatch {
      name: name.to_owned(),
      expected: type_name::<T>(),
    })
}

/// Ordered positional arguments handed to a constructor.
#[derive(Clone, Default)]
pub struct Args {
  values: Vec<Arg>,
}

impl Args {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Returns the argument at `index` as a `T`.
  ///
  /// Fails with `MissingArgument` past the end of the list and with
  /// `ArgumentType` when the argument holds some other type.
  pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<&T> {
    let value = self
      .values
      .get(index)
      .ok_or(LocatorError::MissingArgument(index))?;
    value
      .downcast_ref::<T>()
      .ok_or(LocatorError::ArgumentType {
        index,
        expected: type_name::<T>(),
      })
  }

  /// Returns the raw argument at `index`, if any.
  pub fn raw(&self, index: usize) -> Option<&Arg> {
    self.values.get(index)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Arg> {
    self.values.iter()
  }

  pub fn push(&mut self, value: Arg) {
    self.values.push(value);
  }
}

impl From<Vec<Arg>> for Args {
  fn from(values: Vec<Arg>) -> Self {
    Self { values }
  }
}

impl FromIterator<Arg> for Args {
  fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
    Self {
      values: iter.into_iter().collect(),
    }
  }
}

impl fmt::Debug for Args {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Args({})", self.values.len())
  }
}

/// Builds an [`Args`] list from heterogeneous values.
///
/// ```
/// use fibre_locator::args;
///
/// let a = args![1_u32, "two", 3.0_f64];
/// assert_eq!(a.len(), 3);
/// assert_eq!(*a.get::<&str>(1).unwrap(), "two");
/// ```
#[macro_export]
macro_rules! args {
  () => {
    $crate::Args::new()
  };
  ($($value:expr),+ $(,)?) => {
    $crate::Args::from(vec![$($crate::arg($value)),+])
  };
}

/// How a named dependency is built: the class to construct, its arguments,
/// and whether the first instance is kept for later lookups.
#[derive(Clone)]
pub struct DependencySpec {
  pub class: String,
  pub args: Args,
  pub singleton: bool,
}

impl DependencySpec {
  /// A singleton spec with no constructor arguments.
  pub fn new(class: impl Into<String>) -> Self {
    Self {
      class: class.into(),
      args: Args::new(),
      singleton: true,
    }
  }

  pub fn with_args(mut self, args: Args) -> Self {
    self.args = args;
    self
  }

  pub fn singleton(mut self, singleton: bool) -> Self {
    self.singleton = singleton;
    self
  }
}

impl fmt::Debug for DependencySpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DependencySpec")
      .field("class", &self.class)
      .field("args", &self.args)
      .field("singleton", &self.singleton)
      .finish()
  }
}

// One row of the dependency table. The singleton cell lives next to the spec,
// so overwriting the row also drops any instance built from the old spec.
pub(crate) enum DependencyEntry {
  Singleton {
    spec: Option<DependencySpec>,
    cell: OnceCell<Instance>,
  },
  Multiton {
    spec: DependencySpec,
  },
}

impl DependencyEntry {
  pub(crate) fn from_spec(spec: DependencySpec) -> Self {
    if spec.singleton {
      DependencyEntry::Singleton {
        spec: Some(spec),
        cell: OnceCell::new(),
      }
    } else {
      DependencyEntry::Multiton { spec }
    }
  }

  pub(crate) fn from_instance(instance: Instance) -> Self {
    DependencyEntry::Singleton {
      spec: None,
      cell: OnceCell::with_value(instance),
    }
  }

  pub(crate) fn spec(&self) -> Option<&DependencySpec> {
    match self {
      DependencyEntry::Singleton { spec, .. } => spec.as_ref(),
      DependencyEntry::Multiton { spec } => Some(spec),
    }
  }

  pub(crate) fn is_singleton(&self) -> bool {
    matches!(self, DependencyEntry::Singleton { .. })
  }
}

/// Dependency names are matched case-insensitively.
pub(crate) fn normalize_name(name: &str) -> String {
  name.to_uppercase()
}
