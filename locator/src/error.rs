use thiserror::Error;

/// Every failure the locator can surface to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
  /// Resolution found no registered class for the identifier `class`.
  /// `tried` is the class name that was checked last (an override target,
  /// a memoized answer, or `class` itself) and `qualified` is the
  /// namespace-prefixed name.
  #[error("Unable to find class `{tried}` for `{class}` [`{qualified}`]")]
  UnknownClass {
    class: String,
    tried: String,
    qualified: String,
  },

  #[error("Too many constructor parameters: {given} given, at most {max} supported")]
  TooManyParameters { given: usize, max: usize },

  #[error("Dependency `{0}` not found")]
  MissingDependency(String),

  #[error("Dependency `{0}` must be an object instance")]
  InvalidDependencyValue(String),

  #[error("Call to undefined method `{0}`")]
  UndefinedOperation(String),

  #[error("Invalid call to `{0}`")]
  InvalidArguments(String),

  #[error("Constructor argument {0} is missing")]
  MissingArgument(usize),

  #[error("Constructor argument {index} is not a `{expected}`")]
  ArgumentType { index: usize, expected: &'static str },

  #[error("`{name}` does not hold a `{expected}`")]
  TypeMismatch { name: String, expected: &'static str },

  #[error("Failed to parse locator configuration: {0}")]
  Config(String),
}

/// A specialized `Result` type for `fibre_locator` operations.
pub type Result<T, E = LocatorError> = std::result::Result<T, E>;
