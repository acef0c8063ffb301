//! Verb + name calling convention over the dependency table.
//!
//! A combined operation name such as `defMailer` or `getMailer` is split into
//! a three character verb and a case-insensitive dependency name:
//!
//! | verb  | arguments | effect                                |
//! |-------|-----------|---------------------------------------|
//! | `def` | 1 to 3    | define (class, args?, singleton?)     |
//! | `ini` | 1 to 3    | define, then get                      |
//! | `set` | exactly 1 | store an instance                     |
//! | `get` | 0         | get                                   |

use crate::core::{Arg, Args, DependencySpec, Instance};
use crate::error::{LocatorError, Result};
use crate::locator::Locator;
use std::fmt;

/// One dispatch argument.
#[derive(Clone)]
pub enum Value {
  /// A class identifier, short or fully-qualified.
  Class(String),
  /// Positional constructor arguments.
  Args(Vec<Arg>),
  /// The singleton flag.
  Flag(bool),
  /// A ready-made object.
  Instance(Instance),
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Class(class) => write!(f, "Class({class})"),
      Value::Args(args) => write!(f, "Args({})", args.len()),
      Value::Flag(flag) => write!(f, "Flag({flag})"),
      Value::Instance(_) => write!(f, "Instance"),
    }
  }
}

impl From<&str> for Value {
  fn from(class: &str) -> Self {
    Value::Class(class.to_owned())
  }
}

impl From<String> for Value {
  fn from(class: String) -> Self {
    Value::Class(class)
  }
}

impl From<Vec<Arg>> for Value {
  fn from(args: Vec<Arg>) -> Self {
    Value::Args(args)
  }
}

impl From<Args> for Value {
  fn from(args: Args) -> Self {
    Value::Args(args.iter().cloned().collect())
  }
}

impl From<bool> for Value {
  fn from(flag: bool) -> Self {
    Value::Flag(flag)
  }
}

impl From<Instance> for Value {
  fn from(instance: Instance) -> Self {
    Value::Instance(instance)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
  Define,
  Initialize,
  Set,
  Get,
}

impl Verb {
  fn from_prefix(prefix: &str) -> Option<Self> {
    match prefix {
      "def" => Some(Verb::Define),
      "ini" => Some(Verb::Initialize),
      "set" => Some(Verb::Set),
      "get" => Some(Verb::Get),
      _ => None,
    }
  }
}

/// A parsed operation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
  pub verb: Verb,
  /// The dependency name, upper-cased.
  pub name: String,
}

impl Operation {
  /// Splits `method` into verb and dependency name.
  ///
  /// Fails with `UndefinedOperation` when the first three characters are
  /// not a known verb.
  pub fn parse(method: &str) -> Result<Self> {
    let undefined = || LocatorError::UndefinedOperation(method.to_owned());
    let prefix = method.get(..3).ok_or_else(undefined)?;
    let verb = Verb::from_prefix(prefix).ok_or_else(undefined)?;
    Ok(Self {
      verb,
      name: method[3..].to_uppercase(),
    })
  }
}

// Turns the 1 to 3 `def`/`ini` arguments into a spec.
fn spec_from(name: &str, arguments: Vec<Value>) -> Result<DependencySpec> {
  let invalid = || LocatorError::InvalidArguments(name.to_owned());
  if arguments.is_empty() || arguments.len() > 3 {
    return Err(invalid());
  }

  let mut values = arguments.into_iter();
  let mut spec = match values.next() {
    Some(Value::Class(class)) => DependencySpec::new(class),
    _ => return Err(invalid()),
  };
  match values.next() {
    Some(Value::Args(args)) => spec.args = Args::from(args),
    Some(_) => return Err(invalid()),
    None => {}
  }
  match values.next() {
    Some(Value::Flag(singleton)) => spec.singleton = singleton,
    Some(_) => return Err(invalid()),
    None => {}
  }
  Ok(spec)
}

impl Locator {
  /// Runs a verb + name operation, e.g. `dispatch("getMailer", vec![])`.
  ///
  /// `get` and `ini` return the instance; `def` and `set` return `None`.
  pub fn dispatch(&self, method: &str, arguments: Vec<Value>) -> Result<Option<Instance>> {
    let Operation { verb, name } = Operation::parse(method)?;
    tracing::trace!(method, ?verb, args = arguments.len(), "dispatching");

    match verb {
      Verb::Define => {
        self.define_with(&name, spec_from(&name, arguments)?);
        Ok(None)
      }
      Verb::Initialize => {
        self.define_with(&name, spec_from(&name, arguments)?);
        self.get(&name).map(Some)
      }
      Verb::Set => {
        let mut values = arguments.into_iter();
        match (values.next(), values.next()) {
          (Some(value), None) => self.store(&name, value).map(|_| None),
          _ => Err(LocatorError::InvalidArguments(name)),
        }
      }
      Verb::Get => {
        if !arguments.is_empty() {
          return Err(LocatorError::InvalidArguments(name));
        }
        self.get(&name).map(Some)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::arg;

  #[test]
  fn parse_splits_verb_and_upper_cases_name() {
    let op = Operation::parse("defProcessor").unwrap();
    assert_eq!(op.verb, Verb::Define);
    assert_eq!(op.name, "PROCESSOR");

    assert_eq!(Operation::parse("iniFoo").unwrap().verb, Verb::Initialize);
    assert_eq!(Operation::parse("setFoo").unwrap().verb, Verb::Set);
    assert_eq!(Operation::parse("get").unwrap().name, "");
  }

  #[test]
  fn parse_rejects_unknown_verbs() {
    for method in ["fooBar", "ge", "", "GETFoo", "éxy"] {
      assert_eq!(
        Operation::parse(method).unwrap_err(),
        LocatorError::UndefinedOperation(method.to_owned())
      );
    }
  }

  #[test]
  fn spec_from_fills_optional_slots() {
    let spec = spec_from(
      "X",
      vec!["Numbers".into(), vec![arg(1_i32)].into(), false.into()],
    )
    .unwrap();
    assert_eq!(spec.class, "Numbers");
    assert_eq!(spec.args.len(), 1);
    assert!(!spec.singleton);

    assert!(spec_from("X", vec!["Numbers".into()]).unwrap().singleton);
  }

  #[test]
  fn spec_from_checks_count_and_slot_types() {
    let invalid = LocatorError::InvalidArguments("X".into());
    assert_eq!(spec_from("X", vec![]).unwrap_err(), invalid);
    assert_eq!(
      spec_from("X", vec!["A".into(), Value::Args(vec![]), true.into(), true.into()]).unwrap_err(),
      invalid
    );
    assert_eq!(spec_from("X", vec![true.into()]).unwrap_err(), invalid);
    assert_eq!(spec_from("X", vec!["A".into(), true.into()]).unwrap_err(), invalid);
  }
}
