mod common;

use common::{for_each_locator, locator_for, ArrayIterator, Numbers, XsltProcessor};
use fibre_locator::{arg, args, fetch, invoke, Instance, LocatorError, Value};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_replace_dependency_with_def() {
  for_each_locator(|locator, _| {
    invoke!(locator, defProcessor, "XsltProcessor").unwrap();
    assert!(fetch!(locator, getProcessor => XsltProcessor).is_ok());

    invoke!(locator, defProcessor, "ArrayIterator", args![vec![1, 2]]).unwrap();
    let iterator = fetch!(locator, getProcessor => ArrayIterator).unwrap();
    assert_eq!(iterator.items, vec![1, 2]);
  });
}

#[test]
fn test_replace_dependency_with_set() {
  for_each_locator(|locator, _| {
    let dependency = locator.create("XsltProcessor", &args![]).unwrap();
    let replacement = locator.create("ArrayIterator", &args![Vec::<i32>::new()]).unwrap();

    invoke!(locator, setProcessor, Arc::clone(&dependency)).unwrap();
    let got = invoke!(locator, getProcessor).unwrap().unwrap();
    assert!(Arc::ptr_eq(&got, &dependency));

    invoke!(locator, setProcessor, replacement).unwrap();
    assert!(fetch!(locator, getProcessor => ArrayIterator).is_ok());
  });
}

#[test]
fn test_magic_setter_and_getter() {
  for_each_locator(|locator, _| {
    invoke!(locator, defFoo, "XsltProcessor").unwrap();
    assert!(fetch!(locator, getFoo => XsltProcessor).is_ok());

    let processor: Instance = arg(XsltProcessor);
    invoke!(locator, setBar, processor).unwrap();
    assert!(fetch!(locator, getBar => XsltProcessor).is_ok());
  });
}

#[test]
fn test_define_flags_reach_the_registry() {
  let locator = locator_for("App.");
  invoke!(locator, defNumbers, "Numbers", args![1], false).unwrap();

  let a = invoke!(locator, getNumbers).unwrap().unwrap();
  let b = invoke!(locator, getNumbers).unwrap().unwrap();
  assert!(!Arc::ptr_eq(&a, &b));

  let spec = locator.dependency_spec("numbers").unwrap();
  assert_eq!(spec.class, "Numbers");
  assert!(!spec.singleton);
}

#[test]
fn test_initialize_returns_the_instance() {
  let locator = locator_for("App.");
  let numbers = fetch!(locator, iniNumbers => Numbers, "Numbers", args![4, 5]).unwrap();
  assert_eq!(numbers.series, vec![4, 5]);

  let again = locator.get_as::<Numbers>("NUMBERS").unwrap();
  assert!(Arc::ptr_eq(&numbers, &again));
}

#[test]
fn test_dispatch_and_typed_api_share_entries() {
  let locator = locator_for("App.");
  locator.set("mailer", XsltProcessor);
  assert!(fetch!(locator, getMailer => XsltProcessor).is_ok());
  assert!(fetch!(locator, getMAILER => XsltProcessor).is_ok());
}

#[test]
fn test_define_returns_nothing() {
  let locator = locator_for("App.");
  assert!(invoke!(locator, defNumbers, "Numbers").unwrap().is_none());
  assert!(locator
    .dispatch("setThing", vec![Value::Instance(arg(1_u8))])
    .unwrap()
    .is_none());
}

#[test]
fn test_missing_dependency_through_dispatch() {
  let locator = locator_for("App.");
  let err = invoke!(locator, getFoo).err().unwrap();
  assert_eq!(err, LocatorError::MissingDependency("FOO".into()));
}

// --- Errors ---

#[test]
fn test_undefined_magic_call() {
  for_each_locator(|locator, _| {
    let err = invoke!(locator, fooBar).err().unwrap();
    assert_eq!(err, LocatorError::UndefinedOperation("fooBar".into()));
  });
}

#[test]
fn test_incomplete_magic_call() {
  for_each_locator(|locator, _| {
    let err = invoke!(locator, setSomething).err().unwrap();
    assert_eq!(err, LocatorError::InvalidArguments("SOMETHING".into()));
  });
}

#[test]
fn test_overloaded_magic_call() {
  for_each_locator(|locator, _| {
    let one: Instance = arg(1);
    let err = invoke!(locator, setSomething, Arc::clone(&one), Arc::clone(&one), one)
      .err()
      .unwrap();
    assert_eq!(err, LocatorError::InvalidArguments("SOMETHING".into()));
  });
}

#[test]
fn test_define_arity_bounds() {
  let locator = locator_for("App.");
  assert_eq!(
    invoke!(locator, defSomething).err().unwrap(),
    LocatorError::InvalidArguments("SOMETHING".into())
  );
  assert_eq!(
    invoke!(locator, iniSomething).err().unwrap(),
    LocatorError::InvalidArguments("SOMETHING".into())
  );
  assert_eq!(
    invoke!(locator, defSomething, "Numbers", args![], true, true)
      .err()
      .unwrap(),
    LocatorError::InvalidArguments("SOMETHING".into())
  );
  assert_eq!(
    invoke!(locator, iniSomething, "Numbers", args![], true, true)
      .err()
      .unwrap(),
    LocatorError::InvalidArguments("SOMETHING".into())
  );
  assert!(!locator.contains_dependency("Something"));
}

#[test]
fn test_get_takes_no_arguments() {
  let locator = locator_for("App.");
  invoke!(locator, defNumbers, "Numbers").unwrap();
  assert_eq!(
    invoke!(locator, getNumbers, "extra").err().unwrap(),
    LocatorError::InvalidArguments("NUMBERS".into())
  );
}

#[test]
fn test_set_requires_an_instance() {
  let locator = locator_for("App.");
  let err = invoke!(locator, setProcessor, "XsltProcessor").err().unwrap();
  assert_eq!(err, LocatorError::InvalidDependencyValue("PROCESSOR".into()));
  assert!(!locator.contains_dependency("Processor"));
}
