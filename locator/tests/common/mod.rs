#![allow(dead_code)]

use fibre_locator::{Args, Locator, LocatorConfig, Result};

// A class that records every constructor argument it was given.
#[derive(Debug, PartialEq, Eq)]
pub struct Numbers {
  pub series: Vec<i32>,
}

impl Numbers {
  pub fn from_args(args: &Args) -> Result<Self> {
    let series = (0..args.len())
      .map(|i| args.get::<i32>(i).copied())
      .collect::<Result<Vec<_>>>()?;
    Ok(Numbers { series })
  }
}

pub struct XsltProcessor;

pub struct ArrayIterator {
  pub items: Vec<i32>,
}

// The two namespace styles every scenario runs against: a `_` separated
// prefix and a `.` separated one.
pub const NAMESPACES: [&str; 2] = ["App_", "App."];

/// A locator with `default_namespace`, its `Numbers` class and two
/// namespace-less classes.
pub fn locator_for(default_namespace: &str) -> Locator {
  let locator = Locator::with_config(LocatorConfig::new(default_namespace));
  locator.register_class(&format!("{default_namespace}Numbers"), Numbers::from_args);
  locator.register_class("XsltProcessor", |_: &Args| Ok(XsltProcessor));
  locator.register_class("ArrayIterator", |a: &Args| {
    Ok(ArrayIterator {
      items: a.get::<Vec<i32>>(0)?.clone(),
    })
  });
  locator
}

/// Runs `scenario` once per namespace style.
pub fn for_each_locator(scenario: impl Fn(&Locator, &str)) {
  for namespace in NAMESPACES {
    let locator = locator_for(namespace);
    scenario(&locator, namespace);
  }
}
