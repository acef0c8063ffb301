//! # Fibre Locator
//!
//! A service locator with namespace-relative class resolution and lazily
//! built, optionally singleton, named dependencies.
//!
//! ## Core Concepts
//!
//! - **Class registry**: the host registers a constructor per fully-qualified
//!   class name.
//! - **Namespace**: a prefix tried first when resolving a short identifier.
//!   `Mailer` resolves to `App.Mailer` if that class exists, else to `Mailer`.
//! - **Overrides**: `replace_class` pins an identifier to any class, which is
//!   how implementations get swapped for fakes in tests.
//! - **Dependencies**: named specs (class, arguments, singleton flag) or
//!   ready-made instances, resolved with `get`.
//! - **Dispatch**: the same dependency operations through a `defX`/`iniX`/
//!   `setX`/`getX` calling convention, see [`invoke!`].
//!
//! ## Quick Start
//!
//! ```
//! use fibre_locator::{args, Args, Locator};
//! use std::sync::Arc;
//!
//! struct Numbers {
//!   series: Vec<i32>,
//! }
//!
//! let locator = Locator::builder().default_namespace("App.").build();
//! locator.register_class("App.Numbers", |a: &Args| {
//!   let series = (0..a.len()).map(|i| a.get::<i32>(i).copied()).collect::<Result<_, _>>()?;
//!   Ok(Numbers { series })
//! });
//!
//! assert_eq!(locator.resolve("Numbers").unwrap(), "App.Numbers");
//!
//! let numbers = locator.create_as::<Numbers>("Numbers", &args![1, 2, 3]).unwrap();
//! assert_eq!(numbers.series, vec![1, 2, 3]);
//!
//! locator.define("numbers", "Numbers", args![4], true);
//! let a = locator.get("numbers").unwrap();
//! let b = locator.get("NUMBERS").unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

mod config;
mod core;
mod dependencies;
mod dispatch;
mod error;
mod locator;
mod macros;
mod registry;
mod resolver;

pub use crate::core::{arg, downcast, Arg, Args, DependencySpec, Instance};
pub use config::{LocatorBuilder, LocatorConfig, DEFAULT_MAX_PARAMETERS};
pub use dependencies::DependencyRegistry;
pub use dispatch::{Operation, Value, Verb};
pub use error::{LocatorError, Result};
pub use locator::Locator;
pub use registry::{ClassRegistry, Constructor};
pub use resolver::ClassResolver;
