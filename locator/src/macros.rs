//! Fluent macro surface over [`Locator::dispatch`](crate::Locator::dispatch).

/// Calls a verb + name operation on a locator, using the operation name as
/// an identifier and converting every argument into a
/// [`Value`](crate::Value).
///
/// Evaluates to `Result<Option<Instance>>`, like `dispatch`.
///
/// # Examples
///
/// ```
/// use fibre_locator::{args, invoke, Args, Locator};
///
/// struct Mailer {
///   host: String,
/// }
///
/// let locator = Locator::new();
/// locator.register_class("Mailer", |a: &Args| Ok(Mailer { host: a.get::<String>(0)?.clone() }));
///
/// invoke!(locator, defMailer, "Mailer", args![String::from("smtp.local")]).unwrap();
/// let mailer = invoke!(locator, getMailer).unwrap().unwrap();
/// assert_eq!(mailer.downcast_ref::<Mailer>().unwrap().host, "smtp.local");
///
/// // Wrong arity for `set`.
/// assert!(invoke!(locator, setMailer).is_err());
/// ```
#[macro_export]
macro_rules! invoke {
  ($locator:expr, $method:ident) => {
    $locator.dispatch(stringify!($method), ::std::vec::Vec::new())
  };

  ($locator:expr, $method:ident, $($arg:expr),+ $(,)?) => {
    $locator.dispatch(
      stringify!($method),
      vec![$($crate::Value::from($arg)),+],
    )
  };
}

/// Like [`invoke!`], but for the `get` and `ini` verbs: unwraps the returned
/// instance and downcasts it to `$type`.
///
/// Evaluates to `Result<Arc<$type>>`.
///
/// ```
/// use fibre_locator::{fetch, invoke, Args, Locator};
///
/// struct Clock;
///
/// let locator = Locator::new();
/// locator.register_class("Clock", |_: &Args| Ok(Clock));
/// invoke!(locator, defClock, "Clock").unwrap();
///
/// let _clock = fetch!(locator, getClock => Clock).unwrap();
/// ```
#[macro_export]
macro_rules! fetch {
  ($locator:expr, $method:ident => $type:ty) => {
    $crate::fetch!($locator, $method => $type,)
  };

  ($locator:expr, $method:ident => $type:ty, $($arg:expr),* $(,)?) => {
    $locator
      .dispatch(stringify!($method), vec![$($crate::Value::from($arg)),*])
      .and_then(|instance| {
        instance.ok_or_else(|| {
          $crate::LocatorError::InvalidArguments(stringify!($method).to_owned())
        })
      })
      .and_then(|instance| $crate::downcast::<$type>(stringify!($method), instance))
  };
}
