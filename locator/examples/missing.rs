use fibre_locator::{invoke, Args, Locator, LocatorError};

fn main() {
  let locator = Locator::builder().default_namespace("App.").build();

  match locator.create("Orange", &Args::new()) {
    Err(LocatorError::UnknownClass { class, qualified, .. }) => {
      println!("No class for `{class}` (also tried `{qualified}`)")
    }
    _ => panic!("Orange should not resolve"),
  }

  match locator.get("Processor") {
    Err(e @ LocatorError::MissingDependency(_)) => println!("{e}"),
    _ => panic!("Processor was never defined"),
  }

  match invoke!(locator, fooBar) {
    Err(e @ LocatorError::UndefinedOperation(_)) => println!("{e}"),
    _ => panic!("`foo` is not a verb"),
  }

  match invoke!(locator, setProcessor) {
    Err(e @ LocatorError::InvalidArguments(_)) => println!("{e}"),
    _ => panic!("`set` needs exactly one argument"),
  }
}
