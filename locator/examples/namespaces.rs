use fibre_locator::{args, Args, ClassRegistry, Locator};
use std::sync::Arc;

trait Transport: Send + Sync {
  fn send(&self, to: &str) -> String;
}

struct Smtp {
  host: String,
}

impl Transport for Smtp {
  fn send(&self, to: &str) -> String {
    format!("smtp://{} -> {to}", self.host)
  }
}

struct FakeTransport;

impl Transport for FakeTransport {
  fn send(&self, to: &str) -> String {
    format!("recorded -> {to}")
  }
}

// Trait objects are registered boxed so every class resolves to the same
// concrete type.
type BoxedTransport = Box<dyn Transport>;

fn main() {
  let classes = Arc::new(ClassRegistry::new());
  classes.register("Prod.Transport", |a: &Args| {
    Ok(Box::new(Smtp { host: a.get::<String>(0)?.clone() }) as BoxedTransport)
  });
  classes.register("Test.Transport", |_: &Args| Ok(Box::new(FakeTransport) as BoxedTransport));

  let prod = Locator::builder()
    .default_namespace("Prod.")
    .classes(Arc::clone(&classes))
    .build();
  let test = Locator::builder().default_namespace("Test.").classes(classes).build();

  for locator in [&prod, &test] {
    locator.define("Transport", "Transport", args![String::from("mail.local")], true);
    let transport = locator.get_as::<BoxedTransport>("Transport").unwrap();
    println!("[{}] {}", locator.namespace(), transport.send("ops@example.com"));
  }

  // Swap production's transport for the fake without touching its namespace.
  prod.replace_class("Transport", "Test.Transport");
  prod.define("Transport", "Transport", Args::new(), true);
  let transport = prod.get_as::<BoxedTransport>("Transport").unwrap();
  println!("[{} with override] {}", prod.namespace(), transport.send("ops@example.com"));
}
