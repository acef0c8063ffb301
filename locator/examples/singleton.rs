use fibre_locator::{Args, Locator};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let locator = Locator::new();
  locator.register_class("RequestTracker", |_: &Args| {
    println!("Creating RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  });

  // Same class, two lifetimes.
  locator.define("singleton_tracker", "RequestTracker", Args::new(), true);
  locator.define("multiton_tracker", "RequestTracker", Args::new(), false);

  println!("--- Resolving Singletons ---");
  let s1 = locator.get_as::<RequestTracker>("singleton_tracker").unwrap();
  let s2 = locator.get_as::<RequestTracker>("singleton_tracker").unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Arc::ptr_eq(&s1, &s2), "Singleton instances should be identical");

  println!("--- Resolving Multitons ---");
  let m1 = locator.get_as::<RequestTracker>("multiton_tracker").unwrap();
  let m2 = locator.get_as::<RequestTracker>("multiton_tracker").unwrap();
  println!("Multiton 1 ID: {}, Multiton 2 ID: {}", m1.id, m2.id);
  assert!(!Arc::ptr_eq(&m1, &m2), "Multiton instances should be different");

  println!("--- Redefining the singleton ---");
  locator.define("singleton_tracker", "RequestTracker", Args::new(), true);
  let s3 = locator.get_as::<RequestTracker>("singleton_tracker").unwrap();
  println!("Singleton after redefinition ID: {}", s3.id);
  assert!(!Arc::ptr_eq(&s1, &s3));
}
