use crate::core::errors::RegistryError;
use crate::core::registrant::Registrant;
use crate::core::registry::ProductRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait Gadget {
    fn label(&self) -> &'static str;
}

struct Widget;

impl Gadget for Widget {
    fn label(&self) -> &'static str {
        "widget"
    }
}

struct Gizmo;

impl Gadget for Gizmo {
    fn label(&self) -> &'static str {
        "gizmo"
    }
}

#[test]
fn new_registry_is_empty() {
    let registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.names().is_empty());
}

#[test]
fn register_then_create_returns_bound_variant() {
    let mut registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();
    registry.register(Registrant::<dyn Gadget>::new("widget", || Box::new(Widget)));

    let product = registry.create("widget").unwrap();
    assert_eq!(product.label(), "widget");
}

#[test]
fn second_registration_under_same_name_wins() {
    let mut registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();
    registry.register(Registrant::<dyn Gadget>::new("kit", || Box::new(Widget)));
    registry.register(Registrant::<dyn Gadget>::new("kit", || Box::new(Gizmo)));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.create("kit").unwrap().label(), "gizmo");
}

#[test]
fn create_unknown_name_is_not_found() {
    let registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();

    match registry.create("missing") {
        Err(RegistryError::ProductNotFound(key)) => assert_eq!(key.name(), "missing"),
        Ok(_) => panic!("unregistered name must not produce anything"),
    }
}

#[test]
fn create_allocates_a_fresh_instance_per_call() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);

    let mut registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();
    registry.register(Registrant::<dyn Gadget>::new("widget", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::new(Widget)
    }));

    let first = registry.create("widget").unwrap();
    let second = registry.create("widget").unwrap();

    assert_eq!(first.label(), second.label());
    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn names_and_contains_track_registrations() {
    let mut registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();
    registry.register(Registrant::<dyn Gadget>::new("widget", || Box::new(Widget)));
    registry.register(Registrant::<dyn Gadget>::new("gizmo", || Box::new(Gizmo)));

    assert!(registry.contains("widget"));
    assert!(registry.contains("gizmo"));
    assert!(!registry.contains("sprocket"));

    let mut names: Vec<String> = registry
        .names()
        .into_iter()
        .map(|key| key.name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["gizmo".to_string(), "widget".to_string()]);
}

#[test]
fn not_found_error_names_the_missing_key() {
    let registry: ProductRegistry<dyn Gadget> = ProductRegistry::new();

    let err = match registry.create("sprocket") {
        Ok(_) => panic!("unregistered name must not produce anything"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("sprocket"));
}
