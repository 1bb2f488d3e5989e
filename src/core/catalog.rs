use super::errors::RegistryError;
use super::registrant::Registrant;
use super::registry::ProductRegistry;
use super::types::ProductKey;
use lazy_static::lazy_static;
use log::debug;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

lazy_static! {
    /// Process-wide map from product type to its registry handle.
    ///
    /// Entries are created on first access and live for the rest of the
    /// process; there is no removal.
    static ref CATALOG: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>> =
        RwLock::new(HashMap::new());
}

/// Shared handle to the process-wide registry for one product type.
///
/// Handles are cheap to clone, and every handle for a given product type
/// observes the same underlying store. The store itself is never copied.
pub struct RegistryHandle<P: ?Sized + 'static> {
    inner: Arc<RwLock<ProductRegistry<P>>>,
}

impl<P: ?Sized + 'static> Clone for RegistryHandle<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: ?Sized + 'static> RegistryHandle<P> {
    fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ProductRegistry::new())),
        }
    }

    /// Register a construction capability; last write wins
    pub fn register(&self, registrant: Registrant<P>) {
        self.inner.write().unwrap().register(registrant);
    }

    /// Construct the product registered under `name`
    pub fn create(&self, name: &str) -> Result<Box<P>, RegistryError> {
        self.inner.read().unwrap().create(name)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().unwrap().contains(name)
    }

    /// Get all registered product names
    pub fn names(&self) -> Vec<ProductKey> {
        self.inner.read().unwrap().names()
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

/// Get the process-wide registry handle for product type `P`.
///
/// The registry is created on first call; every later call returns a handle
/// to the same store. First creation is lock-guarded, so concurrent callers
/// agree on one instance, but registration must still be sequenced before
/// the lookups that depend on it.
pub fn registry_for<P: ?Sized + 'static>() -> RegistryHandle<P> {
    let type_key = TypeId::of::<P>();

    {
        let catalog = CATALOG.read().unwrap();
        if let Some(entry) = catalog.get(&type_key) {
            if let Some(handle) = entry.downcast_ref::<RegistryHandle<P>>() {
                return handle.clone();
            }
        }
    }

    let mut catalog = CATALOG.write().unwrap();
    let entry = catalog.entry(type_key).or_insert_with(|| {
        debug!("created registry for {}", std::any::type_name::<P>());
        Box::new(RegistryHandle::<P>::new())
    });
    entry
        .downcast_ref::<RegistryHandle<P>>()
        .expect("catalog entries are keyed by TypeId")
        .clone()
}

/// Bind `name` to `build` in the process-wide registry for `P`.
///
/// One call registers one concrete variant. Call sites sequence their
/// `enroll` calls in an explicit startup step instead of relying on static
/// initialization order; repeating a call only replaces the existing entry.
pub fn enroll<P, F>(name: &str, build: F)
where
    P: ?Sized + 'static,
    F: Fn() -> Box<P> + Send + Sync + 'static,
{
    registry_for::<P>().register(Registrant::new(name, build));
}
