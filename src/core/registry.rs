use super::errors::RegistryError;
use super::registrant::Registrant;
use super::types::ProductKey;
use log::{debug, warn};
use std::collections::HashMap;

/// Per-product-type store mapping names to registrants.
///
/// One store exists per abstract product type. It exclusively owns its
/// registrants and exposes no way to duplicate itself. Registration is
/// irreversible: there is no unregister operation.
pub struct ProductRegistry<P: ?Sized> {
    /// Registered construction capabilities keyed by product name
    registrants: HashMap<ProductKey, Registrant<P>>,
}

impl<P: ?Sized> ProductRegistry<P> {
    pub fn new() -> Self {
        Self {
            registrants: HashMap::new(),
        }
    }

    /// Register a construction capability under its bound name.
    ///
    /// A second registration under the same name replaces the first; later
    /// lookups observe only the newest registrant. The replacement is not
    /// reported to the caller.
    pub fn register(&mut self, registrant: Registrant<P>) {
        let key = registrant.key().clone();
        if self.registrants.insert(key.clone(), registrant).is_some() {
            debug!("replaced registrant for '{}'", key);
        } else {
            debug!("registered '{}'", key);
        }
    }

    /// Construct the product registered under `name`.
    ///
    /// The returned instance is newly allocated and exclusively owned by the
    /// caller; the registry keeps no reference to it.
    pub fn create(&self, name: &str) -> Result<Box<P>, RegistryError> {
        let key = ProductKey::from(name);
        match self.registrants.get(&key) {
            Some(registrant) => Ok(registrant.construct()),
            None => {
                warn!("no product found for '{}'", key);
                Err(RegistryError::ProductNotFound(key))
            }
        }
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.registrants.contains_key(&ProductKey::from(name))
    }

    /// Get all registered product names
    pub fn names(&self) -> Vec<ProductKey> {
        self.registrants.keys().cloned().collect()
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.registrants.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.registrants.is_empty()
    }
}

impl<P: ?Sized> Default for ProductRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
