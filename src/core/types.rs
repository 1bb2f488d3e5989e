/// Lookup key for a registered product.
///
/// The key is an opaque unique name within one product type's registry;
/// no validation is applied beyond exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey {
    pub(crate) name: String,
}

impl ProductKey {
    /// Create a new product key
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the raw name string
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for ProductKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProductKey {
    fn from(name: String) -> Self {
        Self { name }
    }
}
