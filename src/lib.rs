pub mod core;

// Re-export commonly used types
pub use crate::core::catalog::{enroll, registry_for, RegistryHandle};
pub use crate::core::errors::RegistryError;
pub use crate::core::registrant::Registrant;
pub use crate::core::registry::ProductRegistry;
pub use crate::core::types::ProductKey;
