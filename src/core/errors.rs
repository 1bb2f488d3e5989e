use super::types::ProductKey;
use thiserror::Error;

/// Errors reported by registry operations
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    /// No registrant is bound to the requested name. Recoverable: callers
    /// branch on it rather than abort.
    #[error("no product registered under '{0}'")]
    ProductNotFound(ProductKey),
}
