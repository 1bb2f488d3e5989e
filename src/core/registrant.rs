use super::types::ProductKey;

/// Construction capability for one concrete product variant
pub type BuildFn<P> = Box<dyn Fn() -> Box<P> + Send + Sync>;

/// Binds one product name to one concrete-variant constructor.
///
/// A registrant is created once, handed over to the registry for its product
/// type, and owned by that registry for the rest of the process. It has no
/// copy or clone operation.
pub struct Registrant<P: ?Sized> {
    key: ProductKey,
    build: BuildFn<P>,
}

impl<P: ?Sized> Registrant<P> {
    /// Create a registrant binding `name` to `build`
    pub fn new<F>(name: impl Into<ProductKey>, build: F) -> Self
    where
        F: Fn() -> Box<P> + Send + Sync + 'static,
    {
        Self {
            key: name.into(),
            build: Box::new(build),
        }
    }

    /// The name this registrant is bound to
    pub fn key(&self) -> &ProductKey {
        &self.key
    }

    /// Allocate and return a new instance of the bound variant.
    ///
    /// Every call yields a fresh instance, exclusively owned by the caller.
    pub fn construct(&self) -> Box<P> {
        (self.build)()
    }
}
