//! Product definitions for the storefront demo.

pub mod clothes;
pub mod shoes;

pub use clothes::Clothes;
pub use shoes::Shoes;

use std::sync::Once;

static REGISTER: Once = Once::new();

/// Register every built-in product variant exactly once.
///
/// Must run before the first catalog lookup; later calls are no-ops.
pub fn register_builtin_products() {
    REGISTER.call_once(|| {
        shoes::register_shoes();
        clothes::register_clothes();
    });
}
