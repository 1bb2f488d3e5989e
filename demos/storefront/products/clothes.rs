//! Clothing products for the storefront demo.

use log::info;
use prodreg::enroll;

/// Abstract capability: anything sold as clothes
pub trait Clothes {
    /// Describe the product for the sales floor
    fn show(&self) -> String;
}

/// Uniqlo-branded clothes
pub struct UniqloClothes;

impl Clothes for UniqloClothes {
    fn show(&self) -> String {
        "Uniqlo clothes, slogan: I am Uniqlo".to_string()
    }
}

impl Drop for UniqloClothes {
    fn drop(&mut self) {
        info!("UniqloClothes sold");
    }
}

/// Enroll all built-in clothing variants under their catalog names
pub fn register_clothes() {
    enroll::<dyn Clothes, _>("Uniqlo", || Box::new(UniqloClothes));
}
