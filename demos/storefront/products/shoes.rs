//! Shoe products for the storefront demo.

use log::info;
use prodreg::enroll;

/// Abstract capability: anything sold as shoes
pub trait Shoes {
    /// Describe the product for the sales floor
    fn show(&self) -> String;
}

/// Nike-branded shoes
pub struct NikeShoes;

impl Shoes for NikeShoes {
    fn show(&self) -> String {
        "Nike shoes, slogan: Just Do It".to_string()
    }
}

impl Drop for NikeShoes {
    fn drop(&mut self) {
        info!("NikeShoes sold");
    }
}

/// Enroll all built-in shoe variants under their catalog names
pub fn register_shoes() {
    enroll::<dyn Shoes, _>("Nike", || Box::new(NikeShoes));
}
