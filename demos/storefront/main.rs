use log::{info, warn};
use prodreg::registry_for;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use uuid::Uuid;

mod products;

use products::{register_builtin_products, Clothes, Shoes};

/// Configuration for the storefront demo
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Number of customers served during the trading day
    pub customer_count: u32,

    /// Per-customer purchase quantity distribution
    pub quantity_mean: f64,
    pub quantity_std_dev: f64,

    /// Seed for reproducible purchase traffic
    pub random_seed: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            customer_count: 12,
            quantity_mean: 2.0,
            quantity_std_dev: 0.5,
            random_seed: 42,
        }
    }
}

/// Log one fulfilled sale with a receipt id
fn record_sale(customer: u32, description: &str) {
    let receipt = format!("sale_{}", Uuid::new_v4());
    info!("[customer {}] {} ({})", customer, description, receipt);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("Opening the storefront");

    let config = StorefrontConfig::default();
    println!("Configuration:");
    println!("  Customers: {}", config.customer_count);
    println!(
        "  Purchase quantity: mean={:.1}, std_dev={:.1}",
        config.quantity_mean, config.quantity_std_dev
    );
    println!("  Random seed: {}", config.random_seed);
    println!();

    // Stock the catalog before the doors open
    register_builtin_products();

    let shoes = registry_for::<dyn Shoes>();
    let clothes = registry_for::<dyn Clothes>();
    info!(
        "catalog ready: {} shoe brand(s), {} clothing brand(s)",
        shoes.len(),
        clothes.len()
    );

    // The classic walk-through: one pair of Nikes, one Uniqlo outfit
    let nikes = shoes.create("Nike")?;
    info!("{}", nikes.show());
    drop(nikes);

    let outfit = clothes.create("Uniqlo")?;
    info!("{}", outfit.show());
    drop(outfit);

    println!();
    println!("Serving {} customers...", config.customer_count);

    let mut rng = StdRng::seed_from_u64(config.random_seed);
    let quantity = Normal::new(config.quantity_mean, config.quantity_std_dev)?;

    // What customers ask for; Adidas was never stocked
    let requests = ["Nike", "Uniqlo", "Adidas"];

    let mut sold = 0u32;
    let mut unfulfilled = 0u32;

    for customer in 0..config.customer_count {
        let wanted = requests[rng.gen_range(0..requests.len())];
        let count = quantity.sample(&mut rng).round().max(1.0) as u32;

        for _ in 0..count {
            let outcome = if wanted == "Uniqlo" {
                clothes
                    .create(wanted)
                    .map(|item| record_sale(customer, &item.show()))
            } else {
                shoes
                    .create(wanted)
                    .map(|item| record_sale(customer, &item.show()))
            };

            match outcome {
                Ok(()) => sold += 1,
                Err(e) => {
                    warn!("[customer {}] {}", customer, e);
                    unfulfilled += 1;
                    break;
                }
            }
        }
    }

    println!();
    println!(
        "Trading day finished: {} items sold, {} requests unfulfilled",
        sold, unfulfilled
    );

    Ok(())
}
