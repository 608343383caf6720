//! # Acme Checkout Demo
//!
//! Prices a basket of product codes against a pricing configuration.
//!
//! ## Usage
//! ```bash
//! # Price a basket with the built-in development configuration
//! cargo run -p acme-checkout --bin checkout -- B01 G01
//!
//! # Use a configuration file
//! cargo run -p acme-checkout --bin checkout -- --config config/pricing.json R01 R01
//!
//! # An empty basket still evaluates a delivery charge
//! cargo run -p acme-checkout --bin checkout
//! ```
//!
//! ## Output
//! A receipt-style breakdown on stdout; diagnostics go through
//! `tracing` (default INFO, override with `RUST_LOG`).

mod config;

use std::env;

use acme_core::{pricing, Basket};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CheckoutConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;
    let mut codes: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Acme Checkout");
                println!();
                println!("Usage: checkout [OPTIONS] [CODE...]");
                println!();
                println!("Arguments:");
                println!("  CODE               Product codes to add, in order");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Pricing configuration JSON (default: built-in)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            code => codes.push(code.to_string()),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => {
            info!(path = path.as_str(), "loading pricing configuration");
            CheckoutConfig::load(path)?
        }
        None => {
            info!("using built-in development configuration");
            CheckoutConfig::default()
        }
    };

    info!(
        products = config.catalogue.len(),
        delivery_tiers = config.delivery_rules.len(),
        offers = config.offers.len(),
        "pricing configuration ready"
    );

    let mut basket = Basket::new(&config.catalogue, &config.delivery_rules, &config.offers);
    for code in &codes {
        basket.add(code)?;
        info!(code = code.as_str(), "added to basket");
    }

    // The same three steps Basket::total composes, shown separately
    let subtotal = pricing::subtotal(pricing::tally(&codes), &config.catalogue);
    let delivery = pricing::delivery_cost(subtotal, &config.delivery_rules);

    println!("Items:    {}", basket.item_count());
    println!("Subtotal: {}", subtotal);
    println!("Delivery: {}", delivery);
    println!("Total:    {}", basket.total());

    Ok(())
}

/// Initializes tracing with an env-filter (default INFO, `RUST_LOG`
/// override).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
