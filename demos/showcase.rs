//! Showcase Example
//!
//! This example lists a fixture set as product cards and fills a cart from them.
//!
//! Use `-f` to load a fixture set by name
//! Use `-s PRODUCT=VARIANT` to select a variant before listing
//! Use `-a PRODUCT` to add a product with its current selection to the cart

use std::io;

use anyhow::Result;

use clap::Parser;
use storefront::{
    cart::{Cart, CartError, TracingNotifier},
    catalog::Catalog,
    config::ShowcaseArgs,
    listing::{write_cart, write_showcase},
    observability::init_logging,
};

/// Showcase Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ShowcaseArgs::parse();

    init_logging(&args.logging)?;

    let catalog = Catalog::from_set_in(&args.fixtures_dir, &args.fixture)?;
    let mut cards = catalog.cards();

    for choice in &args.selections {
        let card = cards
            .iter_mut()
            .find(|card| card.product().id() == choice.product)
            .ok_or_else(|| anyhow::anyhow!("unknown product: {}", choice.product))?;

        card.try_select_variant(&choice.variant)?;
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_showcase(&mut handle, &cards)?;

    if args.additions.is_empty() {
        return Ok(());
    }

    let mut cart = Cart::new(catalog.currency()?);

    for product_id in &args.additions {
        let card = cards
            .iter()
            .find(|card| card.product().id() == product_id)
            .ok_or_else(|| anyhow::anyhow!("unknown product: {product_id}"))?;

        match card.add_to_cart(&mut cart, &TracingNotifier) {
            Ok(()) => {}
            Err(err @ CartError::OutOfStock { .. }) => println!("Skipped: {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    write_cart(&mut handle, &cart)?;

    Ok(())
}
