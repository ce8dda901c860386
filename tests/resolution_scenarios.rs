//! Integration tests for the `scenarios` fixture set.
//!
//! - `clearance`: £100.00, was £150.00, no stock and no variants
//!   - discount rounds 33.33% to 33
//!   - out of stock, add to cart is rejected
//! - `tee`: £50.00 with stock 10, and two variants
//!   - `a`: £55.00 override, no stock (selected by default)
//!   - `b`: no price override, stock 5

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use storefront::{
    cart::{ADDED_TO_CART, Cart, CartError, Notifier},
    catalog::Catalog,
    images::PLACEHOLDER_IMAGE,
    pricing::{discount_percentage, resolve_price},
    variants::Variant,
};

#[derive(Debug, Default)]
struct CountingNotifier {
    messages: std::cell::RefCell<Vec<String>>,
}

impl Notifier for CountingNotifier {
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[test]
fn discounted_product_without_stock() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let card = catalog.card("clearance")?;

    let resolution = card.resolution();

    assert_eq!(discount_percentage(card.product()), 33);
    assert_eq!(resolution.discount_percentage, 33);
    assert!(resolution.out_of_stock);
    assert_eq!(resolution.price, Money::from_minor(10_000, GBP));
    assert_eq!(resolution.reference_price, Some(Money::from_minor(15_000, GBP)));
    assert!(card.selector().is_empty());

    Ok(())
}

#[test]
fn out_of_stock_submission_is_rejected() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let card = catalog.card("clearance")?;
    let mut cart = Cart::new(catalog.currency()?);
    let notifier = CountingNotifier::default();

    let result = card.add_to_cart(&mut cart, &notifier);

    assert_eq!(
        result,
        Err(CartError::OutOfStock {
            product: "clearance".to_string(),
            variant: None,
        })
    );
    assert!(cart.is_empty());
    assert!(notifier.messages.borrow().is_empty());

    Ok(())
}

#[test]
fn default_variant_overrides_price_and_stock() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let card = catalog.card("tee")?;

    let resolution = card.resolution();

    assert_eq!(card.selector().selected().map(Variant::id), Some("a"));
    assert!(resolution.out_of_stock);
    assert_eq!(resolution.price, Money::from_minor(5_500, GBP));
    assert_eq!(resolution.stock, 0);

    Ok(())
}

#[test]
fn selecting_in_stock_variant_falls_back_to_base_price() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let mut card = catalog.card("tee")?;

    assert!(card.select_variant("b"));

    let resolution = card.resolution();

    assert!(!resolution.out_of_stock);
    assert!(resolution.low_stock);
    assert_eq!(resolution.price, Money::from_minor(5_000, GBP));
    assert_eq!(resolution.stock, 5);
    assert_eq!(resolve_price(card.product(), None), card.product().price());

    Ok(())
}

#[test]
fn unknown_variant_keeps_selection() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let mut card = catalog.card("tee")?;

    card.select_variant("b");

    assert!(!card.select_variant("nonexistent"));
    assert_eq!(card.selector().selected().map(Variant::id), Some("b"));
    assert_eq!(card.resolution().stock, 5);

    Ok(())
}

#[test]
fn in_stock_submission_reaches_store_and_notifier() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let mut card = catalog.card("tee")?;
    let mut cart = Cart::new(catalog.currency()?);
    let notifier = CountingNotifier::default();

    assert!(card.add_to_cart(&mut cart, &notifier).is_err());

    card.select_variant("b");
    card.add_to_cart(&mut cart, &notifier)?;
    card.add_to_cart(&mut cart, &notifier)?;

    let line = cart.line(0)?;

    assert_eq!(cart.len(), 1);
    assert_eq!(line.quantity(), 2);
    assert_eq!(line.entry().variant().map(Variant::id), Some("b"));
    assert_eq!(cart.subtotal()?, Money::from_minor(10_000, GBP));
    assert_eq!(
        *notifier.messages.borrow(),
        vec![ADDED_TO_CART.to_string(), ADDED_TO_CART.to_string()]
    );

    Ok(())
}

#[test]
fn blank_images_fall_back_to_placeholder() -> TestResult {
    let catalog = Catalog::from_set("scenarios")?;
    let card = catalog.card("tee")?;

    assert_eq!(card.image().source(), PLACEHOLDER_IMAGE);

    Ok(())
}
