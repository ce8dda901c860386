//! Integration tests for the `showcase` fixture set and its terminal listing.

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use storefront::{
    cart::{Cart, CartError, TracingNotifier},
    catalog::Catalog,
    listing::{write_cart, write_showcase},
    pricing::effective_discount_percentage,
    products::Product,
    variants::Variant,
};

#[test]
fn showcase_loads_in_catalog_order() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;

    let ids: Vec<&str> = catalog.iter().map(Product::id).collect();

    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(catalog.currency()?, USD);
    assert!(catalog.variants("6")?.is_empty());

    Ok(())
}

#[test]
fn long_titles_are_truncated() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;
    let card = catalog.card("1")?;

    let title = card.title();

    assert!(title.ends_with("..."));
    assert_eq!(title.chars().count(), 63);
    assert_eq!(card.resolution().discount_percentage, 20);

    Ok(())
}

#[test]
fn jacket_variant_price_and_badges() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;
    let mut card = catalog.card("2")?;

    // Extra Small has 2 left.
    assert!(card.resolution().low_stock);

    card.select_variant("l");

    let resolution = card.resolution();
    let selected = card.selector().selected();

    assert_eq!(resolution.price, Money::from_minor(16_999, USD));
    assert_eq!(resolution.discount_percentage, 20);
    assert_eq!(effective_discount_percentage(card.product(), selected), 15);
    assert!(resolution.low_stock);

    let options = card.selector().options().collect::<Vec<_>>();
    let sold_out: Vec<&str> = options
        .iter()
        .filter(|option| option.disabled)
        .map(|option| option.id)
        .collect();

    assert_eq!(sold_out, vec!["xl"]);
    assert!(options.iter().any(|option| option.label == "Extra Large (Out of Stock)"));

    Ok(())
}

#[test]
fn unrated_product_has_no_stars() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;

    assert_eq!(catalog.card("5")?.stars(), None);
    assert!(catalog.card("4")?.stars().is_some());

    Ok(())
}

#[test]
fn variant_without_stock_override_uses_product_stock() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;
    let mut card = catalog.card("5")?;

    card.select_variant("us-9");

    assert_eq!(card.resolution().stock, 10);

    card.select_variant("us-10");

    assert!(card.resolution().out_of_stock);

    Ok(())
}

#[test]
fn listing_and_cart_render() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;
    let mut cards = catalog.cards();
    let mut cart = Cart::new(catalog.currency()?);

    for card in &mut cards {
        card.select_variant("m");
    }

    for card in &cards {
        match card.add_to_cart(&mut cart, &TracingNotifier) {
            Ok(()) | Err(CartError::OutOfStock { .. }) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let mut out = Vec::new();

    write_showcase(&mut out, &cards)?;
    write_cart(&mut out, &cart)?;

    let text = String::from_utf8(out)?;

    assert!(text.contains("Vintage Leather Jacket"));
    assert!(text.contains("Out of Stock"));
    assert!(text.contains("Vintage Leather Jacket (Medium)"));
    assert!(text.contains("Elegant Summer Dress (Medium)"));
    assert!(!text.contains("Out of Stock Item - Sold Out Product (Black)"));

    // Headphones (Black) + jacket (Medium) + dress (Medium) + shoes (US 7) + watch
    assert_eq!(cart.len(), 5);
    assert_eq!(cart.subtotal()?, Money::from_minor(61_995, USD));

    Ok(())
}

#[test]
fn selections_are_per_card() -> TestResult {
    let catalog = Catalog::from_set("showcase")?;
    let mut first = catalog.card("4")?;
    let second = catalog.card("4")?;

    first.select_variant("l");

    assert_eq!(first.selector().selected().map(Variant::id), Some("l"));
    assert_eq!(second.selector().selected().map(Variant::id), Some("xs"));

    Ok(())
}
