//! Pricing
//!
//! Resolves the effective price, stock and discount of a product with an optional
//! variant applied. Every function here is pure and infallible.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{products::Product, variants::Variant};

/// Effective stock at or below this level (but above zero) is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Returns the variant price when it is set, positive and in the product's currency,
/// otherwise the product price.
pub fn resolve_price<'a>(
    product: &Product<'a>,
    variant: Option<&Variant<'a>>,
) -> Money<'a, Currency> {
    variant
        .and_then(Variant::price)
        .filter(|price| price.is_positive() && price.currency() == product.currency())
        .unwrap_or_else(|| product.price())
}

/// Returns the variant stock when it is set (zero included), otherwise the product stock.
pub fn resolve_stock(product: &Product<'_>, variant: Option<&Variant<'_>>) -> u32 {
    variant
        .and_then(Variant::stock)
        .unwrap_or_else(|| product.stock())
}

/// Returns true if the effective stock is zero.
pub fn is_out_of_stock(product: &Product<'_>, variant: Option<&Variant<'_>>) -> bool {
    resolve_stock(product, variant) == 0
}

/// Returns true if the effective stock is between one and [`LOW_STOCK_THRESHOLD`].
pub fn is_low_stock(product: &Product<'_>, variant: Option<&Variant<'_>>) -> bool {
    (1..=LOW_STOCK_THRESHOLD).contains(&resolve_stock(product, variant))
}

/// Whole-percent reduction of the base price against the reference price.
///
/// Variant prices are ignored. Returns 0 without a reference price above the base
/// price, otherwise a value in `1..=99`.
pub fn discount_percentage(product: &Product<'_>) -> u8 {
    product
        .cutted_price()
        .map_or(0, |reference| percent_off(reference, product.price()))
}

/// Like [`discount_percentage`], but measured against the effective price.
pub fn effective_discount_percentage(
    product: &Product<'_>,
    variant: Option<&Variant<'_>>,
) -> u8 {
    product.cutted_price().map_or(0, |reference| {
        percent_off(reference, resolve_price(product, variant))
    })
}

/// The reference price to show struck through, if it is above the effective price.
pub fn reference_price<'a>(
    product: &Product<'a>,
    variant: Option<&Variant<'a>>,
) -> Option<Money<'a, Currency>> {
    let current = resolve_price(product, variant).to_minor_units();

    product
        .cutted_price()
        .filter(|reference| reference.to_minor_units() > current)
}

/// Rounded percentage by which `price` undercuts `reference`.
fn percent_off(reference: Money<'_, Currency>, price: Money<'_, Currency>) -> u8 {
    let reference_minor = reference.to_minor_units();
    let price_minor = price.to_minor_units();

    if reference.currency() != price.currency() || reference_minor <= price_minor {
        return 0;
    }

    let fraction = Percentage::from(
        Decimal::from(reference_minor - price_minor) / Decimal::from(reference_minor),
    );

    let points = ((fraction * Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    points.to_u8().unwrap_or(99).clamp(1, 99)
}

/// Every value derived from a product and its selected variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// Effective price
    pub price: Money<'a, Currency>,

    /// Effective stock
    pub stock: u32,

    /// Reference price to strike through, if above the effective price
    pub reference_price: Option<Money<'a, Currency>>,

    /// Discount badge percentage, measured against the base price
    pub discount_percentage: u8,

    /// Effective stock is zero
    pub out_of_stock: bool,

    /// Effective stock is low but not zero
    pub low_stock: bool,
}

impl<'a> Resolution<'a> {
    /// Resolve a product with an optional selected variant.
    pub fn resolve(product: &Product<'a>, variant: Option<&Variant<'a>>) -> Self {
        let stock = resolve_stock(product, variant);

        Self {
            price: resolve_price(product, variant),
            stock,
            reference_price: reference_price(product, variant),
            discount_percentage: discount_percentage(product),
            out_of_stock: stock == 0,
            low_stock: (1..=LOW_STOCK_THRESHOLD).contains(&stock),
        }
    }
}
