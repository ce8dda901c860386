//! Cart
//!
//! Cart submission hands a [`CartEntry`] to an injected [`CartStore`] and signals an
//! injected [`Notifier`]. [`Cart`] is the in-memory store.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    pricing::{is_out_of_stock, resolve_price},
    products::Product,
    selection::VariantSelector,
    variants::Variant,
};

/// Message sent to the notifier after a successful submission.
pub const ADDED_TO_CART: &str = "Added to cart";

/// Errors related to cart submission and cart contents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The resolved product/variant has no stock.
    #[error("{product} is out of stock")]
    OutOfStock {
        /// Product identifier
        product: String,
        /// Selected variant identifier, if any
        variant: Option<String>,
    },

    /// An entry's currency differs from the cart currency (product, entry currency, cart currency).
    #[error("Entry {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// No line exists at the given index.
    #[error("Line {0} not found")]
    LineNotFound(usize),

    /// No line exists for the given product and variant.
    #[error("Item {0} not in cart")]
    ItemNotInCart(String),

    /// A line or cart total does not fit in minor units.
    #[error("cart total overflowed")]
    Overflow,
}

/// One add-to-cart action: the product record with the chosen variant attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry<'a> {
    product: Product<'a>,
    variant: Option<Variant<'a>>,
}

impl<'a> CartEntry<'a> {
    /// Creates a new cart entry.
    pub fn new(product: Product<'a>, variant: Option<Variant<'a>>) -> Self {
        Self { product, variant }
    }

    /// The product record
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// The chosen variant, if any
    pub fn variant(&self) -> Option<&Variant<'a>> {
        self.variant.as_ref()
    }

    /// Effective price of one unit of this entry.
    pub fn unit_price(&self) -> Money<'a, Currency> {
        resolve_price(&self.product, self.variant.as_ref())
    }

    /// Returns true if this entry is for the given product and variant.
    pub fn is_same_item(&self, product_id: &str, variant_id: Option<&str>) -> bool {
        self.product.id() == product_id && self.variant.as_ref().map(Variant::id) == variant_id
    }

    fn describe(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{}/{}", self.product.id(), variant.id()),
            None => self.product.id().to_string(),
        }
    }
}

/// Receives cart entries.
pub trait CartStore<'a> {
    /// Append an entry to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the store cannot accept the entry.
    fn add(&mut self, entry: CartEntry<'a>) -> Result<(), CartError>;
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    /// Signal a successful action.
    fn success(&self, message: &str);
}

/// Notifier that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = message, "success");
    }
}

/// Submit the product with the current selection to the cart.
///
/// # Errors
///
/// - [`CartError::OutOfStock`]: the product with the selected variant has no stock. The
///   store and notifier are not called.
/// - Any error returned by the store. The notifier is not called.
pub fn add_to_cart<'a, S, N>(
    product: &Product<'a>,
    selector: &VariantSelector<'a>,
    store: &mut S,
    notifier: &N,
) -> Result<(), CartError>
where
    S: CartStore<'a> + ?Sized,
    N: Notifier + ?Sized,
{
    let variant = selector.selected();

    if is_out_of_stock(product, variant) {
        warn!(
            product = product.id(),
            variant = variant.map(Variant::id),
            "rejected out of stock submission"
        );

        return Err(CartError::OutOfStock {
            product: product.id().to_string(),
            variant: variant.map(|v| v.id().to_string()),
        });
    }

    store.add(CartEntry::new(product.clone(), variant.cloned()))?;

    info!(
        product = product.id(),
        variant = variant.map(Variant::id),
        "added to cart"
    );

    notifier.success(ADDED_TO_CART);

    Ok(())
}

/// A cart entry with the number of times it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    entry: CartEntry<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// The entry on this line
    pub fn entry(&self) -> &CartEntry<'a> {
        &self.entry
    }

    /// Number of units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, CartError> {
        let unit = self.entry.unit_price();

        let total = unit
            .to_minor_units()
            .checked_mul(i64::from(self.quantity))
            .ok_or(CartError::Overflow)?;

        Ok(Money::from_minor(total, unit.currency()))
    }
}

/// In-memory cart. Repeated additions of the same item increase its quantity.
#[derive(Debug)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Remove the line for a product and variant, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotInCart`] if there is no such line.
    pub fn remove(
        &mut self,
        product_id: &str,
        variant_id: Option<&str>,
    ) -> Result<CartLine<'a>, CartError> {
        let idx = self
            .lines
            .iter()
            .position(|line| line.entry.is_same_item(product_id, variant_id))
            .ok_or_else(|| {
                CartError::ItemNotInCart(match variant_id {
                    Some(variant_id) => format!("{product_id}/{variant_id}"),
                    None => product_id.to_string(),
                })
            })?;

        Ok(self.lines.remove(idx))
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the subtotal does not fit in minor units.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, CartError> {
        let total = self.lines.iter().try_fold(0i64, |acc, line| {
            let line_total = line.line_total()?.to_minor_units();

            acc.checked_add(line_total).ok_or(CartError::Overflow)
        })?;

        Ok(Money::from_minor(total, self.currency))
    }

    /// Get a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if the index is out of range.
    pub fn line(&self, idx: usize) -> Result<&CartLine<'a>, CartError> {
        self.lines.get(idx).ok_or(CartError::LineNotFound(idx))
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'a> CartStore<'a> for Cart<'a> {
    fn add(&mut self, entry: CartEntry<'a>) -> Result<(), CartError> {
        let entry_currency = entry.unit_price().currency();

        if entry_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                entry.describe(),
                entry_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let product_id = entry.product().id();
        let variant_id = entry.variant().map(Variant::id);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.entry.is_same_item(product_id, variant_id))
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine { entry, quantity: 1 });
        }

        Ok(())
    }
}
