//! Variants

use rusty_money::{Money, iso::Currency};

/// A selectable sub-option of a product, such as a size or colour.
///
/// Price and stock are optional overrides of the owning product's values.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant<'a> {
    id: String,
    name: String,
    price: Option<Money<'a, Currency>>,
    stock: Option<u32>,
}

impl<'a> Variant<'a> {
    /// Creates a variant that inherits both price and stock from its product.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
            stock: None,
        }
    }

    /// Overrides the product price.
    #[must_use]
    pub fn with_price(mut self, price: Money<'a, Currency>) -> Self {
        self.price = Some(price);
        self
    }

    /// Overrides the product stock.
    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Identifier, unique within the product's variant list
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant price override, if any
    pub fn price(&self) -> Option<Money<'a, Currency>> {
        self.price
    }

    /// Variant stock override, if any
    pub fn stock(&self) -> Option<u32> {
        self.stock
    }

    /// Returns true if this variant explicitly has no stock.
    pub fn is_sold_out(&self) -> bool {
        self.stock == Some(0)
    }
}
