//! Products

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Highest aggregate rating a product can carry.
pub const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Number of stars a rating is shown with.
pub const MAX_STARS: u8 = 5;

/// Errors raised while building a product record.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// A price was below zero.
    #[error("price for {0} must not be negative")]
    NegativePrice(String),

    /// The reference price is in a different currency to the base price (product, base, reference).
    #[error("reference price for {0} is in {2}, but base price is in {1}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// The rating was outside `0..=5`.
    #[error("rating {1} for {0} is outside 0-5")]
    InvalidRating(String, Decimal),
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    value: Decimal,
    reviews: u32,
}

impl Rating {
    /// Average rating, `0..=5`.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Number of reviews behind the average.
    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    /// Whole stars to fill, i.e. the rating rounded down.
    pub fn filled_stars(&self) -> u8 {
        self.value.floor().to_u8().unwrap_or(0)
    }
}

/// Product
///
/// A read-only snapshot of a catalog record. Prices share a single currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    id: String,
    name: String,
    price: Money<'a, Currency>,
    cutted_price: Option<Money<'a, Currency>>,
    stock: u32,
    rating: Option<Rating>,
    images: Vec<String>,
    category: String,
}

impl<'a> Product<'a> {
    /// Creates a new product with no reference price, rating, images or category.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativePrice`] if `price` is below zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        stock: u32,
    ) -> Result<Self, ProductError> {
        let id = id.into();

        if price.is_negative() {
            return Err(ProductError::NegativePrice(id));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            cutted_price: None,
            stock,
            rating: None,
            images: Vec::new(),
            category: String::new(),
        })
    }

    /// Sets the pre-discount reference price.
    ///
    /// # Errors
    ///
    /// - [`ProductError::NegativePrice`]: the reference price is below zero.
    /// - [`ProductError::CurrencyMismatch`]: the reference price is not in the base price currency.
    pub fn with_cutted_price(
        mut self,
        cutted_price: Money<'a, Currency>,
    ) -> Result<Self, ProductError> {
        if cutted_price.is_negative() {
            return Err(ProductError::NegativePrice(self.id));
        }

        if cutted_price.currency() != self.price.currency() {
            return Err(ProductError::CurrencyMismatch(
                self.id,
                self.price.currency().iso_alpha_code,
                cutted_price.currency().iso_alpha_code,
            ));
        }

        self.cutted_price = Some(cutted_price);

        Ok(self)
    }

    /// Sets the aggregate rating and review count.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::InvalidRating`] if `value` is outside `0..=5`.
    pub fn with_rating(mut self, value: Decimal, reviews: u32) -> Result<Self, ProductError> {
        if value.is_sign_negative() || value > MAX_RATING {
            return Err(ProductError::InvalidRating(self.id, value));
        }

        self.rating = Some(Rating { value, reviews });

        Ok(self)
    }

    /// Sets the image URLs, in display order.
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Catalog identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base price
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }

    /// Pre-discount reference price, if any
    pub fn cutted_price(&self) -> Option<Money<'a, Currency>> {
        self.cutted_price
    }

    /// Base stock count
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Aggregate rating, if any
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Image URLs
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Currency of every price on this product.
    pub fn currency(&self) -> &'a Currency {
        self.price.currency()
    }
}
