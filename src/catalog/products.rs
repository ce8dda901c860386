//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{catalog::CatalogError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "2.99 GBP")
    pub price: String,

    /// Pre-discount reference price (e.g., "3.49 GBP")
    #[serde(default)]
    pub cutted_price: Option<String>,

    /// Base stock count
    pub stock: u32,

    /// Average rating, 0-5
    #[serde(default)]
    pub rating: Option<Decimal>,

    /// Number of reviews
    #[serde(default)]
    pub reviews: u32,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// Single image URL, shown after any `images`
    #[serde(default)]
    pub image: Option<String>,

    /// Category label
    #[serde(default)]
    pub category: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = CatalogError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let mut product = Product::new(
            fixture.id,
            fixture.name,
            Money::from_minor(minor_units, currency),
            fixture.stock,
        )?;

        if let Some(cutted_price) = fixture.cutted_price {
            let (minor_units, currency) = parse_price(&cutted_price)?;

            product = product.with_cutted_price(Money::from_minor(minor_units, currency))?;
        }

        if let Some(rating) = fixture.rating {
            product = product.with_rating(rating, fixture.reviews)?;
        }

        let images = fixture.images.into_iter().chain(fixture.image);

        Ok(product
            .with_images(images)
            .with_category(fixture.category))
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductError;

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99GBP");

        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(CatalogError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_usd_and_eur() -> Result<(), CatalogError> {
        let (usd_minor, usd) = parse_price("199.99 USD")?;
        let (eur_minor, eur) = parse_price("2.50 EUR")?;

        assert_eq!(usd_minor, 19999);
        assert_eq!(usd, USD);
        assert_eq!(eur_minor, 250);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn fixture_converts_to_product() -> TestResult {
        let fixture: ProductFixture = serde_norway::from_str(
            "id: jacket\n\
             name: Vintage Leather Jacket\n\
             price: 159.99 USD\n\
             cutted_price: 199.99 USD\n\
             stock: 3\n\
             rating: 4.8\n\
             reviews: 89\n\
             images: [/a.jpg]\n\
             image: /b.jpg\n\
             category: men's clothing\n",
        )?;

        let product = Product::try_from(fixture)?;

        assert_eq!(product.id(), "jacket");
        assert_eq!(product.price(), Money::from_minor(15999, USD));
        assert_eq!(product.cutted_price(), Some(Money::from_minor(19999, USD)));
        assert_eq!(product.stock(), 3);
        assert_eq!(product.rating().map(|rating| rating.reviews()), Some(89));
        assert_eq!(product.images(), ["/a.jpg".to_string(), "/b.jpg".to_string()]);
        assert_eq!(product.category(), "men's clothing");

        Ok(())
    }

    #[test]
    fn fixture_with_mixed_currencies_is_rejected() -> TestResult {
        let fixture: ProductFixture = serde_norway::from_str(
            "id: cap\nname: Cap\nprice: 9.00 USD\ncutted_price: 12.00 GBP\nstock: 1\n",
        )?;

        let result = Product::try_from(fixture);

        assert!(matches!(
            result,
            Err(CatalogError::Product(ProductError::CurrencyMismatch(_, _, _)))
        ));

        Ok(())
    }
}
