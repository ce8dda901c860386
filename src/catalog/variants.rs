//! Variant Fixtures

use rustc_hash::FxHashMap;
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    catalog::{CatalogError, products::parse_price},
    variants::Variant,
};

/// Wrapper for variants in YAML
#[derive(Debug, Deserialize)]
pub struct VariantsFixture {
    /// Map of product id -> variants in display order
    pub variants: FxHashMap<String, Vec<VariantFixture>>,
}

/// Variant Fixture
#[derive(Debug, Deserialize)]
pub struct VariantFixture {
    /// Variant identifier
    pub id: String,

    /// Variant name
    pub name: String,

    /// Price override (e.g., "169.99 USD")
    #[serde(default)]
    pub price: Option<String>,

    /// Stock override
    #[serde(default)]
    pub stock: Option<u32>,
}

impl TryFrom<VariantFixture> for Variant<'_> {
    type Error = CatalogError;

    fn try_from(fixture: VariantFixture) -> Result<Self, Self::Error> {
        let mut variant = Variant::new(fixture.id, fixture.name);

        if let Some(price) = fixture.price {
            let (minor_units, currency) = parse_price(&price)?;

            if minor_units < 0 {
                return Err(CatalogError::InvalidPrice(price));
            }

            variant = variant.with_price(Money::from_minor(minor_units, currency));
        }

        if let Some(stock) = fixture.stock {
            variant = variant.with_stock(stock);
        }

        Ok(variant)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn fixture_converts_to_variant() -> TestResult {
        let fixture: VariantFixture =
            serde_norway::from_str("id: l\nname: Large\nprice: 169.99 USD\nstock: 0\n")?;

        let variant = Variant::try_from(fixture)?;

        assert_eq!(variant.id(), "l");
        assert_eq!(variant.price(), Some(Money::from_minor(16999, USD)));
        assert_eq!(variant.stock(), Some(0));

        Ok(())
    }

    #[test]
    fn overrides_are_optional() -> TestResult {
        let fixture: VariantFixture = serde_norway::from_str("id: s\nname: Small\n")?;

        let variant = Variant::try_from(fixture)?;

        assert_eq!(variant.price(), None);
        assert_eq!(variant.stock(), None);

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() -> TestResult {
        let fixture: VariantFixture =
            serde_norway::from_str("id: s\nname: Small\nprice: -1.00 USD\n")?;

        assert!(matches!(
            Variant::try_from(fixture),
            Err(CatalogError::InvalidPrice(_))
        ));

        Ok(())
    }
}
