//! Catalog
//!
//! Loads product and variant records from YAML fixture sets:
//!
//! - `<base>/products/<set>.yml`: a list of products, in catalog order
//! - `<base>/variants/<set>.yml`: product id -> variants, in display order

use std::{fs, path::PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    card::ProductCard,
    catalog::{
        products::{ProductsFixture, parse_price},
        variants::VariantsFixture,
    },
    products::{Product, ProductError, ProductKey},
    variants::Variant,
};

pub mod products;
pub mod variants;

/// Catalog Loading Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid product record
    #[error("Invalid product: {0}")]
    Product(#[from] ProductError),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product identifier appears twice
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// Variant identifier appears twice within one product
    #[error("Duplicate variant {variant} for product {product}")]
    DuplicateVariant {
        /// Product identifier
        product: String,
        /// Variant identifier
        variant: String,
    },
}

/// Catalog
#[derive(Debug)]
pub struct Catalog<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products stored with generated keys
    products: SlotMap<ProductKey, Product<'a>>,

    /// Product id -> `SlotMap` key
    product_keys: FxHashMap<String, ProductKey>,

    /// Keys in catalog order
    order: Vec<ProductKey>,

    /// Variants per product, in display order
    variants: FxHashMap<ProductKey, SmallVec<[Variant<'a>; 4]>>,

    /// Currency for the catalog
    currency: Option<&'static rusty_money::iso::Currency>,
}

impl<'a> Catalog<'a> {
    /// Create a new empty catalog with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty catalog with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            order: Vec::new(),
            variants: FxHashMap::default(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a product is invalid
    /// or duplicated, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, CatalogError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let mut currency = self.currency;
        let mut seen = FxHashSet::default();
        let mut staged: Vec<Product<'a>> = Vec::with_capacity(fixture.products.len());

        // Nothing is inserted until the whole file validates.
        for product_fixture in fixture.products {
            if self.product_keys.contains_key(&product_fixture.id)
                || !seen.insert(product_fixture.id.clone())
            {
                return Err(CatalogError::DuplicateProduct(product_fixture.id));
            }

            let (_, product_currency) = parse_price(&product_fixture.price)?;

            match currency {
                Some(existing) if existing != product_currency => {
                    return Err(CatalogError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(product_currency),
            }

            staged.push(product_fixture.try_into()?);
        }

        self.currency = currency;

        for product in staged {
            let id = product.id().to_string();
            let product_key = self.products.insert(product);

            self.product_keys.insert(id, product_key);
            self.order.push(product_key);
        }

        debug!(set = name, products = self.order.len(), "loaded products");

        Ok(self)
    }

    /// Load variants from a YAML fixture file
    ///
    /// Variants replace any previously loaded for the same product.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a referenced product
    /// doesn't exist, if a variant id repeats within a product, or if a variant price is
    /// invalid or in another currency.
    pub fn load_variants(&mut self, name: &str) -> Result<&mut Self, CatalogError> {
        let file_path = self.base_path.join("variants").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: VariantsFixture = serde_norway::from_str(&contents)?;

        let mut staged = Vec::with_capacity(fixture.variants.len());

        for (product_id, variant_fixtures) in fixture.variants {
            let product_key = self.product_key(&product_id)?;
            let currency = self.currency()?;

            let mut seen = FxHashSet::default();
            let mut variants: SmallVec<[Variant<'a>; 4]> = SmallVec::new();

            for variant_fixture in variant_fixtures {
                let variant: Variant<'a> = variant_fixture.try_into()?;

                if !seen.insert(variant.id().to_string()) {
                    return Err(CatalogError::DuplicateVariant {
                        product: product_id,
                        variant: variant.id().to_string(),
                    });
                }

                if let Some(price) = variant.price()
                    && price.currency() != currency
                {
                    return Err(CatalogError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        price.currency().iso_alpha_code.to_string(),
                    ));
                }

                variants.push(variant);
            }

            debug!(
                set = name,
                product = product_id,
                variants = variants.len(),
                "loaded variants"
            );

            staged.push((product_key, variants));
        }

        self.variants.extend(staged);

        Ok(self)
    }

    /// Load a complete fixture set (products and variants with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, CatalogError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::with_base_path(base_path);

        catalog.load_products(name)?.load_variants(name)?;

        Ok(catalog)
    }

    /// Get a product by its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, CatalogError> {
        let product_key = self.product_key(id)?;

        self.products
            .get(product_key)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Get a product key by its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, id: &str) -> Result<ProductKey, CatalogError> {
        self.product_keys
            .get(id)
            .copied()
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Get the variants of a product, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn variants(&self, id: &str) -> Result<&[Variant<'a>], CatalogError> {
        let product_key = self.product_key(id)?;

        Ok(self
            .variants
            .get(&product_key)
            .map_or(&[][..], SmallVec::as_slice))
    }

    /// Iterate over products in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no products are loaded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Create a product card for a product
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn card(&self, id: &str) -> Result<ProductCard<'a>, CatalogError> {
        let product = self.product(id)?.clone();
        let variants = self.variants(id)?.to_vec();

        Ok(ProductCard::new(product, variants))
    }

    /// Create a product card for every product, in catalog order
    pub fn cards(&self) -> Vec<ProductCard<'a>> {
        self.order
            .iter()
            .filter_map(|key| {
                let product = self.products.get(*key)?.clone();
                let variants = self
                    .variants
                    .get(key)
                    .map(|variants| variants.to_vec())
                    .unwrap_or_default();

                Some(ProductCard::new(product, variants))
            })
            .collect()
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static rusty_money::iso::Currency, CatalogError> {
        self.currency.ok_or(CatalogError::NoCurrency)
    }
}

impl Default for Catalog<'_> {
    fn default() -> Self {
        Self::new()
    }
}
