//! Product Card
//!
//! The display model of one product: its own variant selection and image state,
//! plus every value needed to render it.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{CartError, CartStore, Notifier, add_to_cart},
    images::ImageLoader,
    pricing::Resolution,
    products::Product,
    selection::{SelectionError, VariantOption, VariantSelector},
    variants::Variant,
};

/// Titles longer than this many characters are truncated.
pub const TITLE_MAX_CHARS: usize = 60;

/// Filled and total stars for a rated product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    /// Stars to fill, out of five
    pub filled: u8,

    /// Number of reviews
    pub reviews: u32,
}

/// Everything a product card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary<'c, 'a> {
    /// Truncated title
    pub title: String,

    /// Full product name
    pub name: &'c str,

    /// Current image source
    pub image: &'c str,

    /// The image has not finished loading
    pub image_loading: bool,

    /// Selected variant, if any
    pub variant: Option<&'c Variant<'a>>,

    /// Dropdown options
    pub options: Vec<VariantOption<'c>>,

    /// Effective price
    pub price: Money<'a, Currency>,

    /// Reference price to strike through
    pub reference_price: Option<Money<'a, Currency>>,

    /// Discount badge, zero when there is none
    pub discount_percentage: u8,

    /// Effective stock
    pub stock: u32,

    /// "Only N left" warning applies
    pub low_stock: bool,

    /// The add to cart action is unavailable
    pub out_of_stock: bool,

    /// Rating stars, when the product is rated
    pub stars: Option<StarRating>,

    /// Path of the product detail view
    pub detail_path: String,
}

/// One product display.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: Product<'a>,
    selector: VariantSelector<'a>,
    image: ImageLoader,
}

impl<'a> ProductCard<'a> {
    /// Create a card for a product, selecting its first variant.
    pub fn new(product: Product<'a>, variants: impl IntoIterator<Item = Variant<'a>>) -> Self {
        let image = ImageLoader::for_product(&product);

        Self {
            product,
            selector: VariantSelector::new(variants),
            image,
        }
    }

    /// The product shown
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// The variant selection
    pub fn selector(&self) -> &VariantSelector<'a> {
        &self.selector
    }

    /// The image state
    pub fn image(&self) -> &ImageLoader {
        &self.image
    }

    /// Select a variant by identifier; unknown identifiers are ignored.
    pub fn select_variant(&mut self, id: &str) -> bool {
        self.selector.select_variant(id)
    }

    /// Select a variant by identifier, failing if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::VariantNotFound`] if the product has no such variant.
    pub fn try_select_variant(&mut self, id: &str) -> Result<&Variant<'a>, SelectionError> {
        self.selector.try_select_variant(id)
    }

    /// Record that the image loaded.
    pub fn on_image_load(&mut self) {
        self.image.on_load();
    }

    /// Record that the image failed to load.
    pub fn on_image_error(&mut self) {
        self.image.on_error();
    }

    /// Resolve price and stock for the current selection.
    pub fn resolution(&self) -> Resolution<'a> {
        Resolution::resolve(&self.product, self.selector.selected())
    }

    /// Product name, truncated to [`TITLE_MAX_CHARS`] characters.
    pub fn title(&self) -> String {
        let name = self.product.name();

        if name.chars().count() > TITLE_MAX_CHARS {
            let truncated: String = name.chars().take(TITLE_MAX_CHARS).collect();

            format!("{truncated}...")
        } else {
            name.to_string()
        }
    }

    /// Rating stars, if the product has a positive rating.
    pub fn stars(&self) -> Option<StarRating> {
        self.product
            .rating()
            .filter(|rating| rating.value() > Decimal::ZERO)
            .map(|rating| StarRating {
                filled: rating.filled_stars(),
                reviews: rating.reviews(),
            })
    }

    /// Path of the product detail view.
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.product.id())
    }

    /// Add the product with the current selection to the cart.
    ///
    /// # Errors
    ///
    /// See [`add_to_cart`].
    pub fn add_to_cart<S, N>(&self, store: &mut S, notifier: &N) -> Result<(), CartError>
    where
        S: CartStore<'a> + ?Sized,
        N: Notifier + ?Sized,
    {
        add_to_cart(&self.product, &self.selector, store, notifier)
    }

    /// Summarise everything the card shows.
    pub fn summary(&self) -> CardSummary<'_, 'a> {
        let resolution = self.resolution();

        CardSummary {
            title: self.title(),
            name: self.product.name(),
            image: self.image.source(),
            image_loading: self.image.is_loading(),
            variant: self.selector.selected(),
            options: self.selector.options().collect(),
            price: resolution.price,
            reference_price: resolution.reference_price,
            discount_percentage: resolution.discount_percentage,
            stock: resolution.stock,
            low_stock: resolution.low_stock,
            out_of_stock: resolution.out_of_stock,
            stars: self.stars(),
            detail_path: self.detail_path(),
        }
    }
}
