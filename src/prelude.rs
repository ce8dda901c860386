//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    card::{CardSummary, ProductCard, StarRating},
    cart::{
        ADDED_TO_CART, Cart, CartEntry, CartError, CartLine, CartStore, Notifier,
        TracingNotifier, add_to_cart,
    },
    catalog::{Catalog, CatalogError},
    images::{ImageLoadState, ImageLoader, PLACEHOLDER_IMAGE, image_source},
    listing::{ListingError, write_cart, write_showcase},
    pricing::{
        LOW_STOCK_THRESHOLD, Resolution, discount_percentage, effective_discount_percentage,
        is_low_stock, is_out_of_stock, reference_price, resolve_price, resolve_stock,
    },
    products::{Product, ProductError, ProductKey, Rating},
    selection::{SelectionError, VariantOption, VariantSelector},
    variants::Variant,
};
