//! Storefront
//!
//! Storefront resolves what a product card shows: the effective price and stock of a
//! product with its selected variant, discount badges, low-stock warnings, image
//! fallbacks, and the add to cart action.

pub mod card;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod images;
pub mod listing;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod selection;
pub mod variants;
