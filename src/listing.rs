//! Listing
//!
//! Terminal rendering of product cards and cart contents.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    card::{CardSummary, ProductCard, StarRating},
    cart::{Cart, CartError, CartLine},
    products::MAX_STARS,
    variants::Variant,
};

const STOCK_COLUMN: usize = 6;
const PRICE_COLUMN: usize = 3;
const WAS_COLUMN: usize = 4;

/// Errors that can occur when writing a listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Error totalling the cart.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Highlight applied to a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// Nothing left to sell
    SoldOut,
    /// Only a few left
    Scarce,
    /// Discounted price
    Deal,
    /// Struck-through reference price
    Faded,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::SoldOut => Color::FG_RED,
            Tone::Scarce => Color::FG_YELLOW,
            Tone::Deal => Color::FG_GREEN,
            Tone::Faded => Color::FG_BRIGHT_BLACK,
        }
    }
}

/// Stock cell text and its highlight, if any.
fn stock_cell(summary: &CardSummary<'_, '_>) -> (String, Option<Tone>) {
    if summary.out_of_stock {
        ("Out of Stock".to_string(), Some(Tone::SoldOut))
    } else if summary.low_stock {
        (format!("Only {} left", summary.stock), Some(Tone::Scarce))
    } else {
        (summary.stock.to_string(), None)
    }
}

/// Write one row per product card: name, selected option, price, discount, stock and rating.
///
/// # Errors
///
/// Returns [`ListingError::IO`] if the output cannot be written.
pub fn write_showcase<'c, 'a: 'c>(
    out: &mut impl io::Write,
    cards: impl IntoIterator<Item = &'c ProductCard<'a>>,
) -> Result<(), ListingError> {
    let mut builder = Builder::default();
    let mut tones: Vec<(usize, usize, Tone)> = Vec::new();

    builder.push_record(["#", "Product", "Option", "Price", "Was", "Off", "Stock", "Rating"]);

    for (row, card) in (1..).zip(cards) {
        let summary = card.summary();
        let (stock, stock_tone) = stock_cell(&summary);

        if let Some(tone) = stock_tone {
            tones.push((row, STOCK_COLUMN, tone));
        }

        let (was, off) = match summary.reference_price {
            Some(reference) if summary.discount_percentage > 0 => {
                tones.push((row, PRICE_COLUMN, Tone::Deal));
                tones.push((row, WAS_COLUMN, Tone::Faded));

                (
                    reference.to_string(),
                    format!("-{}%", summary.discount_percentage),
                )
            }
            _ => (String::new(), String::new()),
        };

        builder.push_record([
            row.to_string(),
            summary.title,
            summary.variant.map(Variant::name).unwrap_or_default().to_string(),
            summary.price.to_string(),
            was,
            off,
            stock,
            summary.stars.map(stars).unwrap_or_default(),
        ]);
    }

    write_table(out, builder, PRICE_COLUMN, &tones)
}

/// Write the cart lines followed by the subtotal.
///
/// # Errors
///
/// Returns an error if a line total overflows or the output cannot be written.
pub fn write_cart(out: &mut impl io::Write, cart: &Cart<'_>) -> Result<(), ListingError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Qty", "Unit", "Total"]);

    for (row, line) in (1..).zip(cart.iter()) {
        builder.push_record([
            row.to_string(),
            describe_line(line),
            line.quantity().to_string(),
            line.entry().unit_price().to_string(),
            line.line_total()?.to_string(),
        ]);
    }

    write_table(out, builder, 2, &[])?;

    writeln!(
        out,
        " Subtotal: {} ({} items)\n",
        cart.subtotal()?,
        cart.item_count()
    )
    .map_err(|_err| ListingError::IO)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    numeric_from: usize,
    tones: &[(usize, usize, Tone)],
) -> Result<(), ListingError> {
    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(numeric_from..), Alignment::right());

    for &(row, col, tone) in tones {
        table.modify((row, col), tone.color());
    }

    writeln!(out, "\n{table}").map_err(|_err| ListingError::IO)
}

fn describe_line(line: &CartLine<'_>) -> String {
    let entry = line.entry();

    match entry.variant() {
        Some(variant) => format!("{} ({})", entry.product().name(), variant.name()),
        None => entry.product().name().to_string(),
    }
}

fn stars(rating: StarRating) -> String {
    let filled = usize::from(rating.filled.min(MAX_STARS));
    let empty = usize::from(MAX_STARS).saturating_sub(filled);

    format!("{}{} ({})", "★".repeat(filled), "☆".repeat(empty), rating.reviews)
}
