//! Showcase configuration

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser};
use thiserror::Error;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Errors parsing a `PRODUCT=VARIANT` selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionArgError {
    /// No `=` separator
    #[error("expected PRODUCT=VARIANT, got: {0}")]
    MissingSeparator(String),

    /// Product or variant is blank
    #[error("product and variant must not be empty: {0}")]
    Empty(String),
}

/// A variant to select on a product card before listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantChoice {
    /// Product identifier
    pub product: String,

    /// Variant identifier
    pub variant: String,
}

impl FromStr for VariantChoice {
    type Err = SelectionArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product, variant) = s
            .split_once('=')
            .ok_or_else(|| SelectionArgError::MissingSeparator(s.to_string()))?;

        let (product, variant) = (product.trim(), variant.trim());

        if product.is_empty() || variant.is_empty() {
            return Err(SelectionArgError::Empty(s.to_string()));
        }

        Ok(VariantChoice {
            product: product.to_string(),
            variant: variant.to_string(),
        })
    }
}

/// Arguments for the showcase demo
#[derive(Debug, Parser)]
#[command(name = "showcase", about = "Product showcase listing", long_about = None)]
pub struct ShowcaseArgs {
    /// Fixture set to list
    #[arg(short, long, default_value = "showcase")]
    pub fixture: String,

    /// Directory containing `products/` and `variants/` fixture sets
    #[arg(long, env = "FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Select a variant before listing (repeatable)
    #[arg(short, long = "select", value_name = "PRODUCT=VARIANT")]
    pub selections: Vec<VariantChoice>,

    /// Add a product to the cart with its current selection (repeatable)
    #[arg(short, long = "add", value_name = "PRODUCT")]
    pub additions: Vec<String>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
