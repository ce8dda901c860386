//! Images

use crate::products::Product;

/// Image shown when a product has no usable image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/300";

/// Returns the first non-blank image URL of the product, or [`PLACEHOLDER_IMAGE`].
pub fn image_source<'p>(product: &'p Product<'_>) -> &'p str {
    product
        .images()
        .iter()
        .map(|url| url.trim())
        .find(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Loading state of a displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoadState {
    /// Waiting for the first load or error event
    Loading,

    /// The image loaded
    Loaded,

    /// The image failed and was swapped for the placeholder
    Failed,
}

/// Tracks the source and loading flag of one displayed image.
///
/// Events may arrive in any order; the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoader {
    source: String,
    state: ImageLoadState,
}

impl ImageLoader {
    /// Start loading the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            state: ImageLoadState::Loading,
        }
    }

    /// Start loading the image for a product.
    pub fn for_product(product: &Product<'_>) -> Self {
        Self::new(image_source(product))
    }

    /// Record a successful load.
    pub fn on_load(&mut self) {
        self.state = ImageLoadState::Loaded;
    }

    /// Record a failed load, falling back to the placeholder.
    pub fn on_error(&mut self) {
        PLACEHOLDER_IMAGE.clone_into(&mut self.source);
        self.state = ImageLoadState::Failed;
    }

    /// Current image source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current loading state.
    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    /// Returns true until a load or error event arrives.
    pub fn is_loading(&self) -> bool {
        self.state == ImageLoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::ProductError;

    use super::*;

    fn product_with_images(images: &[&str]) -> Result<Product<'static>, ProductError> {
        Ok(Product::new("p", "Product", Money::from_minor(100, USD), 1)?
            .with_images(images.iter().copied()))
    }

    #[test]
    fn uses_first_image() -> TestResult {
        let product = product_with_images(&["/a.jpg", "/b.jpg"])?;

        assert_eq!(image_source(&product), "/a.jpg");

        Ok(())
    }

    #[test]
    fn skips_blank_images() -> TestResult {
        let product = product_with_images(&["  ", "/b.jpg"])?;

        assert_eq!(image_source(&product), "/b.jpg");

        Ok(())
    }

    #[test]
    fn falls_back_to_placeholder() -> TestResult {
        assert_eq!(image_source(&product_with_images(&[])?), PLACEHOLDER_IMAGE);
        assert_eq!(image_source(&product_with_images(&[""])?), PLACEHOLDER_IMAGE);

        Ok(())
    }

    #[test]
    fn loader_starts_loading() -> TestResult {
        let loader = ImageLoader::for_product(&product_with_images(&["/a.jpg"])?);

        assert!(loader.is_loading());
        assert_eq!(loader.source(), "/a.jpg");

        Ok(())
    }

    #[test]
    fn error_swaps_to_placeholder() {
        let mut loader = ImageLoader::new("/broken.jpg");

        loader.on_error();

        assert!(!loader.is_loading());
        assert_eq!(loader.state(), ImageLoadState::Failed);
        assert_eq!(loader.source(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn last_event_wins() {
        let mut loader = ImageLoader::new("/a.jpg");

        loader.on_error();
        loader.on_load();

        assert_eq!(loader.state(), ImageLoadState::Loaded);
        assert_eq!(loader.source(), PLACEHOLDER_IMAGE);
    }
}
