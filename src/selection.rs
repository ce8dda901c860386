//! Variant Selection

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::variants::Variant;

/// Errors raised by strict variant selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// No variant with the given identifier exists.
    #[error("Variant not found: {0}")]
    VariantNotFound(String),
}

/// One entry of a variant dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption<'v> {
    /// Variant identifier
    pub id: &'v str,

    /// Display label, marked when the variant has no stock
    pub label: String,

    /// The option cannot be chosen because the variant has no stock
    pub disabled: bool,

    /// The option is the current selection
    pub selected: bool,
}

/// Holds the variant list of one product display and the current selection.
///
/// The selection defaults to the first variant. It can only change through
/// [`VariantSelector::select_variant`] or [`VariantSelector::try_select_variant`].
#[derive(Debug, Clone, Default)]
pub struct VariantSelector<'a> {
    variants: SmallVec<[Variant<'a>; 4]>,
    selected: Option<usize>,
}

impl<'a> VariantSelector<'a> {
    /// Create a selector over the given variants, selecting the first one.
    pub fn new(variants: impl IntoIterator<Item = Variant<'a>>) -> Self {
        let variants: SmallVec<[Variant<'a>; 4]> = variants.into_iter().collect();
        let selected = if variants.is_empty() { None } else { Some(0) };

        Self { variants, selected }
    }

    /// The selected variant, if any.
    pub fn selected(&self) -> Option<&Variant<'a>> {
        self.selected.and_then(|idx| self.variants.get(idx))
    }

    /// All variants, in display order.
    pub fn variants(&self) -> &[Variant<'a>] {
        &self.variants
    }

    /// Returns true if there are no variants to choose from.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Select the variant with the given identifier.
    ///
    /// Unknown identifiers leave the selection untouched. Returns whether the
    /// identifier was found.
    pub fn select_variant(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            debug!(variant = id, "ignoring selection of unknown variant");

            return false;
        };

        debug!(variant = id, "selected variant");

        self.selected = Some(idx);

        true
    }

    /// Select the variant with the given identifier, failing if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::VariantNotFound`] if no variant has the identifier. The
    /// selection is left untouched.
    pub fn try_select_variant(&mut self, id: &str) -> Result<&Variant<'a>, SelectionError> {
        let idx = self
            .position(id)
            .ok_or_else(|| SelectionError::VariantNotFound(id.to_string()))?;

        debug!(variant = id, "selected variant");

        self.selected = Some(idx);

        self.variants
            .get(idx)
            .ok_or_else(|| SelectionError::VariantNotFound(id.to_string()))
    }

    /// Dropdown options for every variant.
    pub fn options(&self) -> impl Iterator<Item = VariantOption<'_>> {
        self.variants.iter().enumerate().map(|(idx, variant)| {
            let disabled = variant.is_sold_out();

            let label = if disabled {
                format!("{} (Out of Stock)", variant.name())
            } else {
                variant.name().to_string()
            };

            VariantOption {
                id: variant.id(),
                label,
                disabled,
                selected: self.selected == Some(idx),
            }
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant.id() == id)
    }
}
