//! High-level configuration API.
//!
//! ## Purpose
//!
//! This module provides the fluent builder for [`TextFormat`], the one piece of
//! configuration the crate has, and re-exports the public types.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Deferred**: Misuse (a parameter set twice) is recorded and reported by `build()`.
//! * **Validated**: The separator is checked so that emitted text loads back.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TextFormatBuilder`] via `TextFormat::builder()`.
//! 2. Chain configuration methods (`.separator()`, `.field_width()`, etc.).
//! 3. Call `.build()` to obtain a validated [`TextFormat`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

// Internal dependencies
use crate::primitives::validator::Validator;

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::adapters::file::{read_file, write_file};
pub use crate::adapters::text::{emit, infer_dim, load, parse_grid, to_text};
pub use crate::algorithms::cross::{remove_min_cross, MIN_CROSS_DIM};
pub use crate::algorithms::diagonal::{diagonal_differs, diagonal_equal};
pub use crate::algorithms::extrema::{extreme, locate_extreme, Axis, Pick};
pub use crate::algorithms::masking::mask_col_minima;
pub use crate::algorithms::normalize::normalize_by_reference;
pub use crate::element::capability::{Binding, Capability};
pub use crate::element::float::FloatBinding;
pub use crate::element::integer::IntBinding;
pub use crate::element::layout::FixedWidth;
pub use crate::engine::output::{Rendered, TextFormat};
pub use crate::engine::typed::TypedMatrix;
pub use crate::primitives::errors::MatrixError;
pub use crate::primitives::storage::AnyMatrix;

/// Fluent builder for [`TextFormat`].
#[derive(Debug, Clone, Default)]
pub struct TextFormatBuilder {
    /// Cell separator (default: a single space).
    pub separator: Option<String>,

    /// Minimum cell width (default: 0, no padding).
    pub field_width: Option<usize>,

    /// Separator after the last cell of each row (default: false).
    pub trailing_separator: Option<bool>,

    /// Reject text after the last row when loading (default: true).
    pub strict: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl TextFormat {
    /// Start configuring a text format.
    pub fn builder() -> TextFormatBuilder {
        TextFormatBuilder::new()
    }
}

impl TextFormatBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            separator: None,
            field_width: None,
            trailing_separator: None,
            strict: None,
            duplicate_param: None,
        }
    }

    /// Set the cell separator.
    pub fn separator(mut self, separator: &str) -> Self {
        if self.separator.is_some() {
            self.duplicate_param = Some("separator");
        }
        self.separator = Some(separator.to_string());
        self
    }

    /// Right-align cells to at least `width` characters.
    pub fn field_width(mut self, width: usize) -> Self {
        if self.field_width.is_some() {
            self.duplicate_param = Some("field_width");
        }
        self.field_width = Some(width);
        self
    }

    /// Also write the separator after the last cell of each row.
    pub fn trailing_separator(mut self, enabled: bool) -> Self {
        if self.trailing_separator.is_some() {
            self.duplicate_param = Some("trailing_separator");
        }
        self.trailing_separator = Some(enabled);
        self
    }

    /// Reject (`true`) or ignore (`false`) text after the last row when loading.
    pub fn strict(mut self, strict: bool) -> Self {
        if self.strict.is_some() {
            self.duplicate_param = Some("strict");
        }
        self.strict = Some(strict);
        self
    }

    /// Validate the configuration and produce a [`TextFormat`].
    pub fn build(self) -> Result<TextFormat, MatrixError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(MatrixError::DuplicateParameter { parameter });
        }

        let mut format = TextFormat::default();
        if let Some(separator) = self.separator {
            Validator::validate_separator(&separator)?;
            format.separator = separator;
        }
        if let Some(width) = self.field_width {
            format.field_width = width;
        }
        if let Some(trailing) = self.trailing_separator {
            format.trailing_separator = trailing;
        }
        if let Some(strict) = self.strict {
            format.strict = strict;
        }

        Ok(format)
    }
}
