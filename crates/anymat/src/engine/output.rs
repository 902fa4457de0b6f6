//! Text rendering of matrices.
//!
//! ## Purpose
//!
//! This module defines [`TextFormat`], the resolved text layout, and the grid
//! writer shared by `Display` and the emit adapters.
//!
//! ## Design notes
//!
//! * **Capability-driven**: Each cell is written by the capability's formatter.
//! * **Padding**: Cells are right-aligned to `field_width` when it is non-zero.
//! * **Ergonomics**: [`AnyMatrix::display`] pairs a matrix with a capability of
//!   matching width so it can be used with `{}`.
//!
//! ## Invariants
//!
//! * Every row ends with exactly one `'\n'`.
//! * Cells within a row are joined by `separator`.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see the text adapter).
//! * This module does not validate formats (see the API builder).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

// External dependencies
use core::fmt::{self, Display, Formatter, Write};

// Internal dependencies
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

// ============================================================================
// TextFormat
// ============================================================================

/// Layout of the text form of a matrix.
///
/// Obtained from `TextFormat::default()` or a validated builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Written between cells of a row.
    pub(crate) separator: String,

    /// Minimum cell width; shorter cells are right-aligned. `0` disables padding.
    pub(crate) field_width: usize,

    /// Whether the separator is also written after the last cell of a row.
    pub(crate) trailing_separator: bool,

    /// Whether non-blank text after the last row is an error when loading.
    pub(crate) strict: bool,
}

impl TextFormat {
    /// Written between cells of a row.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Minimum cell width. `0` means no padding.
    #[inline]
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    /// Whether rows end with a separator.
    #[inline]
    pub fn trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Whether loading rejects text after the last row.
    #[inline]
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            field_width: 0,
            trailing_separator: false,
            strict: true,
        }
    }
}

// ============================================================================
// Grid Writer
// ============================================================================

/// Write `matrix` row by row into `sink`.
///
/// The caller guarantees that `capability.width() == matrix.width()`.
pub fn write_grid<C, W>(
    matrix: &AnyMatrix,
    capability: &C,
    sink: &mut W,
    format: &TextFormat,
) -> fmt::Result
where
    C: Capability + ?Sized,
    W: Write + ?Sized,
{
    let mut cell = String::new();

    for row in 0..matrix.dim() {
        for col in 0..matrix.dim() {
            if col > 0 {
                sink.write_str(&format.separator)?;
            }
            cell.clear();
            let element = matrix.read(row, col).map_err(|_| fmt::Error)?;
            capability.format(element, &mut cell)?;
            write!(sink, "{:>width$}", cell, width = format.field_width)?;
        }
        if format.trailing_separator && matrix.dim() > 0 {
            sink.write_str(&format.separator)?;
        }
        sink.write_char('\n')?;
    }

    Ok(())
}

// ============================================================================
// Display Adapter
// ============================================================================

/// A matrix paired with the capability that can print it.
///
/// Created by [`AnyMatrix::display`], which checks the capability width.
pub struct Rendered<'a, C: ?Sized> {
    matrix: &'a AnyMatrix,
    capability: &'a C,
}

impl AnyMatrix {
    /// Borrow this matrix for `{}` formatting with the default text format.
    ///
    /// Fails with [`MatrixError::LayoutMismatch`] if `capability` does not
    /// read records of this matrix's width.
    pub fn display<'a, C>(&'a self, capability: &'a C) -> Result<Rendered<'a, C>, MatrixError>
    where
        C: Capability + ?Sized,
    {
        Validator::validate_layout(self, capability.width())?;
        Ok(Rendered {
            matrix: self,
            capability,
        })
    }
}

impl<C: Capability + ?Sized> Display for Rendered<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_grid(self.matrix, self.capability, f, &TextFormat::default())
    }
}
