//! Typed façade over raw matrix storage.
//!
//! ## Purpose
//!
//! [`TypedMatrix`] binds an [`AnyMatrix`] to a [`Binding`] chosen once at
//! construction, so callers can read and write values instead of byte records
//! and run the algorithms without passing the capability around.
//!
//! ## Design notes
//!
//! * **Thin**: Every method forwards to the storage or the algorithms layer.
//! * **Width by construction**: Storage is always allocated with the binding's
//!   width, so layout checks in the algorithms never fail through this type.
//!
//! ## Invariants
//!
//! * `raw.width() == binding.width()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::algorithms::cross::remove_min_cross;
use crate::algorithms::diagonal::{diagonal_differs, diagonal_equal};
use crate::algorithms::extrema::{extreme, locate_extreme, Axis, Pick};
use crate::algorithms::masking::mask_col_minima;
use crate::algorithms::normalize::normalize_by_reference;
use crate::element::capability::Binding;
use crate::engine::output::{write_grid, TextFormat};
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

// ============================================================================
// TypedMatrix
// ============================================================================

/// A square matrix whose elements are interpreted by `B`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedMatrix<B> {
    raw: AnyMatrix,
    binding: B,
}

impl<B: Binding + Default> TypedMatrix<B> {
    /// Zero-filled `dim x dim` matrix using the default binding.
    pub fn new(dim: usize) -> Result<Self, MatrixError> {
        Self::with_binding(dim, B::default())
    }

    /// Build a matrix from rows of values using the default binding.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[B::Value]>,
    {
        Self::from_rows_with(rows, B::default())
    }
}

impl<B: Binding> TypedMatrix<B> {
    /// Zero-filled `dim x dim` matrix using `binding`.
    pub fn with_binding(dim: usize, binding: B) -> Result<Self, MatrixError> {
        let mut raw = AnyMatrix::new(dim, binding.width())?;
        let mut zero = vec![0u8; binding.width()];
        binding.zero(&mut zero);
        if zero.iter().any(|&b| b != 0) {
            for row in 0..dim {
                for col in 0..dim {
                    raw.write(row, col, &zero)?;
                }
            }
        }
        Ok(Self { raw, binding })
    }

    /// Build a matrix from rows of values. Every row must have `rows.len()` entries.
    pub fn from_rows_with<R>(rows: &[R], binding: B) -> Result<Self, MatrixError>
    where
        R: AsRef<[B::Value]>,
    {
        let dim = rows.len();
        let mut matrix = Self::with_binding(dim, binding)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: dim,
                    got: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                matrix.set(row, col, value)?;
            }
        }
        Ok(matrix)
    }

    /// Wrap existing storage. Its width must match the binding.
    pub fn from_raw(raw: AnyMatrix, binding: B) -> Result<Self, MatrixError> {
        Validator::validate_layout(&raw, binding.width())?;
        Ok(Self { raw, binding })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.raw.dim()
    }

    /// The binding interpreting the elements.
    #[inline]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Borrow the underlying storage.
    #[inline]
    pub fn as_raw(&self) -> &AnyMatrix {
        &self.raw
    }

    /// Give up the binding and keep the storage.
    #[inline]
    pub fn into_raw(self) -> AnyMatrix {
        self.raw
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<B::Value, MatrixError> {
        Ok(self.binding.decode(self.raw.read(row, col)?))
    }

    /// Store `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: B::Value) -> Result<(), MatrixError> {
        let mut record = vec![0u8; self.binding.width()];
        self.binding.encode(value, &mut record);
        self.raw.write(row, col, &record)
    }

    /// All values, row by row.
    pub fn to_rows(&self) -> Vec<Vec<B::Value>> {
        (0..self.dim())
            .map(|row| {
                self.raw
                    .row_records(row)
                    .map(|record| self.binding.decode(record))
                    .collect()
            })
            .collect()
    }

    // ========================================================================
    // Algorithms
    // ========================================================================

    /// Index of the extremal element on one row or column.
    pub fn extreme(&self, axis: Axis, index: usize, pick: Pick) -> Result<usize, MatrixError> {
        extreme(&self.raw, &self.binding, axis, index, pick)
    }

    /// Position of the extremal element of the whole matrix.
    pub fn locate_extreme(&self, pick: Pick) -> Result<Option<(usize, usize)>, MatrixError> {
        locate_extreme(&self.raw, &self.binding, pick)
    }

    /// New matrix with each row divided by the maximum of the same row of `reference`.
    pub fn normalized_by(&self, reference: &Self) -> Result<Self, MatrixError>
    where
        B: Clone,
    {
        let raw = normalize_by_reference(&self.raw, &reference.raw, &self.binding)?;
        Ok(Self {
            raw,
            binding: self.binding.clone(),
        })
    }

    /// Replace every column minimum with the binding's zero.
    pub fn mask_col_minima(&mut self) -> Result<&mut Self, MatrixError> {
        let mut zero = vec![0u8; self.binding.width()];
        self.binding.zero(&mut zero);
        mask_col_minima(&mut self.raw, &self.binding, &zero)?;
        Ok(self)
    }

    /// True if every diagonal pair of `self` and `other` is equal.
    pub fn diagonal_equal(&self, other: &Self) -> Result<bool, MatrixError> {
        diagonal_equal(&self.raw, &other.raw, &self.binding)
    }

    /// True if at least one diagonal pair of `self` and `other` differs.
    pub fn diagonal_differs(&self, other: &Self) -> Result<bool, MatrixError> {
        diagonal_differs(&self.raw, &other.raw, &self.binding)
    }

    /// New matrix without the row and column through the minimum.
    pub fn remove_min_cross(&self) -> Result<Self, MatrixError>
    where
        B: Clone,
    {
        let raw = remove_min_cross(&self.raw, &self.binding)?;
        Ok(Self {
            raw,
            binding: self.binding.clone(),
        })
    }
}

impl<B: Binding> Display for TypedMatrix<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_grid(&self.raw, &self.binding, f, &TextFormat::default())
    }
}
