//! Owned byte storage for square matrices of opaque elements.
//!
//! ## Purpose
//!
//! This module provides [`AnyMatrix`], the container at the bottom of the crate.
//! It knows the dimension and the byte width of one element, and nothing about
//! what the bytes mean. Interpretation is left to a capability binding.
//!
//! ## Design notes
//!
//! * **Single arena**: All `dim * dim` records live in one contiguous `Vec<u8>`,
//!   row-major, `width` bytes per record.
//! * **Checked access**: Every read and write validates the indices, and writes
//!   validate the payload width.
//! * **Value semantics**: `Clone` is a deep copy; `Drop` releases the arena.
//!
//! ## Key concepts
//!
//! * **Record**: The `width`-byte slice holding one element.
//! * **Offset**: `(row * dim + col) * width`.
//!
//! ## Invariants
//!
//! * `data.len() == dim * dim * width` for the lifetime of the matrix.
//! * `width > 0` and never changes after construction.
//! * Freshly constructed storage is zero-filled.
//!
//! ## Non-goals
//!
//! * This module does not interpret element bytes.
//! * This module does not hand out the raw arena outside the crate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::MatrixError;

// ============================================================================
// AnyMatrix
// ============================================================================

/// Square matrix of fixed-width byte records.
///
/// Two matrices are equal when they have the same dimension, the same element
/// width, and byte-identical contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyMatrix {
    dim: usize,
    width: usize,
    data: Vec<u8>,
}

impl AnyMatrix {
    /// Allocate a zero-filled `dim x dim` matrix of `width`-byte elements.
    pub fn new(dim: usize, width: usize) -> Result<Self, MatrixError> {
        let invalid = MatrixError::InvalidDimension { dim, width };
        let len = dim
            .checked_mul(dim)
            .and_then(|cells| cells.checked_mul(width))
            .filter(|_| width > 0)
            .ok_or_else(|| invalid.clone())?;

        // Sizes past `isize::MAX` or beyond the allocator are reported, not aborted on.
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| invalid)?;
        data.resize(len, 0);

        Ok(Self { dim, width, data })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Size of one element record in bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(dim, width)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.dim, self.width)
    }

    /// True for a `0 x 0` matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// True if `other` has the same dimension and element width.
    #[inline]
    pub fn same_shape(&self, other: &AnyMatrix) -> bool {
        self.shape() == other.shape()
    }

    /// Borrow the record at `(row, col)`.
    pub fn read(&self, row: usize, col: usize) -> Result<&[u8], MatrixError> {
        let start = self.offset(row, col)?;
        Ok(&self.data[start..start + self.width])
    }

    /// Overwrite the record at `(row, col)` with `bytes`.
    pub fn write(&mut self, row: usize, col: usize, bytes: &[u8]) -> Result<(), MatrixError> {
        let start = self.offset(row, col)?;
        if bytes.len() != self.width {
            return Err(MatrixError::LayoutMismatch {
                expected: self.width,
                got: bytes.len(),
            });
        }
        self.data[start..start + self.width].copy_from_slice(bytes);
        Ok(())
    }

    // Records of one row, left to right. `row` must be below `dim`.
    pub(crate) fn row_records(&self, row: usize) -> core::slice::ChunksExact<'_, u8> {
        let stride = self.dim * self.width;
        self.data[row * stride..(row + 1) * stride].chunks_exact(self.width)
    }

    // Byte offset of a record, or the range error for it.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.dim || col >= self.dim {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok((row * self.dim + col) * self.width)
    }
}
