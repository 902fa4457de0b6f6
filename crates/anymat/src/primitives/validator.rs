//! Precondition checks shared by algorithms and adapters.
//!
//! ## Purpose
//!
//! Algorithms promise that a call either succeeds completely or fails before
//! touching any cell. This module holds the checks they run up front.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Width-based**: Checks take plain widths so this layer stays independent
//!   of the capability trait.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// Internal dependencies
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;

/// Validation utility for matrix operands and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Operand Validation
    // ========================================================================

    /// Validate that a matrix stores records of `width` bytes.
    pub fn validate_layout(matrix: &AnyMatrix, width: usize) -> Result<(), MatrixError> {
        Self::validate_payload(matrix.width(), width)
    }

    /// Validate that a payload of `got` bytes fits records of `expected` bytes.
    pub fn validate_payload(expected: usize, got: usize) -> Result<(), MatrixError> {
        if expected != got {
            return Err(MatrixError::LayoutMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that two operands have the same dimension and width.
    pub fn validate_same_shape(left: &AnyMatrix, right: &AnyMatrix) -> Result<(), MatrixError> {
        if left.dim() != right.dim() {
            return Err(MatrixError::ShapeMismatch {
                left: left.dim(),
                right: right.dim(),
            });
        }
        Self::validate_payload(left.width(), right.width())
    }

    /// Validate a row or column index.
    pub fn validate_line(matrix: &AnyMatrix, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= matrix.dim() || col >= matrix.dim() {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                dim: matrix.dim(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate a field separator.
    ///
    /// Loading splits on whitespace, so the separator must be non-empty and
    /// made of spaces or tabs for emitted text to load back.
    pub fn validate_separator(separator: &str) -> Result<(), MatrixError> {
        if separator.is_empty() {
            return Err(MatrixError::InvalidFormat(
                "separator must not be empty".to_string(),
            ));
        }
        if !separator.chars().all(|c| c == ' ' || c == '\t') {
            return Err(MatrixError::InvalidFormat(
                "separator must be spaces or tabs".to_string(),
            ));
        }
        Ok(())
    }
}
