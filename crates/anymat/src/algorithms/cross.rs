//! Removal of the row and column crossing at the global minimum.
//!
//! ## Purpose
//!
//! Produces a `(dim - 1) x (dim - 1)` matrix without the row and the column
//! that intersect at the smallest element.
//!
//! ## Key concepts
//!
//! * **Cross**: The row and column through one cell.
//! * **Minimum dimension**: Matrices smaller than `MIN_CROSS_DIM` are returned
//!   unchanged.
//!
//! ## Invariants
//!
//! * Remaining elements keep their relative order.
//! * The source matrix is not modified.

// External dependencies
use log::trace;

// Internal dependencies
use crate::algorithms::extrema::{locate_extreme, Pick};
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;

/// Smallest dimension for which a cross is removed.
pub const MIN_CROSS_DIM: usize = 3;

/// Copy of `matrix` without the row and column through its minimum.
pub fn remove_min_cross<C>(matrix: &AnyMatrix, capability: &C) -> Result<AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
{
    let position = locate_extreme(matrix, capability, Pick::Min)?;
    let (min_row, min_col) = match position {
        Some(found) if matrix.dim() >= MIN_CROSS_DIM => found,
        _ => return Ok(matrix.clone()),
    };
    trace!("removing cross at ({min_row}, {min_col})");

    let dim = matrix.dim() - 1;
    let mut result = AnyMatrix::new(dim, matrix.width())?;

    for row in 0..dim {
        let src_row = if row < min_row { row } else { row + 1 };
        for col in 0..dim {
            let src_col = if col < min_col { col } else { col + 1 };
            result.write(row, col, matrix.read(src_row, src_col)?)?;
        }
    }

    Ok(result)
}
