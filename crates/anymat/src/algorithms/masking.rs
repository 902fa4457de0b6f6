//! Column-minimum masking.
//!
//! For every column, each cell equal to the column minimum is overwritten with a
//! caller-supplied zero record. All matching cells are replaced, not only the
//! first one found. The matrix is modified in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use log::trace;

// Internal dependencies
use crate::algorithms::extrema::{extreme, Axis, Pick};
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

/// Replace every column minimum of `matrix` with `zero_value`.
///
/// Returns the same matrix to allow chaining.
pub fn mask_col_minima<'m, C>(
    matrix: &'m mut AnyMatrix,
    capability: &C,
    zero_value: &[u8],
) -> Result<&'m mut AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
{
    Validator::validate_layout(matrix, capability.width())?;
    Validator::validate_payload(matrix.width(), zero_value.len())?;

    let mut minimum: Vec<u8> = Vec::with_capacity(matrix.width());
    let mut masked = 0usize;

    for col in 0..matrix.dim() {
        let min_row = extreme(matrix, capability, Axis::Column, col, Pick::Min)?;
        minimum.clear();
        minimum.extend_from_slice(matrix.read(min_row, col)?);

        for row in 0..matrix.dim() {
            if capability.compare(matrix.read(row, col)?, &minimum) == Ordering::Equal {
                matrix.write(row, col, zero_value)?;
                masked += 1;
            }
        }
    }

    trace!("masked {masked} column-minimum cells");
    Ok(matrix)
}
