//! Row normalization by a reference matrix.
//!
//! ## Purpose
//!
//! Divides every row of a subject matrix by the maximum of the same row of a
//! reference matrix, producing a new matrix.
//!
//! ## Design notes
//!
//! * **Guarded division**: A zero reference maximum produces a row of zeros;
//!   `divide` is never called with a zero divisor.
//! * **Pure**: Neither operand is modified.
//!
//! ## Invariants
//!
//! * The result has the shape of the subject.
//! * `result[r][c] == subject[r][c] / max(reference[r])` when that maximum is
//!   non-zero, otherwise the capability's zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::trace;

// Internal dependencies
use crate::algorithms::extrema::{extreme, Axis, Pick};
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

/// Divide each row of `subject` by the maximum of the matching row of `reference`.
pub fn normalize_by_reference<C>(
    subject: &AnyMatrix,
    reference: &AnyMatrix,
    capability: &C,
) -> Result<AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
{
    Validator::validate_layout(subject, capability.width())?;
    Validator::validate_same_shape(subject, reference)?;

    let (dim, width) = subject.shape();
    let mut result = AnyMatrix::new(dim, width)?;

    let mut zero = vec![0u8; width];
    capability.zero(&mut zero);
    let mut quotient: Vec<u8> = vec![0u8; width];

    for row in 0..dim {
        let max_col = extreme(reference, capability, Axis::Row, row, Pick::Max)?;
        let max = reference.read(row, max_col)?;

        if capability.is_zero(max) {
            trace!("row {row}: reference maximum is zero, writing zeros");
            for col in 0..dim {
                result.write(row, col, &zero)?;
            }
            continue;
        }

        for col in 0..dim {
            capability.divide(subject.read(row, col)?, max, &mut quotient);
            result.write(row, col, &quotient)?;
        }
    }

    Ok(result)
}
