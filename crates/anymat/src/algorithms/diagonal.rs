//! Diagonal comparison of two matrices.
//!
//! Two matrices of the same shape are equal on the diagonal when the capability
//! orders every `(i, i)` pair as equal. They differ on the diagonal when at
//! least one pair is not equal.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

/// True if every diagonal pair compares equal.
pub fn diagonal_equal<C>(left: &AnyMatrix, right: &AnyMatrix, capability: &C) -> Result<bool, MatrixError>
where
    C: Capability + ?Sized,
{
    Validator::validate_layout(left, capability.width())?;
    Validator::validate_same_shape(left, right)?;

    for i in 0..left.dim() {
        if capability.compare(left.read(i, i)?, right.read(i, i)?) != Ordering::Equal {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if at least one diagonal pair does not compare equal.
#[inline]
pub fn diagonal_differs<C>(left: &AnyMatrix, right: &AnyMatrix, capability: &C) -> Result<bool, MatrixError>
where
    C: Capability + ?Sized,
{
    diagonal_equal(left, right, capability).map(|equal| !equal)
}
