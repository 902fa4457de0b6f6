//! Extremum search along a line or over the whole matrix.
//!
//! ## Purpose
//!
//! This module locates minimal and maximal elements under the ordering of a
//! capability. It is the building block of normalization, masking and cross
//! removal.
//!
//! ## Design notes
//!
//! * **Linear scan**: One pass, no scratch copies; the current best is kept as a
//!   borrowed record.
//! * **Strict improvement**: The best position only moves when a later element is
//!   strictly better, so the earliest position wins ties.
//!
//! ## Key concepts
//!
//! * **Line**: A row (`Axis::Row`) or a column (`Axis::Column`) selected by index.
//! * **Global scan order**: Column-major, columns outer and rows inner.
//!
//! ## Invariants
//!
//! * For `Pick::Max`, no element on the line compares greater than the result.
//! * For `Pick::Min`, no element on the line compares less than the result.
//! * Among equal candidates the smallest index is returned.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::element::capability::Capability;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

// ============================================================================
// Selectors
// ============================================================================

/// Direction of a line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Scan the columns of one row.
    Row,

    /// Scan the rows of one column.
    Column,
}

/// Which extremum to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pick {
    /// Smallest element.
    Min,

    /// Largest element.
    Max,
}

impl Pick {
    /// The ordering a candidate must have against the current best to replace it.
    #[inline]
    fn improving(self) -> Ordering {
        match self {
            Self::Min => Ordering::Less,
            Self::Max => Ordering::Greater,
        }
    }
}

impl Axis {
    // (row, col) of position `i` on line `index`.
    #[inline]
    fn cell(self, index: usize, i: usize) -> (usize, usize) {
        match self {
            Self::Row => (index, i),
            Self::Column => (i, index),
        }
    }
}

// ============================================================================
// Line Search
// ============================================================================

/// Index of the extremal element on one row or column.
///
/// For `Axis::Row` the result is a column index, for `Axis::Column` a row index.
pub fn extreme<C>(
    matrix: &AnyMatrix,
    capability: &C,
    axis: Axis,
    index: usize,
    pick: Pick,
) -> Result<usize, MatrixError>
where
    C: Capability + ?Sized,
{
    Validator::validate_layout(matrix, capability.width())?;
    let (row, col) = axis.cell(index, 0);
    Validator::validate_line(matrix, row, col)?;

    let wanted = pick.improving();
    let mut best_index = 0;
    let mut best = matrix.read(row, col)?;

    for i in 1..matrix.dim() {
        let (row, col) = axis.cell(index, i);
        let current = matrix.read(row, col)?;
        if capability.compare(current, best) == wanted {
            best = current;
            best_index = i;
        }
    }

    Ok(best_index)
}

// ============================================================================
// Global Search
// ============================================================================

/// Position of the extremal element of the whole matrix, `None` if it is empty.
///
/// Cells are visited column by column, top to bottom, so among equal values the
/// one in the leftmost column (then the topmost row) is reported.
pub fn locate_extreme<C>(
    matrix: &AnyMatrix,
    capability: &C,
    pick: Pick,
) -> Result<Option<(usize, usize)>, MatrixError>
where
    C: Capability + ?Sized,
{
    Validator::validate_layout(matrix, capability.width())?;
    if matrix.is_empty() {
        return Ok(None);
    }

    let wanted = pick.improving();
    let mut position = (0, 0);
    let mut best = matrix.read(0, 0)?;

    for col in 0..matrix.dim() {
        for row in 0..matrix.dim() {
            let current = matrix.read(row, col)?;
            if capability.compare(current, best) == wanted {
                best = current;
                position = (row, col);
            }
        }
    }

    Ok(Some(position))
}
