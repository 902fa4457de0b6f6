//! Tests for column-minimum masking.
//!
//! These tests verify `mask_col_minima`:
//! - Every occurrence of a column minimum is replaced
//! - Columns are processed independently
//! - The caller-supplied zero record is used verbatim
//! - Layout validation happens before any write
//!
//! ## Test Organization
//!
//! 1. **Masking** - Basic, duplicate minima, uniform columns
//! 2. **Zero Record** - Custom replacement values
//! 3. **Validation** - Width mismatches

use anymat::prelude::*;

fn ints<const N: usize>(rows: &[[i32; N]]) -> TypedMatrix<IntBinding> {
    TypedMatrix::from_rows(rows).unwrap()
}

// ============================================================================
// Masking Tests
// ============================================================================

/// Test masking a small matrix.
#[test]
fn test_mask_basic() {
    let mut m = ints(&[[4, 1], [2, 3]]);
    m.mask_col_minima().unwrap();

    assert_eq!(m.to_rows(), vec![vec![4, 0], vec![0, 3]]);
}

/// Test that all cells equal to the column minimum are replaced.
#[test]
fn test_mask_duplicate_minima() {
    let mut m = ints(&[[3, 7, 2], [5, 1, 9], [3, 8, 2]]);
    m.mask_col_minima().unwrap();

    assert_eq!(
        m.to_rows(),
        vec![vec![0, 7, 0], vec![5, 0, 9], vec![0, 8, 0]]
    );
}

/// Test that a uniform column is cleared completely.
#[test]
fn test_mask_uniform_column() {
    let mut m = ints(&[[5, 1], [5, 2]]);
    m.mask_col_minima().unwrap();

    assert_eq!(m.to_rows(), vec![vec![0, 0], vec![0, 2]]);
}

/// Test that each column is masked against its own minimum.
///
/// The negative minimum of column 0 is replaced by zero; column 1 keeps its 4.
#[test]
fn test_mask_columns_independent() {
    let mut m = ints(&[[-1, 4], [6, 3]]);
    m.mask_col_minima().unwrap();

    assert_eq!(m.to_rows(), vec![vec![0, 4], vec![6, 0]]);
}

/// Test that the call returns the same matrix for chaining.
#[test]
fn test_mask_chaining() {
    let mut m = ints(&[[2, 9], [8, 1]]);
    let dim = m.mask_col_minima().unwrap().dim();

    assert_eq!(dim, 2);
    assert_eq!(m.to_rows(), vec![vec![0, 9], vec![8, 0]]);
}

/// Test that masking an empty matrix succeeds.
#[test]
fn test_mask_empty() {
    let mut m = TypedMatrix::<IntBinding>::new(0).unwrap();

    assert!(m.mask_col_minima().is_ok());
}

/// Test float masking with NaN-free data.
#[test]
fn test_mask_floats() {
    let mut m = TypedMatrix::<FloatBinding>::from_rows(&[[0.5, 2.0], [-1.5, 2.0]]).unwrap();
    m.mask_col_minima().unwrap();

    assert_eq!(m.to_rows(), vec![vec![0.5, 0.0], vec![0.0, 0.0]]);
}

// ============================================================================
// Zero Record Tests
// ============================================================================

/// Test that a custom replacement record is written as given.
#[test]
fn test_mask_custom_zero() {
    let ints = IntBinding::<i32>::new();
    let mut raw = ints_raw(&[[3, 7], [5, 1]]);

    mask_col_minima(&mut raw, &ints, &(-1i32).to_le_bytes()).unwrap();

    let typed = TypedMatrix::from_raw(raw, ints).unwrap();
    assert_eq!(typed.to_rows(), vec![vec![-1, 7], vec![5, -1]]);
}

fn ints_raw<const N: usize>(rows: &[[i32; N]]) -> AnyMatrix {
    ints(rows).into_raw()
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that a zero record of the wrong width is rejected without writing.
#[test]
fn test_mask_zero_width_mismatch() {
    let ints = IntBinding::<i32>::new();
    let mut raw = ints_raw(&[[3, 7], [5, 1]]);
    let before = raw.clone();

    let res = mask_col_minima(&mut raw, &ints, &[0u8; 2]).map(|_| ());

    assert_eq!(res, Err(MatrixError::LayoutMismatch { expected: 4, got: 2 }));
    assert_eq!(raw, before);
}

/// Test that a capability of the wrong width is rejected.
#[test]
fn test_mask_capability_mismatch() {
    let wide = IntBinding::<i64>::new();
    let mut raw = ints_raw(&[[3, 7], [5, 1]]);

    let res = mask_col_minima(&mut raw, &wide, &0i64.to_le_bytes()).map(|_| ());

    assert_eq!(res, Err(MatrixError::LayoutMismatch { expected: 4, got: 8 }));
}
