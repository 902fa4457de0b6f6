//! Tests for raw matrix storage.
//!
//! These tests verify the byte-record container used by every algorithm:
//! - Construction and dimension validation
//! - Bounds-checked reads and writes
//! - Payload width checks
//! - Deep-copy independence
//!
//! ## Test Organization
//!
//! 1. **Construction** - Shapes, zero fill, invalid dimensions
//! 2. **Access** - Reads, writes, range and layout errors
//! 3. **Ownership** - Clone independence and equality

use anymat::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that a new matrix reports its shape.
#[test]
fn test_new_shape() {
    let m = AnyMatrix::new(4, 8).unwrap();

    assert_eq!(m.dim(), 4);
    assert_eq!(m.width(), 8);
    assert_eq!(m.shape(), (4, 8));
    assert!(!m.is_empty());
}

/// Test that fresh storage is zero-filled.
#[test]
fn test_new_is_zero_filled() {
    let m = AnyMatrix::new(3, 4).unwrap();

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(m.read(row, col).unwrap(), &[0, 0, 0, 0]);
        }
    }
}

/// Test that a zero dimension is allowed.
#[test]
fn test_new_empty() {
    let m = AnyMatrix::new(0, 4).unwrap();

    assert!(m.is_empty());
    assert_eq!(m.dim(), 0);
}

/// Test that a zero width is rejected.
#[test]
fn test_new_zero_width() {
    let res = AnyMatrix::new(3, 0);

    assert_eq!(res, Err(MatrixError::InvalidDimension { dim: 3, width: 0 }));
}

/// Test that an overflowing total size is rejected instead of panicking.
#[test]
fn test_new_overflowing_size() {
    let res = AnyMatrix::new(usize::MAX, 2);

    assert!(matches!(
        res,
        Err(MatrixError::InvalidDimension { width: 2, .. })
    ));
}

/// Test that sizes the allocator cannot satisfy are rejected instead of panicking.
#[test]
fn test_new_unallocatable_size() {
    let dim = 1usize << 31;

    assert_eq!(
        AnyMatrix::new(dim, 2),
        Err(MatrixError::InvalidDimension { dim, width: 2 })
    );

    let width = isize::MAX as usize + 1;
    assert_eq!(
        AnyMatrix::new(1, width),
        Err(MatrixError::InvalidDimension { dim: 1, width })
    );
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test that a written record reads back unchanged.
#[test]
fn test_write_then_read() {
    let mut m = AnyMatrix::new(2, 2).unwrap();
    m.write(1, 0, &[0xAB, 0xCD]).unwrap();

    assert_eq!(m.read(1, 0).unwrap(), &[0xAB, 0xCD]);
    assert_eq!(m.read(0, 1).unwrap(), &[0, 0], "neighbours untouched");
}

/// Test that writes land at row-major positions only.
#[test]
fn test_write_is_cell_local() {
    let mut m = AnyMatrix::new(3, 1).unwrap();
    m.write(1, 2, &[7]).unwrap();

    for row in 0..3 {
        for col in 0..3 {
            let expected = if (row, col) == (1, 2) { 7 } else { 0 };
            assert_eq!(m.read(row, col).unwrap(), &[expected]);
        }
    }
}

/// Test that reads outside the matrix are rejected.
#[test]
fn test_read_out_of_range() {
    let m = AnyMatrix::new(2, 4).unwrap();

    assert_eq!(
        m.read(2, 0),
        Err(MatrixError::IndexOutOfRange { row: 2, col: 0, dim: 2 })
    );
    assert_eq!(
        m.read(0, 5),
        Err(MatrixError::IndexOutOfRange { row: 0, col: 5, dim: 2 })
    );
}

/// Test that writes outside the matrix are rejected before the width check.
#[test]
fn test_write_out_of_range() {
    let mut m = AnyMatrix::new(2, 4).unwrap();

    assert_eq!(
        m.write(0, 2, &[1]),
        Err(MatrixError::IndexOutOfRange { row: 0, col: 2, dim: 2 })
    );
}

/// Test that payloads of the wrong width are rejected.
#[test]
fn test_write_layout_mismatch() {
    let mut m = AnyMatrix::new(2, 4).unwrap();

    assert_eq!(
        m.write(0, 0, &[1, 2]),
        Err(MatrixError::LayoutMismatch { expected: 4, got: 2 })
    );
    assert_eq!(m.read(0, 0).unwrap(), &[0, 0, 0, 0], "failed write leaves cell");
}

/// Test that every access on an empty matrix is out of range.
#[test]
fn test_empty_matrix_access() {
    let m = AnyMatrix::new(0, 4).unwrap();

    assert!(matches!(
        m.read(0, 0),
        Err(MatrixError::IndexOutOfRange { dim: 0, .. })
    ));
}

// ============================================================================
// Ownership Tests
// ============================================================================

/// Test that mutating a clone leaves the source unchanged.
#[test]
fn test_clone_is_independent() {
    let mut source = AnyMatrix::new(2, 4).unwrap();
    source.write(0, 0, &[1, 2, 3, 4]).unwrap();

    let mut copy = source.clone();
    copy.write(0, 0, &[9, 9, 9, 9]).unwrap();
    copy.write(1, 1, &[5, 5, 5, 5]).unwrap();

    assert_eq!(source.read(0, 0).unwrap(), &[1, 2, 3, 4]);
    assert_eq!(source.read(1, 1).unwrap(), &[0, 0, 0, 0]);
    assert_ne!(source, copy);
}

/// Test that equality compares shape and content.
#[test]
fn test_equality() {
    let a = AnyMatrix::new(2, 4).unwrap();
    let b = AnyMatrix::new(2, 4).unwrap();
    let wider = AnyMatrix::new(2, 8).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, wider);
    assert!(a.same_shape(&b));
    assert!(!a.same_shape(&wider));
}
