//! Tests for the file adapter.
//!
//! These tests verify reading and writing grid files:
//! - Dimension inference from the first line of a file
//! - Round trips through the filesystem
//! - Open failures reported as errors, never as process exits
//!
//! ## Test Organization
//!
//! 1. **Reading** - Well-formed and malformed files
//! 2. **Writing** - Layout of written files, overwrite behavior
//! 3. **Failures** - Missing files and unwritable paths

use anymat::prelude::*;
use std::fs;
use tempfile::tempdir;

const INTS: IntBinding<i32> = IntBinding::new();

// ============================================================================
// Reading Tests
// ============================================================================

/// Test reading a grid file and inferring its dimension.
#[test]
fn test_read_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matrix.txt");
    fs::write(&path, "3 7 2\n5 1 9\n4 8 6\n").unwrap();

    let m = read_file(&path, &INTS, &TextFormat::default()).unwrap();
    let typed = TypedMatrix::from_raw(m, INTS).unwrap();

    assert_eq!(typed.dim(), 3);
    assert_eq!(typed.get(1, 2).unwrap(), 9);
}

/// Test that a malformed file reports the failing position.
#[test]
fn test_read_file_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 2\n3\n").unwrap();

    let res = read_file(&path, &INTS, &TextFormat::default());

    assert!(matches!(
        res,
        Err(MatrixError::Ingest { row: 1, col: 1, .. })
    ));
}

/// Test that an empty file gives an empty matrix.
#[test]
fn test_read_file_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let m = read_file(&path, &INTS, &TextFormat::default()).unwrap();

    assert!(m.is_empty());
}

// ============================================================================
// Writing Tests
// ============================================================================

/// Test the exact bytes of a written file.
#[test]
fn test_write_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let m = TypedMatrix::<IntBinding>::from_rows(&[[1, 0], [0, 1]]).unwrap();
    let format = TextFormat::builder().trailing_separator(true).build().unwrap();

    write_file(m.as_raw(), &path, &INTS, &format).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1 0 \n0 1 \n");
}

/// Test a write followed by a read.
#[test]
fn test_write_then_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.txt");
    let floats = FloatBinding::<f64>::new();
    let m = TypedMatrix::from_rows_with(&[[0.125, -3.5], [1e-3, 42.0]], floats).unwrap();
    let format = TextFormat::builder().field_width(8).build().unwrap();

    write_file(m.as_raw(), &path, &floats, &format).unwrap();
    let back = read_file(&path, &floats, &format).unwrap();

    assert_eq!(&back, m.as_raw());
}

/// Test that writing replaces an existing file.
#[test]
fn test_write_file_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "stale contents that are much longer than the matrix\n").unwrap();

    let m = TypedMatrix::<IntBinding>::from_rows(&[[5]]).unwrap();
    write_file(m.as_raw(), &path, &INTS, &TextFormat::default()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "5\n");
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test that a missing file is an open failure naming the path.
#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match read_file(&path, &INTS, &TextFormat::default()) {
        Err(MatrixError::OpenFailed { path: reported, .. }) => {
            assert!(reported.ends_with("missing.txt"), "{reported}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Test that writing into a missing directory is an open failure.
#[test]
fn test_write_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.txt");
    let m = AnyMatrix::new(1, INTS.width()).unwrap();

    let res = write_file(&m, &path, &INTS, &TextFormat::default());

    assert!(matches!(res, Err(MatrixError::OpenFailed { .. })));
}

/// Test that a layout mismatch is reported before the file is created.
#[test]
fn test_write_layout_mismatch_creates_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.txt");
    let m = AnyMatrix::new(1, 8).unwrap();

    let res = write_file(&m, &path, &INTS, &TextFormat::default());

    assert_eq!(res, Err(MatrixError::LayoutMismatch { expected: 8, got: 4 }));
    assert!(!path.exists());
}
