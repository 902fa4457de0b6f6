//! anymat Walkthrough
//!
//! This example runs every matrix operation on small integer matrices:
//! - Construction, typed access, and deep copies
//! - Row normalization by a reference matrix
//! - Column-minimum masking
//! - Diagonal comparison
//! - Minimum-cross removal
//! - File round trip with a padded text format
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use anymat::prelude::*;

#[cfg(feature = "std")]
type IntMatrix = TypedMatrix<IntBinding<i32>>;

#[cfg(feature = "std")]
fn main() -> Result<(), MatrixError> {
    println!("{}", "=".repeat(60));
    println!("anymat - Walkthrough");
    println!("{}", "=".repeat(60));
    println!();

    example_1_construction()?;
    example_2_normalization()?;
    example_3_masking()?;
    example_4_diagonal()?;
    example_5_cross_removal()?;
    example_6_file_round_trip()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn base_matrix() -> Result<IntMatrix, MatrixError> {
    IntMatrix::from_rows(&[[3, 7, 2], [5, 1, 9], [4, 8, 6]])
}

#[cfg(feature = "std")]
/// Example 1: Construction and Copies
/// A copy owns its own storage; writing to it leaves the source untouched
fn example_1_construction() -> Result<(), MatrixError> {
    println!("Example 1: Construction and Copies");
    println!("{}", "-".repeat(60));

    let source = base_matrix()?;
    let mut copy = source.clone();
    copy.set(0, 0, 42)?;

    println!("Source:\n{source}");
    println!("Copy after set(0, 0, 42):\n{copy}");

    /* Expected Output:
    Source:
    3 7 2
    5 1 9
    4 8 6

    Copy after set(0, 0, 42):
    42 7 2
    5 1 9
    4 8 6
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Row Normalization
/// Rows whose reference maximum is zero become zero rows
fn example_2_normalization() -> Result<(), MatrixError> {
    println!("Example 2: Row Normalization");
    println!("{}", "-".repeat(60));

    let subject = base_matrix()?;
    let reference = IntMatrix::from_rows(&[[2, 0, 1], [0, 0, 0], [3, 2, 3]])?;
    let normalized = subject.normalized_by(&reference)?;

    println!("{normalized}");

    /* Expected Output:
    1 3 1
    0 0 0
    1 2 2
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Column-Minimum Masking
/// Every cell equal to its column minimum is zeroed, ties included
fn example_3_masking() -> Result<(), MatrixError> {
    println!("Example 3: Column-Minimum Masking");
    println!("{}", "-".repeat(60));

    let mut matrix = IntMatrix::from_rows(&[[3, 7, 2], [5, 1, 9], [3, 8, 2]])?;
    matrix.mask_col_minima()?;

    println!("{matrix}");

    /* Expected Output:
    0 7 0
    5 0 9
    0 8 0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Diagonal Comparison
fn example_4_diagonal() -> Result<(), MatrixError> {
    println!("Example 4: Diagonal Comparison");
    println!("{}", "-".repeat(60));

    let left = base_matrix()?;
    let same_diagonal = IntMatrix::from_rows(&[[3, 0, 0], [0, 1, 0], [0, 0, 6]])?;
    let other = IntMatrix::from_rows(&[[3, 0, 0], [0, 2, 0], [0, 0, 6]])?;

    println!("equal(left, same_diagonal) = {}", left.diagonal_equal(&same_diagonal)?);
    println!("differs(left, other)       = {}", left.diagonal_differs(&other)?);

    /* Expected Output:
    equal(left, same_diagonal) = true
    differs(left, other)       = true
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Minimum-Cross Removal
/// The row and column through the smallest element are dropped
fn example_5_cross_removal() -> Result<(), MatrixError> {
    println!("Example 5: Minimum-Cross Removal");
    println!("{}", "-".repeat(60));

    let matrix = base_matrix()?;
    println!("Minimum at {:?}", matrix.locate_extreme(Pick::Min)?);
    println!("{}", matrix.remove_min_cross()?);

    /* Expected Output:
    Minimum at Some((1, 1))
    3 2
    4 6
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: File Round Trip
/// Padded cells with a trailing separator still load back
fn example_6_file_round_trip() -> Result<(), MatrixError> {
    println!("Example 6: File Round Trip");
    println!("{}", "-".repeat(60));

    let ints = IntBinding::<i32>::new();
    let format = TextFormat::builder()
        .field_width(3)
        .trailing_separator(true)
        .build()?;

    let path = std::env::temp_dir().join("anymat_walkthrough.txt");
    let matrix = base_matrix()?;
    write_file(matrix.as_raw(), &path, &ints, &format)?;

    let loaded = read_file(&path, &ints, &format)?;
    println!("Loaded {0}x{0} matrix:\n{1}", loaded.dim(), loaded.display(&ints)?);
    println!("Identical to source: {}", &loaded == matrix.as_raw());

    /* Expected Output:
    Loaded 3x3 matrix:
    3 7 2
    5 1 9
    4 8 6

    Identical to source: true
    */

    let _ = std::fs::remove_file(&path);
    println!();
    Ok(())
}
