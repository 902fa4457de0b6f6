//! Layer 3: Algorithms
//!
//! This layer implements the matrix-wide reductions and transforms. Every
//! function here sees elements only through the storage accessors and a
//! supplied [`Capability`](crate::element::capability::Capability); none of
//! them names a concrete element type.

// Row/column and global extremum search.
pub mod extrema;

// Row normalization by a reference matrix.
pub mod normalize;

// Column-minimum masking.
pub mod masking;

// Diagonal comparison of two matrices.
pub mod diagonal;

// Removal of the row and column through the global minimum.
pub mod cross;
