//! Error types for matrix operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while constructing,
//! accessing, transforming, loading, or emitting matrices.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (indices, widths, positions).
//! * **Deferred**: Builder misuse is recorded and reported when `build()` is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction**: Zero element width or an unrepresentable total size.
//! 2. **Access**: Out-of-range indices and wrong-width payloads.
//! 3. **Ingestion**: Truncated or malformed text, unopenable files.
//! 4. **Configuration**: Invalid or duplicated text-format parameters.
//!
//! ## Invariants
//!
//! * Every variant is recoverable; contract violations inside a capability
//!   (division by a zero element) panic instead of producing a variant here.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Element width is zero, or `dim * dim * width` does not fit in memory.
    InvalidDimension {
        /// Requested dimension.
        dim: usize,
        /// Requested element width in bytes.
        width: usize,
    },

    /// A row or column index lies outside `[0, dim)`.
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Matrix dimension.
        dim: usize,
    },

    /// A payload or capability does not match the matrix element width.
    LayoutMismatch {
        /// Element width of the matrix.
        expected: usize,
        /// Width that was supplied.
        got: usize,
    },

    /// Two-operand operations require matrices of the same dimension.
    ShapeMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Typed input rows must all have as many entries as there are rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected number of entries.
        expected: usize,
        /// Number of entries found.
        got: usize,
    },

    /// Text input was truncated or contained a token the binding cannot parse.
    Ingest {
        /// Row being filled when the failure occurred.
        row: usize,
        /// Column being filled when the failure occurred.
        col: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// A file could not be opened or created.
    OpenFailed {
        /// Path that was requested.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Writing to a sink failed after it was opened.
    WriteFailed(String),

    /// Text-format configuration is invalid.
    InvalidFormat(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDimension { dim, width } => {
                write!(f, "Invalid dimension: dim={dim}, width={width} (width must be > 0 and the size must fit in memory)")
            }
            Self::IndexOutOfRange { row, col, dim } => {
                write!(f, "Index out of range: ({row}, {col}) for a {dim}x{dim} matrix")
            }
            Self::LayoutMismatch { expected, got } => {
                write!(f, "Layout mismatch: expected {expected}-byte elements, got {got}")
            }
            Self::ShapeMismatch { left, right } => {
                write!(f, "Shape mismatch: {left}x{left} vs {right}x{right}")
            }
            Self::NotSquare { row, expected, got } => {
                write!(f, "Row {row} has {got} entries, expected {expected}")
            }
            Self::Ingest { row, col, reason } => {
                write!(f, "Ingest error at ({row}, {col}): {reason}")
            }
            Self::OpenFailed { path, reason } => write!(f, "Cannot open '{path}': {reason}"),
            Self::WriteFailed(reason) => write!(f, "Write failed: {reason}"),
            Self::InvalidFormat(msg) => write!(f, "Invalid text format: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MatrixError {}
