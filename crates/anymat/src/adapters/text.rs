//! Text adapter for loading and emitting matrices.
//!
//! ## Purpose
//!
//! This module converts between matrices and the whitespace-separated grid
//! format: one line per row, one token per element, tokens written and read by
//! the capability's formatter.
//!
//! ## Design notes
//!
//! * **Inferred dimension**: The token count of the first line fixes `dim`.
//! * **Checked lines**: Every row line must have exactly `dim` tokens.
//! * **All or nothing**: A malformed input never yields a partial matrix.
//!
//! ## Key concepts
//!
//! * **Token stream**: `load` consumes any iterator of string tokens, row-major.
//! * **Grid**: `parse_grid` adds line structure on top of the token stream.
//! * **Strict mode**: Rejects non-blank text after the last row.
//!
//! ## Invariants
//!
//! * `emit` followed by `parse_grid` reproduces the same element values.
//! * A blank first line yields a `0 x 0` matrix.
//!
//! ## Non-goals
//!
//! * This module does not handle quoting, comments, or separators other than
//!   whitespace when loading.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Write;
use log::debug;

// Internal dependencies
use crate::element::capability::Capability;
use crate::engine::output::{write_grid, TextFormat};
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;
use crate::primitives::validator::Validator;

// ============================================================================
// Loading
// ============================================================================

/// Number of whitespace-separated tokens on a line.
#[inline]
pub fn infer_dim(first_line: &str) -> usize {
    first_line.split_whitespace().count()
}

/// Fill a `dim x dim` matrix from `dim * dim` tokens in row-major order.
///
/// Tokens beyond the first `dim * dim` are not consumed.
pub fn load<'t, C, I>(dim: usize, tokens: I, capability: &C) -> Result<AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
    I: IntoIterator<Item = &'t str>,
{
    let mut matrix = AnyMatrix::new(dim, capability.width())?;
    let mut tokens = tokens.into_iter();
    let mut record = vec![0u8; capability.width()];

    for row in 0..dim {
        for col in 0..dim {
            let token = tokens.next().ok_or_else(|| MatrixError::Ingest {
                row,
                col,
                reason: "unexpected end of input".to_string(),
            })?;
            capability
                .parse(token, &mut record)
                .map_err(|reason| MatrixError::Ingest { row, col, reason })?;
            matrix.write(row, col, &record)?;
        }
    }

    Ok(matrix)
}

/// Parse a whole grid, inferring the dimension from its first line.
pub fn parse_grid<C>(text: &str, capability: &C, format: &TextFormat) -> Result<AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
{
    let mut lines = text.lines().enumerate();
    let first = lines.next();
    let dim = first.map_or(0, |(_, line)| infer_dim(line));

    // Grows with the input; `dim` comes from untrusted text.
    let mut tokens: Vec<&str> = Vec::new();
    let mut rows_read = 0usize;
    for (row, line) in first.into_iter().filter(|_| dim > 0).chain(lines.by_ref()).take(dim) {
        let before = tokens.len();
        tokens.extend(line.split_whitespace());
        let found = tokens.len() - before;
        if found != dim {
            return Err(MatrixError::Ingest {
                row,
                col: found.min(dim),
                reason: format!("expected {dim} fields, found {found}"),
            });
        }
        rows_read += 1;
    }

    // Reject missing rows before `load` allocates `dim x dim` storage.
    if rows_read < dim {
        return Err(MatrixError::Ingest {
            row: rows_read,
            col: 0,
            reason: "unexpected end of input".to_string(),
        });
    }

    if format.strict {
        if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(MatrixError::Ingest {
                row: line_no,
                col: 0,
                reason: "unexpected data after the last row".to_string(),
            });
        }
    }

    let matrix = load(dim, tokens, capability)?;
    debug!("parsed {dim}x{dim} grid of {}-byte elements", capability.width());
    Ok(matrix)
}

// ============================================================================
// Emitting
// ============================================================================

/// Write `matrix` to `sink` in grid form.
pub fn emit<C, W>(matrix: &AnyMatrix, capability: &C, sink: &mut W, format: &TextFormat) -> Result<(), MatrixError>
where
    C: Capability + ?Sized,
    W: Write + ?Sized,
{
    Validator::validate_layout(matrix, capability.width())?;
    write_grid(matrix, capability, sink, format)
        .map_err(|_| MatrixError::WriteFailed("text sink rejected output".to_string()))
}

/// Render `matrix` to a new string in grid form.
pub fn to_text<C>(matrix: &AnyMatrix, capability: &C, format: &TextFormat) -> Result<String, MatrixError>
where
    C: Capability + ?Sized,
{
    let mut text = String::new();
    emit(matrix, capability, &mut text, format)?;
    Ok(text)
}
