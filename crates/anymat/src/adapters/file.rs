//! File adapter for the grid text format.
//!
//! Reading infers the dimension from the first line of the file. Failing to
//! open or create a file is reported as [`MatrixError::OpenFailed`]; it is never
//! fatal to the process.

// External dependencies
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

// Internal dependencies
use crate::adapters::text::{parse_grid, to_text};
use crate::element::capability::Capability;
use crate::engine::output::TextFormat;
use crate::primitives::errors::MatrixError;
use crate::primitives::storage::AnyMatrix;

/// Load a matrix from the grid file at `path`.
pub fn read_file<C, P>(path: P, capability: &C, format: &TextFormat) -> Result<AnyMatrix, MatrixError>
where
    C: Capability + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| open_failed(path, &e))?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| MatrixError::Ingest {
            row: 0,
            col: 0,
            reason: e.to_string(),
        })?;

    debug!("read {} bytes from {}", text.len(), path.display());
    parse_grid(&text, capability, format)
}

/// Write `matrix` to `path` in grid form, replacing any existing file.
pub fn write_file<C, P>(matrix: &AnyMatrix, path: P, capability: &C, format: &TextFormat) -> Result<(), MatrixError>
where
    C: Capability + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = to_text(matrix, capability, format)?;

    let file = File::create(path).map_err(|e| open_failed(path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| MatrixError::WriteFailed(e.to_string()))?;

    debug!("wrote {0}x{0} matrix to {1}", matrix.dim(), path.display());
    Ok(())
}

fn open_failed(path: &Path, err: &std::io::Error) -> MatrixError {
    MatrixError::OpenFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
