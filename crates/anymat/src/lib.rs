//! # anymat: square matrices over opaque elements
//!
//! `anymat` stores square matrices as fixed-width byte records and runs
//! matrix-wide algorithms (extremum search, row normalization by a reference,
//! column-minimum masking, diagonal comparison, minimum-cross removal) without
//! ever naming the element type. Everything the algorithms need from an element
//! is supplied by a [`Capability`](prelude::Capability) binding.
//!
//! ## Quick Start
//!
//! ### Typed Use
//!
//! ```rust
//! use anymat::prelude::*;
//!
//! let subject = TypedMatrix::<IntBinding>::from_rows(&[[4, 1], [2, 3]])?;
//!
//! // Divide each row by the maximum of the same row of the reference
//! let normalized = subject.normalized_by(&subject)?;
//! assert_eq!(normalized.to_rows(), vec![vec![1, 0], vec![0, 1]]);
//!
//! // Zero every column minimum in place
//! let mut masked = subject.clone();
//! masked.mask_col_minima()?;
//! assert_eq!(masked.to_rows(), vec![vec![4, 0], vec![0, 3]]);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ### Raw Use
//!
//! The storage layer only sees bytes; the binding is passed alongside it:
//!
//! ```rust
//! use anymat::prelude::*;
//!
//! let ints = IntBinding::<i32>::new();
//! let mut m = AnyMatrix::new(3, ints.width())?;
//! m.write(1, 2, &7i32.to_le_bytes())?;
//!
//! let col = extreme(&m, &ints, Axis::Row, 1, Pick::Max)?;
//! assert_eq!(col, 2);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ### Text
//!
//! ```rust
//! use anymat::prelude::*;
//!
//! let ints = IntBinding::<i32>::new();
//! let format = TextFormat::default();
//!
//! let m = parse_grid("4 1\n2 3\n", &ints, &format)?;
//! assert_eq!(m.dim(), 2);
//! assert_eq!(to_text(&m, &ints, &format)?, "4 1\n2 3\n");
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, MatrixError>`. Calling a capability's
//! `divide` with a zero divisor is a contract violation and panics; the
//! algorithms in this crate always test for zero first.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency. The file
//! adapter is unavailable without `std`:
//!
//! ```toml
//! [dependencies]
//! anymat = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - storage, errors, validation.
mod primitives;

// Layer 2: Element - capability contract and bindings.
mod element;

// Layer 3: Algorithms - type-agnostic reductions.
mod algorithms;

// Layer 4: Engine - typed façade and rendering.
mod engine;

// Layer 5: Adapters - text and file I/O.
mod adapters;

// High-level configuration API and re-exports.
mod api;

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::{read_file, write_file};
    pub use crate::api::{
        diagonal_differs, diagonal_equal, emit, extreme, infer_dim, load, locate_extreme,
        mask_col_minima, normalize_by_reference, parse_grid, remove_min_cross, to_text, AnyMatrix,
        Axis, Binding, Capability, FixedWidth, FloatBinding, IntBinding, MatrixError, Pick,
        Rendered, TextFormat, TextFormatBuilder, TypedMatrix, MIN_CROSS_DIM,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod element {
        pub use crate::element::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
