//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer moves matrices in and out of text:
//!
//! - **Text**: Token streams and whitespace grids in memory
//! - **File**: The same grid format on disk (requires `std`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Element
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-memory text load and emit.
pub mod text;

/// File read and write.
#[cfg(feature = "std")]
pub mod file;
