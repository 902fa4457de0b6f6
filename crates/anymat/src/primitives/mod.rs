//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the byte storage, the error taxonomy, and the shared
//! precondition checks used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Element
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Owned byte storage.
pub mod storage;

/// Precondition checks.
pub mod validator;
