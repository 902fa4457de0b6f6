//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer pairs raw storage with a binding. It offers a typed façade that
//! dispatches to the algorithms layer and renders matrices as text.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Element
//!   ↓
//! Layer 1: Primitives
//! ```

/// Typed matrix façade.
pub mod typed;

/// Display rendering.
pub mod output;
