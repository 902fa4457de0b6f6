//! Layer 2: Element
//!
//! # Purpose
//!
//! This layer describes what the bytes in a matrix mean. It defines the
//! capability contract that algorithms program against, the fixed-width byte
//! layout of primitive scalars, and the concrete bindings that tie the two
//! together.
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
//! Layer 2: Element ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Capability contract and typed binding traits.
pub mod capability;

/// Little-endian fixed-width encoding of primitive scalars.
pub mod layout;

/// Signed integer binding.
pub mod integer;

/// Floating-point binding.
pub mod float;
