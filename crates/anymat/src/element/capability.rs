//! The capability contract between type-agnostic algorithms and element types.
//!
//! ## Purpose
//!
//! Algorithms in this crate never learn what an element is. Everything they
//! need (ordering, a zero test, division, the zero value, text conversion) is
//! asked of a [`Capability`] that operates on raw element records.
//!
//! ## Design notes
//!
//! * **Byte-level**: Every operation takes `width`-byte slices, so one storage
//!   type serves every element type.
//! * **Object safe**: Algorithms accept `C: Capability + ?Sized`, which covers
//!   both static dispatch and `&dyn Capability`.
//! * **Stateless**: Implementations hold no per-matrix state.
//!
//! ## Key concepts
//!
//! * **Capability**: The operations algorithms need.
//! * **Binding**: A capability that also knows the typed value behind a record.
//!
//! ## Invariants
//!
//! * All record slices passed to a capability are exactly `width()` bytes long.
//! * `divide` is only called with a divisor for which `is_zero` is false.
//!
//! ## Non-goals
//!
//! * This module does not provide any concrete element type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{self, Debug};

// ============================================================================
// Capability
// ============================================================================

/// Per-element operations over `width`-byte records.
pub trait Capability {
    /// Size of one record in bytes.
    fn width(&self) -> usize;

    /// Order two records.
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering;

    /// True if the record holds the zero value.
    fn is_zero(&self, element: &[u8]) -> bool;

    /// Write `lhs / rhs` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. That is a broken caller, not bad data.
    fn divide(&self, lhs: &[u8], rhs: &[u8], out: &mut [u8]);

    /// Write the zero value into `out`.
    fn zero(&self, out: &mut [u8]) {
        out.fill(0);
    }

    /// Parse one text token into `out`, or explain why it cannot be parsed.
    fn parse(&self, token: &str, out: &mut [u8]) -> Result<(), String>;

    /// Write the text form of a record.
    fn format(&self, element: &[u8], sink: &mut dyn fmt::Write) -> fmt::Result;
}

// ============================================================================
// Binding
// ============================================================================

/// A capability with a typed view of its records.
pub trait Binding: Capability {
    /// The value type a record decodes to.
    type Value: Copy + PartialEq + Debug;

    /// Write `value` into a `width()`-byte record.
    fn encode(&self, value: Self::Value, out: &mut [u8]);

    /// Read the value held by a `width()`-byte record.
    fn decode(&self, element: &[u8]) -> Self::Value;
}
