//! Signed integer binding.
//!
//! ## Purpose
//!
//! This module provides [`IntBinding`], the reference binding of the crate. It
//! interprets each record as a little-endian signed integer and supplies the
//! capability contract for it.
//!
//! ## Design notes
//!
//! * **Generics**: One implementation covers `i8` through `i128` via `PrimInt + Signed`.
//! * **Truncation**: Division rounds toward zero; `MIN / -1` wraps to `MIN`.
//! * **Text**: Decimal digits with an optional leading sign.
//!
//! ## Invariants
//!
//! * `width()` equals `size_of::<T>()`.
//! * The zero value encodes as all-zero bytes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;
use core::str::FromStr;
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::element::capability::{Binding, Capability};
use crate::element::layout::FixedWidth;

/// Binding for signed primitive integers. Defaults to `i32`.
pub struct IntBinding<T = i32>(PhantomData<T>);

impl<T> IntBinding<T> {
    /// Create the binding.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IntBinding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntBinding<T> {}

impl<T> PartialEq for IntBinding<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for IntBinding<T> {}

impl<T> Debug for IntBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntBinding<{}>", core::any::type_name::<T>())
    }
}

impl<T> Capability for IntBinding<T>
where
    T: PrimInt + Signed + FixedWidth + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    #[inline]
    fn width(&self) -> usize {
        T::WIDTH
    }

    #[inline]
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
        T::load(lhs).cmp(&T::load(rhs))
    }

    #[inline]
    fn is_zero(&self, element: &[u8]) -> bool {
        T::load(element).is_zero()
    }

    fn divide(&self, lhs: &[u8], rhs: &[u8], out: &mut [u8]) {
        let divisor = T::load(rhs);
        assert!(
            !divisor.is_zero(),
            "capability contract violated: divide called with a zero divisor"
        );
        // Only MIN / -1 overflows; two's complement wraps it back to MIN.
        let quotient = T::load(lhs)
            .checked_div(&divisor)
            .unwrap_or_else(T::min_value);
        quotient.store(out);
    }

    fn zero(&self, out: &mut [u8]) {
        T::zero().store(out);
    }

    fn parse(&self, token: &str, out: &mut [u8]) -> Result<(), String> {
        let value = token
            .parse::<T>()
            .map_err(|e| format!("'{token}': {e}"))?;
        value.store(out);
        Ok(())
    }

    fn format(&self, element: &[u8], sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{}", T::load(element))
    }
}

impl<T> Binding for IntBinding<T>
where
    T: PrimInt + Signed + FixedWidth + FromStr + Display + Debug,
    <T as FromStr>::Err: Display,
{
    type Value = T;

    #[inline]
    fn encode(&self, value: T, out: &mut [u8]) {
        value.store(out);
    }

    #[inline]
    fn decode(&self, element: &[u8]) -> T {
        T::load(element)
    }
}
