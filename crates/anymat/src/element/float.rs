//! Floating-point binding.
//!
//! ## Purpose
//!
//! This module provides [`FloatBinding`], which interprets each record as a
//! little-endian `f32` or `f64`.
//!
//! ## Design notes
//!
//! * **Ordering**: Partial order; unordered pairs (NaN) compare as equal.
//! * **Zero**: Both `0.0` and `-0.0` are zero.
//! * **Text**: Only finite values are accepted when parsing.
//!
//! ## Non-goals
//!
//! * This module does not round or tolerance-compare; ordering is exact.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::element::capability::{Binding, Capability};
use crate::element::layout::FixedWidth;

/// Binding for `f32` and `f64`. Defaults to `f64`.
pub struct FloatBinding<T = f64>(PhantomData<T>);

impl<T> FloatBinding<T> {
    /// Create the binding.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FloatBinding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FloatBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FloatBinding<T> {}

impl<T> PartialEq for FloatBinding<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for FloatBinding<T> {}

impl<T> Debug for FloatBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatBinding<{}>", core::any::type_name::<T>())
    }
}

impl<T> Capability for FloatBinding<T>
where
    T: Float + FixedWidth + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    #[inline]
    fn width(&self) -> usize {
        T::WIDTH
    }

    #[inline]
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
        T::load(lhs)
            .partial_cmp(&T::load(rhs))
            .unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn is_zero(&self, element: &[u8]) -> bool {
        T::load(element) == T::zero()
    }

    fn divide(&self, lhs: &[u8], rhs: &[u8], out: &mut [u8]) {
        let divisor = T::load(rhs);
        assert!(
            divisor != T::zero(),
            "capability contract violated: divide called with a zero divisor"
        );
        (T::load(lhs) / divisor).store(out);
    }

    fn zero(&self, out: &mut [u8]) {
        T::zero().store(out);
    }

    fn parse(&self, token: &str, out: &mut [u8]) -> Result<(), String> {
        let value = token
            .parse::<T>()
            .map_err(|e| format!("'{token}': {e}"))?;
        if !value.is_finite() {
            return Err(format!("'{token}': non-finite value"));
        }
        value.store(out);
        Ok(())
    }

    fn format(&self, element: &[u8], sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{}", T::load(element))
    }
}

impl<T> Binding for FloatBinding<T>
where
    T: Float + FixedWidth + FromStr + Display + Debug,
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
