//! The numeric element trait.
//!
//! Containers are generic over [`Scalar`], implemented for `f32` and
//! `f64`. Stored values keep full IEEE semantics: NaN, infinities and
//! signed zeros round-trip bit-exactly.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// A floating-point element type that containers can store.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Additive identity, also the value of every unused slot.
    const ZERO: Self;
    /// Value returned by sentinel adapters on failure (`MAX` of the type).
    const SENTINEL: Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Whether this value is NaN.
    fn is_nan(self) -> bool;
    /// Convert an element count into this type (used for averages).
    fn from_count(count: usize) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const SENTINEL: Self = <$t>::MAX;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn from_count(count: usize) -> Self {
                    count as $t
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);
