//! The closed set of scalar kinds that a tuple can hold.
//!
//! Every kind implements [`ScalarKind`], which supplies a zero value and a
//! validity predicate; exact equality is the kind's own [`PartialEq`]. Kinds
//! with an ordering also implement [`Ordered`], and numeric kinds implement
//! [`Numeric`], which adds tolerance-bounded comparison.
//!
//! | Kind                          | Type         | Numeric |
//! |-------------------------------|--------------|---------|
//! | boolean                       | `bool`       | no      |
//! | 8/16/32/64-bit integer        | `i8`..`i64`  | yes     |
//! | 32/64-bit float               | `f32`, `f64` | yes     |
//! | arbitrary-precision integer   | `BigInt`     | yes     |
//! | arbitrary-precision decimal   | `BigDecimal` | yes     |
//! | character                     | `char`       | no      |
//! | string                        | `String`     | no      |
//! | generic object                | `Option<T>`  | no      |
//!
//! `BigInt` requires feature `bigint` and `BigDecimal` requires feature
//! `decimal`. Both are enabled by default.

use std::cmp::{Ordering};
use std::fmt::{Debug};

use num_traits::{Zero};

/// Implemented by every type that can be a tuple component.
pub trait ScalarKind: Clone + Debug + PartialEq {
    /// The value of every component of a zero tuple.
    fn zero() -> Self;

    /// Returns `false` if `self` is a placeholder rather than a real value,
    /// e.g. a non-finite float or a `None` object.
    fn is_valid(&self) -> bool { true }
}

/// A [`ScalarKind`] with a total order.
///
/// The order must agree with [`PartialEq`]: `a.compare(b)` is `Equal`
/// exactly when `a == b`, except that NaN compares equal to NaN.
pub trait Ordered: ScalarKind {
    fn compare(&self, other: &Self) -> Ordering;
}

/// A numeric [`ScalarKind`], supporting tolerance-bounded comparison.
///
/// Tolerances have the same kind as the components they bound.
pub trait Numeric: Ordered {
    /// Returns `true` if `self` can be used as a tolerance, i.e. it is not
    /// negative (and not NaN).
    fn is_valid_tolerance(&self) -> bool;

    /// Returns `true` if `|self - other| <= tolerance`.
    ///
    /// `tolerance` has already been checked by `is_valid_tolerance()`. Equal
    /// values must be within every tolerance, including zero.
    fn within(&self, other: &Self, tolerance: &Self) -> bool;

    /// Like [`Ordered::compare()`], but returns `Equal` for any difference
    /// within `tolerance`.
    fn compare_within(&self, other: &Self, tolerance: &Self) -> Ordering {
        if self.within(other, tolerance) { Ordering::Equal } else { self.compare(other) }
    }
}

// ----------------------------------------------------------------------------

impl ScalarKind for bool {
    fn zero() -> Self { false }
}

impl Ordered for bool {
    fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
}

impl ScalarKind for char {
    fn zero() -> Self { '\0' }
}

impl Ordered for char {
    fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
}

impl ScalarKind for String {
    fn zero() -> Self { String::new() }
}

impl Ordered for String {
    fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
}

/// `None` plays the part of a null reference.
impl<T: Clone + Debug + PartialEq> ScalarKind for Option<T> {
    fn zero() -> Self { None }
    fn is_valid(&self) -> bool { self.is_some() }
}

impl<T: Clone + Debug + Ord> Ordered for Option<T> {
    fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
}

// ----------------------------------------------------------------------------

macro_rules! impl_integer_kind {
    ($($t:ty),*) => {
        $(
            impl ScalarKind for $t {
                fn zero() -> Self { Zero::zero() }
            }

            impl Ordered for $t {
                fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
            }

            impl Numeric for $t {
                fn is_valid_tolerance(&self) -> bool { *self >= 0 }

                // `abs_diff()` is unsigned, so it cannot overflow.
                fn within(&self, other: &Self, tolerance: &Self) -> bool {
                    self.abs_diff(*other) <= tolerance.unsigned_abs()
                }
            }
        )*
    };
}

impl_integer_kind!(i8, i16, i32, i64);

macro_rules! impl_float_kind {
    ($($t:ty),*) => {
        $(
            impl ScalarKind for $t {
                fn zero() -> Self { Zero::zero() }
                fn is_valid(&self) -> bool { self.is_finite() }
            }

            /// NaN is greater than every number and equal to itself.
            impl Ordered for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or_else(|| self.is_nan().cmp(&other.is_nan()))
                }
            }

            impl Numeric for $t {
                fn is_valid_tolerance(&self) -> bool { *self >= 0.0 }

                // Equal infinities have a NaN difference.
                fn within(&self, other: &Self, tolerance: &Self) -> bool {
                    self == other || (self - other).abs() <= *tolerance
                }
            }
        )*
    };
}

impl_float_kind!(f32, f64);

// ----------------------------------------------------------------------------

#[cfg(feature = "bigint")]
mod bigint {
    use num_bigint::{BigInt};

    use super::*;

    impl ScalarKind for BigInt {
        fn zero() -> Self { Zero::zero() }
    }

    impl Ordered for BigInt {
        fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
    }

    impl Numeric for BigInt {
        fn is_valid_tolerance(&self) -> bool { *self >= <BigInt as Zero>::zero() }

        fn within(&self, other: &Self, tolerance: &Self) -> bool {
            let difference = if self >= other { self - other } else { other - self };
            &difference <= tolerance
        }
    }
}

/// `PartialEq` and `Ord` on `BigDecimal` compare numeric values, so `1` and
/// `1.00` are equal whatever their scale.
#[cfg(feature = "decimal")]
mod decimal {
    use bigdecimal::{BigDecimal};

    use super::*;

    impl ScalarKind for BigDecimal {
        fn zero() -> Self { Zero::zero() }
    }

    impl Ordered for BigDecimal {
        fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
    }

    impl Numeric for BigDecimal {
        fn is_valid_tolerance(&self) -> bool { *self >= <BigDecimal as Zero>::zero() }

        fn within(&self, other: &Self, tolerance: &Self) -> bool {
            let difference = if self >= other { self - other } else { other - self };
            &difference <= tolerance
        }
    }
}

// ----------------------------------------------------------------------------
