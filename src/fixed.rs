use std::fmt::{self, Display, Formatter};

#[cfg(feature = "bigint")]
use num_bigint::{BigInt};
#[cfg(feature = "decimal")]
use bigdecimal::{BigDecimal};

use super::{arrange, Error, Result, ScalarKind, Dimensioned, ReadOnly, WriteOnly, CreateNew, Operand, TupN};

/// A tuple of exactly `N` components of kind `K`.
///
/// `Tup` implements all the capability traits, so most of its methods come
/// from [`ReadOnly`], [`WriteOnly`] and [`CreateNew`]. For `N` from 2 to 4
/// it also has named accessors `v0()`, `v1()`, ..., named setters
/// `set_v0()`, ..., and a named swizzle for every pair of components, e.g.
/// `swizzle_v0_v2()` (in place) and `swizzle_v0_v2_n()` (returning a new
/// tuple).
///
/// ```
/// use smalltuple::{ReadOnly, WriteOnly, CreateNew, Tup2i};
/// let mut t = Tup2i::new(3, 7);
/// assert_eq!(t.v1(), t.get_by_index(1).unwrap());
/// assert_eq!(t.swizzle_v0_v1_n(), t.swizzle_n(0, 1).unwrap());
/// t.set_v0(4).swizzle_v0_v1();
/// assert_eq!(t, Tup2i::new(7, 4));
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Tup<K, const N: usize>([K; N]);

pub type Tup2<K> = Tup<K, 2>;
pub type Tup3<K> = Tup<K, 3>;
pub type Tup4<K> = Tup<K, 4>;

impl<K: ScalarKind, const N: usize> Tup<K, N> {
    /// The number of components.
    pub const DIMENSIONS: usize = N;

    /// Constructs a `Tup` given its components.
    pub fn from_array(values: [K; N]) -> Self { Self(values) }

    /// Constructs a `Tup` with every component equal to `value`.
    pub fn filled(value: K) -> Self { Self(std::array::from_fn(|_| value.clone())) }

    /// Constructs a `Tup` with every component equal to zero.
    pub fn zero() -> Self { Self::filled(K::zero()) }

    /// Constructs a `Tup` from the first `N` of `values`.
    ///
    /// Trailing values are ignored. Fails with [`Error::SizeMismatch`] if
    /// there are fewer than `N`.
    pub fn try_from_slice(values: &[K]) -> Result<Self> {
        match values.get(..N) {
            Some(values) => Ok(Self(std::array::from_fn(|i| values[i].clone()))),
            None => Err(Error::size_mismatch(N, values.len())),
        }
    }

    /// Returns the components.
    pub fn into_array(self) -> [K; N] { self.0 }

    /// Borrow the components.
    pub fn as_slice(&self) -> &[K] { &self.0 }

    /// Converts to the variable-size representation.
    pub fn to_dynamic(&self) -> TupN<K> { TupN::new(self.0.to_vec()) }
}

impl<K: ScalarKind, const N: usize> Default for Tup<K, N> {
    fn default() -> Self { Self::zero() }
}

impl<K: ScalarKind, const N: usize> From<[K; N]> for Tup<K, N> {
    fn from(values: [K; N]) -> Self { Self(values) }
}

impl<K: ScalarKind, const N: usize> From<Tup<K, N>> for [K; N] {
    fn from(t: Tup<K, N>) -> Self { t.0 }
}

impl<K: ScalarKind, const N: usize> TryFrom<&[K]> for Tup<K, N> {
    type Error = Error;
    fn try_from(values: &[K]) -> Result<Self> { Self::try_from_slice(values) }
}

/// The dimension of `t` must be exactly `N`.
impl<K: ScalarKind, const N: usize> TryFrom<TupN<K>> for Tup<K, N> {
    type Error = Error;

    fn try_from(t: TupN<K>) -> Result<Self> {
        if t.dimensions() != N {
            return Err(Error::size_mismatch(N, t.dimensions()));
        }
        Self::try_from_slice(t.as_ref())
    }
}

impl<K, const N: usize> AsRef<[K]> for Tup<K, N> {
    fn as_ref(&self) -> &[K] { &self.0 }
}

/// Panics if `index >= N`, like indexing a slice.
impl<K, const N: usize> std::ops::Index<usize> for Tup<K, N> {
    type Output = K;
    fn index(&self, index: usize) -> &K { &self.0[index] }
}

impl<K, const N: usize> std::ops::IndexMut<usize> for Tup<K, N> {
    fn index_mut(&mut self, index: usize) -> &mut K { &mut self.0[index] }
}

impl<K: Display, const N: usize> Display for Tup<K, N> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result { write_components(f, &self.0) }
}

/// Writes `values` in the form `(a, b, c)`.
pub(crate) fn write_components<K: Display>(f: &mut Formatter, values: &[K]) -> fmt::Result {
    write!(f, "(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "{}", value)?;
    }
    write!(f, ")")
}

// ----------------------------------------------------------------------------

impl<K: ScalarKind, const N: usize> Dimensioned for Tup<K, N> {
    type Kind = K;
    #[inline(always)]
    fn dimensions(&self) -> usize { N }
}

impl<K: ScalarKind, const N: usize> ReadOnly for Tup<K, N> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&K> { self.0.get(offset) }
}

impl<K: ScalarKind, const N: usize> WriteOnly for Tup<K, N> {
    #[inline(always)]
    fn store(&mut self, offset: usize, value: K) { self.0[offset] = value; }

    fn gather(&mut self, map: &[usize]) { arrange::gather_slice(&mut self.0, map); }
}

impl<K: ScalarKind, const N: usize> CreateNew for Tup<K, N> {
    type Output = Self;
    fn create_new(&self, values: &[K]) -> Result<Self> { Self::try_from_slice(values) }
    fn create_filled(&self, value: K) -> Self { Self::filled(value) }
    fn copy(&self) -> Self { self.clone() }
}

impl<K: ScalarKind, const N: usize> Operand<K> for Tup<K, N> {
    #[inline(always)]
    fn operand_len(&self) -> Option<usize> { Some(N) }
    #[inline(always)]
    fn operand_at(&self, offset: usize) -> Option<&K> { self.0.get(offset) }
}

// ----------------------------------------------------------------------------

/// Generates the named accessors, setters and swizzles for one arity.
macro_rules! impl_named_components {
    (
        $n:literal,
        [$($v:ident, $set_v:ident, $i:literal;)*],
        [$($swizzle:ident, $swizzle_n:ident, $a:literal, $b:literal;)*]
    ) => {
        impl<K: ScalarKind> Tup<K, $n> {
            /// Constructs a `Tup` given its components.
            pub fn new($($v: K),*) -> Self { Self([$($v),*]) }

            /// Replaces every component.
            pub fn set(&mut self, $($v: K),*) -> &mut Self {
                self.0 = [$($v),*];
                self
            }

            $(
                #[doc = concat!("Borrow component ", stringify!($i), ".")]
                #[inline(always)]
                pub fn $v(&self) -> &K { &self.0[$i] }

                #[doc = concat!("Replace component ", stringify!($i), ".")]
                #[inline(always)]
                pub fn $set_v(&mut self, value: K) -> &mut Self {
                    self.0[$i] = value;
                    self
                }
            )*

            $(
                #[doc = concat!(
                    "Exchange components ", stringify!($a), " and ", stringify!($b),
                    ". Same as `swizzle(", stringify!($a), ", ", stringify!($b), ")`.",
                )]
                pub fn $swizzle(&mut self) -> &mut Self {
                    self.0.swap($a, $b);
                    self
                }

                #[doc = concat!(
                    "Returns a copy with components ", stringify!($a), " and ", stringify!($b),
                    " exchanged. Same as `swizzle_n(", stringify!($a), ", ", stringify!($b), ")`.",
                )]
                pub fn $swizzle_n(&self) -> Self {
                    let mut t = self.clone();
                    t.$swizzle();
                    t
                }
            )*
        }
    };
}

impl_named_components!(2, [
    v0, set_v0, 0;
    v1, set_v1, 1;
], [
    swizzle_v0_v1, swizzle_v0_v1_n, 0, 1;
]);

impl_named_components!(3, [
    v0, set_v0, 0;
    v1, set_v1, 1;
    v2, set_v2, 2;
], [
    swizzle_v0_v1, swizzle_v0_v1_n, 0, 1;
    swizzle_v0_v2, swizzle_v0_v2_n, 0, 2;
    swizzle_v1_v2, swizzle_v1_v2_n, 1, 2;
]);

impl_named_components!(4, [
    v0, set_v0, 0;
    v1, set_v1, 1;
    v2, set_v2, 2;
    v3, set_v3, 3;
], [
    swizzle_v0_v1, swizzle_v0_v1_n, 0, 1;
    swizzle_v0_v2, swizzle_v0_v2_n, 0, 2;
    swizzle_v0_v3, swizzle_v0_v3_n, 0, 3;
    swizzle_v1_v2, swizzle_v1_v2_n, 1, 2;
    swizzle_v1_v3, swizzle_v1_v3_n, 1, 3;
    swizzle_v2_v3, swizzle_v2_v3_n, 2, 3;
]);

// ----------------------------------------------------------------------------

/// Generates the per-kind type aliases.
macro_rules! kind_aliases {
    ($($(#[$attr:meta])* $kind:ty => $t2:ident, $t3:ident, $t4:ident, $tn:ident;)*) => {
        $(
            $(#[$attr])*
            #[doc = concat!("A 2-tuple of `", stringify!($kind), "`.")]
            pub type $t2 = Tup2<$kind>;

            $(#[$attr])*
            #[doc = concat!("A 3-tuple of `", stringify!($kind), "`.")]
            pub type $t3 = Tup3<$kind>;

            $(#[$attr])*
            #[doc = concat!("A 4-tuple of `", stringify!($kind), "`.")]
            pub type $t4 = Tup4<$kind>;

            $(#[$attr])*
            #[doc = concat!("A variable-size tuple of `", stringify!($kind), "`.")]
            pub type $tn = TupN<$kind>;
        )*
    };
}

kind_aliases! {
    bool => Tup2z, Tup3z, Tup4z, TupNz;
    i8 => Tup2b, Tup3b, Tup4b, TupNb;
    i16 => Tup2s, Tup3s, Tup4s, TupNs;
    i32 => Tup2i, Tup3i, Tup4i, TupNi;
    i64 => Tup2l, Tup3l, Tup4l, TupNl;
    f32 => Tup2f, Tup3f, Tup4f, TupNf;
    f64 => Tup2d, Tup3d, Tup4d, TupNd;
    char => Tup2c, Tup3c, Tup4c, TupNc;
    String => Tup2str, Tup3str, Tup4str, TupNstr;
    #[cfg(feature = "bigint")]
    BigInt => Tup2bi, Tup3bi, Tup4bi, TupNbi;
    #[cfg(feature = "decimal")]
    BigDecimal => Tup2bd, Tup3bd, Tup4bd, TupNbd;
}

/// A 2-tuple of optional objects.
pub type Tup2o<T> = Tup2<Option<T>>;
/// A 3-tuple of optional objects.
pub type Tup3o<T> = Tup3<Option<T>>;
/// A 4-tuple of optional objects.
pub type Tup4o<T> = Tup4<Option<T>>;
/// A variable-size tuple of optional objects.
pub type TupNo<T> = TupN<Option<T>>;

// ----------------------------------------------------------------------------
