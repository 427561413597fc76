use std::fmt::{self, Display, Formatter};

use super::fixed::{write_components};
use super::{arrange, Error, Result, ScalarKind, Dimensioned, ReadOnly, WriteOnly, CreateNew, Operand, Tup};

/// A tuple whose number of components is chosen at run time.
///
/// The number of components is fixed when the `TupN` is constructed. It
/// supports the same capabilities as [`Tup`], minus the named accessors.
///
/// ```
/// use smalltuple::{Dimensioned, ReadOnly, WriteOnly, CreateNew, TupN};
/// let mut t = TupN::new(vec![1, 2, 3, 4, 5]);
/// assert_eq!(t.dimensions(), 5);
/// t.swizzle(0, 4).unwrap();
/// assert_eq!(t.to_array(), vec![5, 2, 3, 4, 1]);
/// assert!(t.arrange_n(&[0, 1, 2]).is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct TupN<K> {
    values: Box<[K]>,
}

impl<K: ScalarKind> TupN<K> {
    fn new_inner(values: Box<[K]>) -> Self { Self {values} }

    /// Constructs a `TupN` given its components.
    pub fn new(values: Vec<K>) -> Self { Self::new_inner(values.into_boxed_slice()) }

    /// Constructs a `TupN` of `dimensions` components, all equal to `value`.
    pub fn filled(dimensions: usize, value: K) -> Self { Self::new(vec![value; dimensions]) }

    /// Constructs a `TupN` of `dimensions` components, all equal to zero.
    pub fn zero(dimensions: usize) -> Self { Self::filled(dimensions, K::zero()) }

    /// Constructs a `TupN` of `dimensions` components, calling `f` to
    /// compute each one from its offset.
    pub fn from_fn(dimensions: usize, f: impl FnMut(usize) -> K) -> Self {
        Self::new_inner((0..dimensions).map(f).collect())
    }

    /// Borrow the components.
    pub fn as_slice(&self) -> &[K] { &self.values }

    /// Returns the components.
    pub fn to_raw(self) -> Box<[K]> { self.values }
}

impl<K: ScalarKind> From<Vec<K>> for TupN<K> {
    fn from(values: Vec<K>) -> Self { Self::new(values) }
}

impl<K: ScalarKind, const N: usize> From<Tup<K, N>> for TupN<K> {
    fn from(t: Tup<K, N>) -> Self { Self::new(Vec::from(t.into_array())) }
}

impl<K> AsRef<[K]> for TupN<K> {
    fn as_ref(&self) -> &[K] { &self.values }
}

/// Panics if `index` is out of range, like indexing a slice.
impl<K> std::ops::Index<usize> for TupN<K> {
    type Output = K;
    fn index(&self, index: usize) -> &K { &self.values[index] }
}

impl<K> std::ops::IndexMut<usize> for TupN<K> {
    fn index_mut(&mut self, index: usize) -> &mut K { &mut self.values[index] }
}

impl<K: Display> Display for TupN<K> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result { write_components(f, &self.values) }
}

// ----------------------------------------------------------------------------

impl<K: ScalarKind> Dimensioned for TupN<K> {
    type Kind = K;
    #[inline(always)]
    fn dimensions(&self) -> usize { self.values.len() }
}

impl<K: ScalarKind> ReadOnly for TupN<K> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&K> { self.values.get(offset) }
}

impl<K: ScalarKind> WriteOnly for TupN<K> {
    #[inline(always)]
    fn store(&mut self, offset: usize, value: K) { self.values[offset] = value; }

    fn gather(&mut self, map: &[usize]) { arrange::gather_slice(&mut self.values, map); }
}

impl<K: ScalarKind> CreateNew for TupN<K> {
    type Output = Self;

    fn create_new(&self, values: &[K]) -> Result<Self> {
        let dimensions = self.dimensions();
        match values.get(..dimensions) {
            Some(values) => Ok(Self::new(values.to_vec())),
            None => Err(Error::size_mismatch(dimensions, values.len())),
        }
    }

    fn create_filled(&self, value: K) -> Self { Self::filled(self.dimensions(), value) }

    fn copy(&self) -> Self { self.clone() }
}

impl<K: ScalarKind> Operand<K> for TupN<K> {
    #[inline(always)]
    fn operand_len(&self) -> Option<usize> { Some(self.values.len()) }
    #[inline(always)]
    fn operand_at(&self, offset: usize) -> Option<&K> { self.values.get(offset) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scalar, Tup3i, TupNd, TupNstr};

    #[test]
    fn construct() {
        let t = TupN::from_fn(4, |i| i as i64 * 10);
        assert_eq!(t.as_slice(), &[0, 10, 20, 30]);
        assert_eq!(TupN::filled(3, 'q').to_array(), vec!['q', 'q', 'q']);
        assert!(TupNd::zero(7).is_zero());
        assert_eq!(TupN::from(vec![1i8; 0]).dimensions(), 0);
        assert_eq!(t.clone().to_raw().len(), 4);
    }

    #[test]
    fn large() {
        let mut t = TupN::from_fn(100, |i| i as i32);
        t.swizzle(0, 99).unwrap();
        assert_eq!((t[0], t[99]), (99, 0));
        let reversed: Vec<usize> = (0..100).rev().collect();
        let u = t.arrange_n(&reversed).unwrap();
        assert_eq!((u[0], u[1], u[99]), (0, 98, 99));
        assert_eq!(t.get_by_index(100), Err(Error::IndexOutOfRange {index: 100, dimensions: 100}));
    }

    #[test]
    fn create() {
        let t = TupN::new(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(t.create_new(&[4.0, 5.0, 6.0, 7.0]).unwrap(), TupN::new(vec![4.0, 5.0, 6.0]));
        assert_eq!(t.create_new(&[4.0]), Err(Error::SizeMismatch {required: 3, actual: 1}));
        assert_eq!(t.create_filled(2.0).dimensions(), 3);
        assert!(t.create_zero().equals(&Scalar(0.0)));
    }

    #[test]
    fn mixed_representations() {
        let fixed = Tup3i::new(1, 2, 3);
        let dynamic = TupN::from(fixed);
        assert!(dynamic.equals(&fixed));
        assert!(fixed.equals(&dynamic));
        assert!(!dynamic.equals(&TupN::new(vec![1, 2, 3, 4])));
        assert_eq!(dynamic.compare_at(2, &fixed), Ok(std::cmp::Ordering::Equal));
    }

    #[test]
    #[should_panic]
    fn gather_out_of_range() {
        TupN::new(vec![1, 2, 3]).write_only().gather(&[5, 5, 5]);
    }

    #[test]
    #[should_panic]
    fn store_out_of_range() {
        TupN::new(vec![1, 2, 3]).store(3, 0);
    }

    #[test]
    fn strings() {
        let mut t = TupNstr::new(vec!["x".into(), "y".into()]);
        t[1].push('z');
        assert_eq!(t.to_string(), "(x, yz)");
        t.set_by_index(0, String::new()).unwrap();
        assert!(!t.is_zero());
        t.set_all(String::new());
        assert!(t.is_zero());
    }
}
