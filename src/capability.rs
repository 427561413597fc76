//! The capability traits that every tuple type implements.
//!
//! A tuple's storage is accessed through up to four capabilities:
//!
//! - [`ReadOnly`] - accessors and derived queries. Never mutates.
//! - [`WriteOnly`] - setters and the in-place permutations. Never needs to
//!   observe the current values, so a write-only proxy can implement it.
//! - [`Mutable`] - the union of `ReadOnly` and `WriteOnly`.
//! - [`CreateNew`] - copies and value-returning permutations. The new tuple's
//!   type is chosen by the receiver, so generic code holding only a
//!   `ReadOnly + CreateNew` can still make tuples of the right concrete type.
//!
//! All four share [`Dimensioned`], so every capability over the same storage
//! agrees on the number of components and on their [`ScalarKind`].
//!
//! If `T` implements a capability, then so do `&T`, `&mut T`, `Box<T>`,
//! `Rc<T>` and `Arc<T>`. [`WriteOnly`] also extends to every other type that
//! [`DerefMut`]s to `T`.

use std::cmp::{Ordering};
use std::ops::{Deref, DerefMut};
use std::rc::{Rc};
use std::sync::{Arc};

use super::{arrange, compare, operand};
use super::{Error, Result, ComponentIndex, ScalarKind, Ordered, Numeric, Operand, ReadView, WriteView};

/// The part of a tuple that all capabilities agree on.
pub trait Dimensioned {
    /// The type of every component.
    type Kind: ScalarKind;

    /// The number of components. Constant for the lifetime of `self`.
    fn dimensions(&self) -> usize;
}

impl<V: Dimensioned + ?Sized, T: Deref<Target=V>> Dimensioned for T {
    type Kind = V::Kind;
    #[inline(always)]
    fn dimensions(&self) -> usize { (**self).dimensions() }
}

// ----------------------------------------------------------------------------

/// Read access to the components of a tuple.
///
/// ```
/// use smalltuple::{ReadOnly, Tup2i};
/// let t = Tup2i::new(3, 7);
/// assert_eq!(t.get_by_index(1), Ok(&7));
/// assert!(t.get_by_index(2).is_err());
/// assert!(t.get_by_index(-1).is_err());
/// assert!(t.equals(&Tup2i::new(3, 7)));
/// assert_eq!(t.equals_within(&Tup2i::new(3, 8), &1), Ok(true));
/// assert_eq!(t.equals_within(&Tup2i::new(3, 9), &1), Ok(false));
/// ```
pub trait ReadOnly: Dimensioned {
    /// Borrow the component at `offset`, or `None` if
    /// `offset >= self.dimensions()`.
    fn component(&self, offset: usize) -> Option<&Self::Kind>;

    /// Borrow the component named by `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] unless
    /// `0 <= index < self.dimensions()`.
    fn get_by_index(&self, index: impl ComponentIndex) -> Result<&Self::Kind> {
        let dimensions = self.dimensions();
        let offset = index.to_offset(dimensions)?;
        self.component(offset).ok_or_else(|| Error::index_out_of_range(offset as i128, dimensions))
    }

    /// Returns a copy of the components in index order.
    fn to_array(&self) -> Vec<Self::Kind> {
        (0..self.dimensions()).filter_map(|offset| self.component(offset).cloned()).collect()
    }

    /// Copies the components in index order into the start of `buffer`.
    ///
    /// Fails with [`Error::SizeMismatch`] if `buffer` is shorter than
    /// `self.dimensions()`, in which case `buffer` is untouched.
    fn to_array_into(&self, buffer: &mut [Self::Kind]) -> Result<()> {
        let dimensions = self.dimensions();
        if buffer.len() < dimensions {
            return Err(Error::size_mismatch(dimensions, buffer.len()));
        }
        for (offset, slot) in buffer[..dimensions].iter_mut().enumerate() {
            if let Some(value) = self.component(offset) { *slot = value.clone(); }
        }
        Ok(())
    }

    /// Returns `true` if every component is exactly [`ScalarKind::zero()`].
    fn is_zero(&self) -> bool { compare::is_zero(self) }

    /// Returns `true` if every component is within `tolerance` of zero.
    fn is_zero_within(&self, tolerance: &Self::Kind) -> Result<bool> where
        Self::Kind: Numeric,
    {
        compare::is_zero_within(self, tolerance)
    }

    /// Returns `true` if every component satisfies [`ScalarKind::is_valid()`].
    fn is_valid(&self) -> bool {
        (0..self.dimensions()).all(|offset| self.component(offset).map_or(false, ScalarKind::is_valid))
    }

    /// Exact component-wise equality.
    ///
    /// `other` can be another tuple, a slice or array of components, or a
    /// [`Scalar`] that is compared with every component. Tuples and arrays
    /// of a different length are never equal.
    ///
    /// [`Scalar`]: super::Scalar
    fn equals<O: Operand<Self::Kind> + ?Sized>(&self, other: &O) -> bool {
        compare::equals(self, other)
    }

    /// Component-wise equality up to an inclusive `tolerance`.
    ///
    /// With a zero tolerance this agrees with [`equals()`]. Fails with
    /// [`Error::InvalidArgument`] if `tolerance` is negative.
    ///
    /// [`equals()`]: Self::equals()
    fn equals_within<O: Operand<Self::Kind> + ?Sized>(
        &self,
        other: &O,
        tolerance: &Self::Kind,
    ) -> Result<bool> where
        Self::Kind: Numeric,
    {
        compare::equals_within(self, other, tolerance)
    }

    /// Compares the component named by `index` with the same component of
    /// `other`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if either side lacks the
    /// component. A [`Scalar`] has every component.
    ///
    /// ```
    /// use std::cmp::{Ordering};
    /// use smalltuple::{ReadOnly, Component, Scalar, Tup3i};
    /// let t = Tup3i::new(1, 5, 9);
    /// assert_eq!(t.compare_at(1, &Tup3i::new(0, 6, 0)), Ok(Ordering::Less));
    /// assert_eq!(t.compare_at(Component::V2, &[0, 0, 9]), Ok(Ordering::Equal));
    /// assert_eq!(t.compare_at(0, &Scalar(0)), Ok(Ordering::Greater));
    /// assert!(t.compare_at(2, &[0, 0]).is_err());
    /// ```
    ///
    /// [`Scalar`]: super::Scalar
    fn compare_at<O: Operand<Self::Kind> + ?Sized>(
        &self,
        index: impl ComponentIndex,
        other: &O,
    ) -> Result<Ordering> where
        Self::Kind: Ordered,
    {
        compare::compare_at(self, index, other)
    }

    /// Like [`compare_at()`], but any difference within `tolerance` compares
    /// `Equal`.
    ///
    /// [`compare_at()`]: Self::compare_at()
    fn compare_at_within<O: Operand<Self::Kind> + ?Sized>(
        &self,
        index: impl ComponentIndex,
        other: &O,
        tolerance: &Self::Kind,
    ) -> Result<Ordering> where
        Self::Kind: Numeric,
    {
        compare::compare_at_within(self, index, other, tolerance)
    }

    /// Borrow `self` through the `ReadOnly` capability only.
    fn read_only(&self) -> ReadView<'_, Self> { ReadView::new(self) }
}

impl<'b, V: ReadOnly + ?Sized> ReadOnly for &'b V {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&Self::Kind> { (**self).component(offset) }
}

impl<'b, V: ReadOnly + ?Sized> ReadOnly for &'b mut V {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&Self::Kind> { (**self).component(offset) }
}

impl<V: ReadOnly + ?Sized> ReadOnly for Box<V> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&Self::Kind> { (**self).component(offset) }
}

impl<V: ReadOnly + ?Sized> ReadOnly for Rc<V> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&Self::Kind> { (**self).component(offset) }
}

impl<V: ReadOnly + ?Sized> ReadOnly for Arc<V> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&Self::Kind> { (**self).component(offset) }
}

// ----------------------------------------------------------------------------

/// Write access to the components of a tuple.
///
/// Implementors supply [`store()`] and [`gather()`]; everything else is
/// checked here before either is called, so a failing method never leaves
/// the tuple partially updated. Methods return `&mut Self` so that calls
/// can be chained:
///
/// ```
/// use smalltuple::{ReadOnly, WriteOnly, Tup2i};
/// let mut t = Tup2i::zero();
/// t.set_array(&[3, 7]).unwrap().arrange(&[1, 0]).unwrap();
/// assert_eq!(t, Tup2i::new(7, 3));
/// assert!(t.set_array(&[1]).is_err());
/// assert_eq!(t, Tup2i::new(7, 3));
/// ```
///
/// [`store()`]: Self::store()
/// [`gather()`]: Self::gather()
pub trait WriteOnly: Dimensioned {
    /// Replace the component at `offset`.
    ///
    /// This is the unchecked hook behind the setters below, which never pass
    /// an `offset` outside `0..self.dimensions()`. Prefer [`set_by_index()`].
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.dimensions()`.
    ///
    /// [`set_by_index()`]: Self::set_by_index()
    fn store(&mut self, offset: usize, value: Self::Kind);

    /// Replace component `k` with the current component `map[k]`, for every
    /// `k` simultaneously.
    ///
    /// This is the unchecked hook behind [`arrange()`] and [`swizzle()`],
    /// which always pass a map of length `self.dimensions()` whose entries
    /// are all less than `self.dimensions()`.
    ///
    /// # Panics
    ///
    /// Panics if `map` does not satisfy those conditions.
    ///
    /// [`arrange()`]: Self::arrange()
    /// [`swizzle()`]: Self::swizzle()
    fn gather(&mut self, map: &[usize]);

    /// Replace the component named by `index`.
    fn set_by_index(&mut self, index: impl ComponentIndex, value: Self::Kind) -> Result<&mut Self> {
        let offset = index.to_offset(self.dimensions())?;
        self.store(offset, value);
        Ok(self)
    }

    /// Replace every component with the corresponding one of `values`.
    ///
    /// Extra trailing `values` are ignored. Fails with
    /// [`Error::SizeMismatch`] if there are too few.
    fn set_array(&mut self, values: &[Self::Kind]) -> Result<&mut Self> {
        self.set_from(values)
    }

    /// Replace every component with the corresponding component of `other`,
    /// which can be anything that [`ReadOnly::equals()`] accepts.
    fn set_from<O: Operand<Self::Kind> + ?Sized>(&mut self, other: &O) -> Result<&mut Self> {
        let values = operand::take(other, self.dimensions())?;
        for (offset, value) in values.into_iter().enumerate() { self.store(offset, value); }
        Ok(self)
    }

    /// Replace every component with `value`.
    fn set_all(&mut self, value: Self::Kind) -> &mut Self {
        for offset in 0..self.dimensions() { self.store(offset, value.clone()); }
        self
    }

    /// Rearrange the components so that the new component `k` is the current
    /// component `indices[k]`.
    ///
    /// Indices may repeat. Fails with [`Error::SizeMismatch`] unless there
    /// is exactly one index per component, or with
    /// [`Error::IndexOutOfRange`] if any index is invalid.
    fn arrange<I: ComponentIndex>(&mut self, indices: &[I]) -> Result<&mut Self> {
        let map = arrange::gather_map(indices, self.dimensions())?;
        self.gather(&map);
        Ok(self)
    }

    /// Exchange the components named by `a` and `b`. `a == b` is a no-op.
    fn swizzle(&mut self, a: impl ComponentIndex, b: impl ComponentIndex) -> Result<&mut Self> {
        let map = arrange::swap_map(a, b, self.dimensions())?;
        self.gather(&map);
        Ok(self)
    }

    /// Borrow `self` through the `WriteOnly` capability only.
    fn write_only(&mut self) -> WriteView<'_, Self> { WriteView::new(self) }
}

impl<V: WriteOnly + ?Sized, T: DerefMut<Target=V>> WriteOnly for T {
    #[inline(always)]
    fn store(&mut self, offset: usize, value: Self::Kind) { (**self).store(offset, value) }
    #[inline(always)]
    fn gather(&mut self, map: &[usize]) { (**self).gather(map) }
}

// ----------------------------------------------------------------------------

/// Implemented by every type that is both [`ReadOnly`] and [`WriteOnly`].
pub trait Mutable: ReadOnly + WriteOnly {}

impl<T: ReadOnly + WriteOnly + ?Sized> Mutable for T {}

// ----------------------------------------------------------------------------

/// Construction of new tuples whose type is chosen by `self`.
///
/// The value-returning permutations [`arrange_n()`] and [`swizzle_n()`]
/// leave `self` untouched. They copy `self` and then apply the in-place
/// [`WriteOnly::arrange()`] or [`WriteOnly::swizzle()`], so both forms
/// always agree.
///
/// ```
/// use smalltuple::{CreateNew, Tup2i};
/// let t = Tup2i::new(3, 7);
/// assert_eq!(t.swizzle_n(0, 1).unwrap(), Tup2i::new(7, 3));
/// assert_eq!(t.arrange_n(&[1, 1]).unwrap(), Tup2i::new(7, 7));
/// assert_eq!(t, Tup2i::new(3, 7));
/// ```
///
/// [`arrange_n()`]: Self::arrange_n()
/// [`swizzle_n()`]: Self::swizzle_n()
pub trait CreateNew: ReadOnly {
    /// The type of the tuples that `self` creates.
    type Output: Mutable<Kind=Self::Kind> + CreateNew;

    /// Construct a tuple with the same dimensions as `self` from the start
    /// of `values`. Trailing values are ignored.
    ///
    /// Fails with [`Error::SizeMismatch`] if there are too few `values`.
    fn create_new(&self, values: &[Self::Kind]) -> Result<Self::Output>;

    /// Construct a tuple with the same dimensions as `self` and every
    /// component equal to `value`.
    fn create_filled(&self, value: Self::Kind) -> Self::Output;

    /// Construct a tuple with the same dimensions as `self` and every
    /// component equal to zero.
    fn create_zero(&self) -> Self::Output {
        self.create_filled(<Self::Kind as ScalarKind>::zero())
    }

    /// Construct a deep copy of `self`.
    fn copy(&self) -> Self::Output;

    /// Returns a copy of `self` with the components rearranged by
    /// [`WriteOnly::arrange()`].
    fn arrange_n<I: ComponentIndex>(&self, indices: &[I]) -> Result<Self::Output> {
        let mut t = self.copy();
        t.arrange(indices)?;
        Ok(t)
    }

    /// Returns a copy of `self` with two components exchanged by
    /// [`WriteOnly::swizzle()`].
    fn swizzle_n(&self, a: impl ComponentIndex, b: impl ComponentIndex) -> Result<Self::Output> {
        let mut t = self.copy();
        t.swizzle(a, b)?;
        Ok(t)
    }
}

impl<V: CreateNew + ?Sized, T: Deref<Target=V> + ReadOnly<Kind=V::Kind>> CreateNew for T {
    type Output = V::Output;
    fn create_new(&self, values: &[Self::Kind]) -> Result<Self::Output> { (**self).create_new(values) }
    fn create_filled(&self, value: Self::Kind) -> Self::Output { (**self).create_filled(value) }
    fn copy(&self) -> Self::Output { (**self).copy() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::rc::{Rc};

    use super::*;
    use crate::{Component, Scalar, Tup, Tup2i, Tup3f, Tup4l, TupN};

    /// Only `ReadOnly + CreateNew` is required to make new tuples.
    fn reversed<T: CreateNew + ?Sized>(t: &T) -> Result<T::Output> {
        let indices: Vec<usize> = (0..t.dimensions()).rev().collect();
        t.arrange_n(&indices)
    }

    fn assert_round_trip<T: CreateNew + ?Sized>(t: &T) {
        let u = t.create_new(&t.to_array()).unwrap();
        assert_eq!(u.dimensions(), t.dimensions());
        assert!(u.equals(&t.to_array()));
        assert!(t.equals(&u.to_array()));
    }

    fn assert_index_name_agreement<T: ReadOnly + ?Sized>(t: &T) {
        for (offset, name) in Component::ALL.iter().enumerate() {
            if offset < t.dimensions() {
                assert_eq!(t.get_by_index(offset).unwrap(), t.get_by_index(*name).unwrap());
            } else {
                assert!(t.get_by_index(*name).is_err());
            }
        }
    }

    fn assert_bounds<T: ReadOnly + ?Sized>(t: &T) {
        let dimensions = t.dimensions();
        assert_eq!(
            t.get_by_index(dimensions),
            Err(Error::IndexOutOfRange {index: dimensions as i128, dimensions}),
        );
        assert_eq!(t.get_by_index(-1), Err(Error::IndexOutOfRange {index: -1, dimensions}));
    }

    /// Runs the generic checks on every arity of `Tup` and on `TupN`.
    fn assert_every_arity<K: ScalarKind>(values: [K; 4]) {
        let t2 = Tup::<K, 2>::try_from_slice(&values).unwrap();
        let t3 = Tup::<K, 3>::try_from_slice(&values).unwrap();
        let t4 = Tup::<K, 4>::from_array(values.clone());
        let n = TupN::new(values.to_vec());
        assert_round_trip(&t2);
        assert_round_trip(&t3);
        assert_round_trip(&t4);
        assert_round_trip(&n);
        assert_bounds(&t2);
        assert_bounds(&t3);
        assert_bounds(&t4);
        assert_bounds(&n);
        assert_index_name_agreement(&t2);
        assert_index_name_agreement(&t3);
        assert_index_name_agreement(&t4);
    }

    #[test]
    fn every_kind() {
        assert_every_arity([true, false, false, true]);
        assert_every_arity([i8::MIN, -1, 0, i8::MAX]);
        assert_every_arity([i16::MIN, -1, 0, i16::MAX]);
        assert_every_arity([i32::MIN, -1, 0, i32::MAX]);
        assert_every_arity([i64::MIN, -1, 0, i64::MAX]);
        assert_every_arity([f32::MIN, -0.5, 0.0, f32::MAX]);
        assert_every_arity([f64::MIN, -0.5, 0.0, f64::MAX]);
        assert_every_arity(['a', '\0', 'é', 'z']);
        assert_every_arity([String::from("a"), String::new(), String::from("bc"), String::from("a")]);
        assert_every_arity([Some(1u32), None, Some(0), None]);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn every_kind_bigint() {
        use num_bigint::{BigInt};
        let big = BigInt::from(i64::MAX) * BigInt::from(i64::MAX);
        assert_every_arity([-big.clone(), BigInt::from(0), BigInt::from(1), big]);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn every_kind_decimal() {
        use std::str::{FromStr};
        use bigdecimal::{BigDecimal};
        let values = ["-1.5", "0", "0.001", "12345678901234567890.5"].map(|s| BigDecimal::from_str(s).unwrap());
        assert_every_arity(values);
    }

    #[test]
    fn round_trip() {
        assert_round_trip(&Tup2i::new(3, 7));
        assert_round_trip(&Tup3f::new(1.0, -2.5, 3.0));
        assert_round_trip(&Tup4l::new(1, 2, 3, 4));
        assert_round_trip(&Tup::<char, 2>::new('a', 'z'));
        assert_round_trip(&Tup::<String, 3>::new("a".into(), "b".into(), "".into()));
        assert_round_trip(&TupN::new(vec![true, false, true, true, false]));
    }

    #[test]
    fn index_name_agreement() {
        assert_index_name_agreement(&Tup2i::new(3, 7));
        assert_index_name_agreement(&Tup3f::new(1.0, 2.0, 3.0));
        assert_index_name_agreement(&Tup4l::new(9, 8, 7, 6));
        assert_index_name_agreement(&TupN::new(vec![1i8, 2, 3]));
    }

    #[test]
    fn bounds() {
        assert_bounds(&Tup2i::new(3, 7));
        assert_bounds(&Tup3f::zero());
        assert_bounds(&Tup4l::zero());
        assert_bounds(&TupN::<i16>::zero(6));
        assert_bounds(&TupN::<i16>::zero(0));
    }

    #[test]
    fn to_array_into() {
        let t = Tup3f::new(1.0, 2.0, 3.0);
        let mut buffer = [9.0; 5];
        t.to_array_into(&mut buffer).unwrap();
        assert_eq!(buffer, [1.0, 2.0, 3.0, 9.0, 9.0]);
        let mut short = [9.0; 2];
        assert_eq!(t.to_array_into(&mut short), Err(Error::SizeMismatch {required: 3, actual: 2}));
        assert_eq!(short, [9.0; 2]);
        buffer[0] = -1.0;
        assert_eq!(t.v0(), &1.0);
    }

    #[test]
    fn validity() {
        assert!(Tup3f::new(1.0, 2.0, 3.0).is_valid());
        assert!(!Tup3f::new(1.0, f32::NAN, 3.0).is_valid());
        assert!(Tup::<Option<&str>, 2>::new(Some("a"), Some("b")).is_valid());
        assert!(!Tup::<Option<&str>, 2>::new(Some("a"), None).is_valid());
    }

    #[test]
    fn set_by_index() {
        let mut t = Tup4l::zero();
        t.set_by_index(2, 5).unwrap().set_by_index(Component::V0, 1).unwrap();
        assert_eq!(t, Tup4l::new(1, 0, 5, 0));
        assert_eq!(t.set_by_index(4, 1).err(), Some(Error::IndexOutOfRange {index: 4, dimensions: 4}));
        assert_eq!(t.set_by_index(-2, 1).err(), Some(Error::IndexOutOfRange {index: -2, dimensions: 4}));
        assert_eq!(t, Tup4l::new(1, 0, 5, 0));
    }

    #[test]
    fn set_array() {
        let mut t = Tup3f::zero();
        t.set_array(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(t, Tup3f::new(1.0, 2.0, 3.0));
        assert_eq!(t.set_array(&[7.0, 8.0]).err(), Some(Error::SizeMismatch {required: 3, actual: 2}));
        assert_eq!(t, Tup3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_from() {
        let mut t = Tup2i::zero();
        t.set_from(&Scalar(4)).unwrap();
        assert_eq!(t, Tup2i::new(4, 4));
        t.set_from(&Tup2i::new(1, 2)).unwrap();
        assert_eq!(t, Tup2i::new(1, 2));
        t.set_all(0);
        assert!(t.is_zero());
    }

    #[test]
    fn arrange() {
        let mut t = Tup4l::new(10, 11, 12, 13);
        t.arrange(&[3, 2, 1, 0]).unwrap();
        assert_eq!(t, Tup4l::new(13, 12, 11, 10));
        t.arrange(&[0, 0, 0, 3]).unwrap();
        assert_eq!(t, Tup4l::new(13, 13, 13, 10));
        assert_eq!(t.arrange(&[0, 1, 2]).err(), Some(Error::SizeMismatch {required: 4, actual: 3}));
        assert_eq!(t.arrange(&[0, 1, 2, 4]).err(), Some(Error::IndexOutOfRange {index: 4, dimensions: 4}));
        assert_eq!(t.arrange(&[0, -1, 2, 3]).err(), Some(Error::IndexOutOfRange {index: -1, dimensions: 4}));
        assert_eq!(t, Tup4l::new(13, 13, 13, 10));
    }

    #[test]
    fn swizzle() {
        let mut t = Tup3f::new(1.0, 2.0, 3.0);
        t.swizzle(0, 2).unwrap();
        assert_eq!(t, Tup3f::new(3.0, 2.0, 1.0));
        t.swizzle(1, 1).unwrap();
        assert_eq!(t, Tup3f::new(3.0, 2.0, 1.0));
        assert!(t.swizzle(0, 3).is_err());
        assert!(t.swizzle(-1, 0).is_err());
        assert_eq!(t, Tup3f::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn chaining() {
        let mut t = Tup2i::zero();
        t.set(3, 7).arrange(&[1, 0]).unwrap().swizzle(0, 1).unwrap().set_v1(0);
        assert_eq!(t, Tup2i::new(3, 0));
    }

    #[test]
    fn value_returning_forms_agree() {
        let t = Tup4l::new(1, 2, 3, 4);
        for a in 0..4 {
            for b in 0..4 {
                let mut u = t;
                u.swizzle(a, b).unwrap();
                assert_eq!(t.swizzle_n(a, b).unwrap(), u);
                assert_eq!(t.swizzle_n(a, b).unwrap().swizzle_n(a, b).unwrap(), t);
            }
        }
        let indices = [2, 2, 0, 1];
        let mut u = t;
        u.arrange(&indices).unwrap();
        assert_eq!(t.arrange_n(&indices).unwrap(), u);
        assert_eq!(t.arrange_n(&[0, 1, 2, 3]).unwrap(), t);
        assert_eq!(t, Tup4l::new(1, 2, 3, 4));
    }

    #[test]
    fn create() {
        let t = Tup3f::new(1.0, 2.0, 3.0);
        assert_eq!(t.create_filled(0.5), Tup3f::new(0.5, 0.5, 0.5));
        assert!(t.create_zero().is_zero());
        assert_eq!(t.create_new(&[4.0, 5.0, 6.0]).unwrap(), Tup3f::new(4.0, 5.0, 6.0));
        assert_eq!(t.create_new(&[4.0]).err(), Some(Error::SizeMismatch {required: 3, actual: 1}));
        assert_eq!(reversed(&t).unwrap(), Tup3f::new(3.0, 2.0, 1.0));
        let n = TupN::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(reversed(&n).unwrap(), TupN::new(vec![5, 4, 3, 2, 1]));
    }

    #[test]
    fn through_pointers() {
        let t = Rc::new(Tup2i::new(3, 7));
        assert_eq!(t.dimensions(), 2);
        assert_eq!(t.get_by_index(0), Ok(&3));
        assert_eq!(reversed(&t).unwrap(), Tup2i::new(7, 3));

        let mut b = Box::new(Tup2i::new(3, 7));
        b.swizzle(0, 1).unwrap();
        assert_eq!(*b, Tup2i::new(7, 3));

        let mut t = Tup2i::new(3, 7);
        let r = &mut t;
        r.set_by_index(0, 4).unwrap();
        assert_eq!(r.component(0), Some(&4));
        assert_eq!(t, Tup2i::new(4, 7));

        let a = std::sync::Arc::new(TupN::new(vec![1, 2, 3]));
        assert_eq!(reversed(&a).unwrap(), TupN::new(vec![3, 2, 1]));
        let shared = &&Tup3f::new(1.0, 2.0, 3.0);
        assert_eq!(shared.get_by_index(Component::V2), Ok(&3.0));
        assert!(shared.equals(&[1.0, 2.0, 3.0]));
    }
}
