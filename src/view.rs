//! Restricted borrows of a tuple.
//!
//! [`ReadView`] exposes only the [`ReadOnly`] and [`CreateNew`] capabilities
//! of the tuple it borrows, and [`WriteView`] exposes only [`WriteOnly`].
//! Neither implements [`Deref`], so code given a view cannot reach the other
//! capabilities.
//!
//! All views of a tuple share its storage. The borrow checker ensures that
//! a `WriteView` is dropped before the tuple is read again:
//!
//! ```
//! use smalltuple::{ReadOnly, WriteOnly, Tup3i};
//! let mut t = Tup3i::new(1, 2, 3);
//! t.write_only().set_by_index(0, 9).unwrap().swizzle(1, 2).unwrap();
//! assert_eq!(t.read_only().to_array(), vec![9, 3, 2]);
//! ```
//!
//! [`Deref`]: std::ops::Deref

use std::fmt::{Debug, Formatter};

use super::{Result, Dimensioned, ReadOnly, WriteOnly, CreateNew, Operand};

/// Borrows a `T` through its [`ReadOnly`] and [`CreateNew`] capabilities.
pub struct ReadView<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> ReadView<'a, T> {
    /// Borrows `inner`. Usually called as [`ReadOnly::read_only()`].
    pub fn new(inner: &'a T) -> Self { Self(inner) }
}

impl<'a, T: ?Sized> Clone for ReadView<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T: ?Sized> Copy for ReadView<'a, T> {}

impl<'a, T: ReadOnly + ?Sized> Debug for ReadView<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_tuple("ReadView").field(&self.0.to_array()).finish()
    }
}

impl<'a, T: Dimensioned + ?Sized> Dimensioned for ReadView<'a, T> {
    type Kind = T::Kind;
    #[inline(always)]
    fn dimensions(&self) -> usize { self.0.dimensions() }
}

impl<'a, T: ReadOnly + ?Sized> ReadOnly for ReadView<'a, T> {
    #[inline(always)]
    fn component(&self, offset: usize) -> Option<&T::Kind> { self.0.component(offset) }
}

impl<'a, T: CreateNew + ?Sized> CreateNew for ReadView<'a, T> {
    type Output = T::Output;
    fn create_new(&self, values: &[T::Kind]) -> Result<T::Output> { self.0.create_new(values) }
    fn create_filled(&self, value: T::Kind) -> T::Output { self.0.create_filled(value) }
    fn copy(&self) -> T::Output { self.0.copy() }
}

impl<'a, T: ReadOnly + ?Sized> Operand<T::Kind> for ReadView<'a, T> {
    #[inline(always)]
    fn operand_len(&self) -> Option<usize> { Some(self.0.dimensions()) }
    #[inline(always)]
    fn operand_at(&self, offset: usize) -> Option<&T::Kind> { self.0.component(offset) }
}

// ----------------------------------------------------------------------------

/// Borrows a `T` through its [`WriteOnly`] capability.
pub struct WriteView<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> WriteView<'a, T> {
    /// Mutably borrows `inner`. Usually called as
    /// [`WriteOnly::write_only()`].
    pub fn new(inner: &'a mut T) -> Self { Self(inner) }
}

impl<'a, T: Dimensioned + ?Sized> Debug for WriteView<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_struct("WriteView").field("dimensions", &self.0.dimensions()).finish()
    }
}

impl<'a, T: Dimensioned + ?Sized> Dimensioned for WriteView<'a, T> {
    type Kind = T::Kind;
    #[inline(always)]
    fn dimensions(&self) -> usize { self.0.dimensions() }
}

impl<'a, T: WriteOnly + ?Sized> WriteOnly for WriteView<'a, T> {
    #[inline(always)]
    fn store(&mut self, offset: usize, value: T::Kind) { self.0.store(offset, value) }
    #[inline(always)]
    fn gather(&mut self, map: &[usize]) { self.0.gather(map) }
}

// ----------------------------------------------------------------------------
