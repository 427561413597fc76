use super::{Error, Result};

/// The other side of a comparison or assignment: something with components
/// of kind `K` at some offsets.
///
/// Implemented by every tuple type, by slices, arrays and `Vec`s of `K`, and
/// by [`Scalar`], which has the same value at every offset.
pub trait Operand<K> {
    /// The number of components, or `None` if every offset has one.
    fn operand_len(&self) -> Option<usize>;

    /// Borrow the component at `offset`, if there is one.
    fn operand_at(&self, offset: usize) -> Option<&K>;

    /// Like [`operand_at()`], but a missing component is an
    /// [`Error::IndexOutOfRange`].
    ///
    /// [`operand_at()`]: Self::operand_at()
    fn try_operand_at(&self, offset: usize) -> Result<&K> {
        self.operand_at(offset).ok_or_else(|| {
            Error::index_out_of_range(offset as i128, self.operand_len().unwrap_or(0))
        })
    }
}

impl<K, O: Operand<K> + ?Sized> Operand<K> for &O {
    #[inline(always)]
    fn operand_len(&self) -> Option<usize> { (**self).operand_len() }
    #[inline(always)]
    fn operand_at(&self, offset: usize) -> Option<&K> { (**self).operand_at(offset) }
}

impl<K> Operand<K> for [K] {
    fn operand_len(&self) -> Option<usize> { Some(self.len()) }
    fn operand_at(&self, offset: usize) -> Option<&K> { self.get(offset) }
}

impl<K, const M: usize> Operand<K> for [K; M] {
    fn operand_len(&self) -> Option<usize> { Some(M) }
    fn operand_at(&self, offset: usize) -> Option<&K> { self.get(offset) }
}

impl<K> Operand<K> for Vec<K> {
    fn operand_len(&self) -> Option<usize> { Some(self.len()) }
    fn operand_at(&self, offset: usize) -> Option<&K> { self.get(offset) }
}

// ----------------------------------------------------------------------------

/// A bare value, used as an [`Operand`] with that value at every offset.
///
/// ```
/// use smalltuple::{ReadOnly, Scalar, Tup3i};
/// assert!(Tup3i::new(4, 4, 4).equals(&Scalar(4)));
/// assert_eq!(Tup3i::new(3, 4, 5).equals_within(&Scalar(4), &1), Ok(true));
/// ```
#[derive(Default, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Scalar<K>(pub K);

impl<K> Operand<K> for Scalar<K> {
    #[inline(always)]
    fn operand_len(&self) -> Option<usize> { None }
    #[inline(always)]
    fn operand_at(&self, _: usize) -> Option<&K> { Some(&self.0) }
}

// ----------------------------------------------------------------------------

/// Clones the first `dimensions` components of `other`.
///
/// Fails with [`Error::SizeMismatch`] if `other` is too short, before
/// anything is cloned.
pub(crate) fn take<K: Clone, O: Operand<K> + ?Sized>(other: &O, dimensions: usize) -> Result<Vec<K>> {
    if let Some(len) = other.operand_len() {
        if len < dimensions { return Err(Error::size_mismatch(dimensions, len)); }
    }
    (0..dimensions).map(|offset| other.try_operand_at(offset).cloned()).collect()
}

// ----------------------------------------------------------------------------
