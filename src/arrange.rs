//! Construction of the gather maps behind [`WriteOnly::arrange()`] and
//! [`WriteOnly::swizzle()`].
//!
//! A gather map has one entry per component: entry `k` is the offset of the
//! current component that becomes the new component `k`. Entries may
//! repeat, so a map need not be a permutation.
//!
//! [`WriteOnly::arrange()`]: super::WriteOnly::arrange()
//! [`WriteOnly::swizzle()`]: super::WriteOnly::swizzle()

use super::{Error, Result, ComponentIndex};

/// Checks `indices` and converts them to a gather map.
pub(crate) fn gather_map<I: ComponentIndex>(indices: &[I], dimensions: usize) -> Result<Vec<usize>> {
    if indices.len() != dimensions {
        return Err(Error::size_mismatch(dimensions, indices.len()));
    }
    indices.iter().map(|index| index.to_offset(dimensions)).collect()
}

/// Returns the gather map that exchanges components `a` and `b`.
pub(crate) fn swap_map(a: impl ComponentIndex, b: impl ComponentIndex, dimensions: usize) -> Result<Vec<usize>> {
    let a = a.to_offset(dimensions)?;
    let b = b.to_offset(dimensions)?;
    let mut map: Vec<usize> = (0..dimensions).collect();
    map.swap(a, b);
    Ok(map)
}

/// Applies a gather map to `values` in place.
///
/// # Panics
///
/// Panics if `map` is not a gather map for `values`, i.e. if its length
/// differs or any entry is out of range.
pub(crate) fn gather_slice<K: Clone>(values: &mut [K], map: &[usize]) {
    assert_eq!(map.len(), values.len(), "gather map has the wrong length");
    let old = values.to_vec();
    for (slot, &from) in values.iter_mut().zip(map) { *slot = old[from].clone(); }
}

// ----------------------------------------------------------------------------
