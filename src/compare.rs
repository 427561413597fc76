//! Exact and tolerance-bounded comparison, written once against
//! [`ReadOnly::component()`] and [`Operand::operand_at()`].

use std::cmp::{Ordering};

use super::{Error, Result, ComponentIndex, ScalarKind, Ordered, Numeric, Operand, ReadOnly, Scalar};

/// Returns `true` if `other` has exactly `dimensions` components, or
/// broadcasts one.
fn same_dimensions<K, O: Operand<K> + ?Sized>(dimensions: usize, other: &O) -> bool {
    other.operand_len().map_or(true, |len| len == dimensions)
}

/// Returns `true` if `f` holds for every pair of corresponding components.
fn all_pairs<T, O>(this: &T, other: &O, mut f: impl FnMut(&T::Kind, &T::Kind) -> bool) -> bool where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
{
    let dimensions = this.dimensions();
    same_dimensions(dimensions, other) && (0..dimensions).all(|offset| {
        match (this.component(offset), other.operand_at(offset)) {
            (Some(a), Some(b)) => f(a, b),
            _ => false,
        }
    })
}

fn check_tolerance<K: Numeric>(tolerance: &K) -> Result<()> {
    if tolerance.is_valid_tolerance() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!("tolerance must be non-negative, got {:?}", tolerance)))
    }
}

/// Borrows the component named by `index` from both sides.
fn pair_at<'a, T, O>(this: &'a T, index: impl ComponentIndex, other: &'a O) -> Result<(&'a T::Kind, &'a T::Kind)> where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
{
    let a = this.get_by_index(index)?;
    let b = other.try_operand_at(index.to_offset(this.dimensions())?)?;
    Ok((a, b))
}

// ----------------------------------------------------------------------------

pub(crate) fn equals<T, O>(this: &T, other: &O) -> bool where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
{
    all_pairs(this, other, |a, b| a == b)
}

pub(crate) fn equals_within<T, O>(this: &T, other: &O, tolerance: &T::Kind) -> Result<bool> where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
    T::Kind: Numeric,
{
    check_tolerance(tolerance)?;
    Ok(all_pairs(this, other, |a, b| a.within(b, tolerance)))
}

pub(crate) fn is_zero<T: ReadOnly + ?Sized>(this: &T) -> bool {
    equals(this, &Scalar(<T::Kind as ScalarKind>::zero()))
}

pub(crate) fn is_zero_within<T: ReadOnly + ?Sized>(this: &T, tolerance: &T::Kind) -> Result<bool> where
    T::Kind: Numeric,
{
    equals_within(this, &Scalar(<T::Kind as ScalarKind>::zero()), tolerance)
}

pub(crate) fn compare_at<T, O>(this: &T, index: impl ComponentIndex, other: &O) -> Result<Ordering> where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
    T::Kind: Ordered,
{
    let (a, b) = pair_at(this, index, other)?;
    Ok(a.compare(b))
}

pub(crate) fn compare_at_within<T, O>(
    this: &T,
    index: impl ComponentIndex,
    other: &O,
    tolerance: &T::Kind,
) -> Result<Ordering> where
    T: ReadOnly + ?Sized,
    O: Operand<T::Kind> + ?Sized,
    T::Kind: Numeric,
{
    check_tolerance(tolerance)?;
    let (a, b) = pair_at(this, index, other)?;
    Ok(a.compare_within(b, tolerance))
}

// ----------------------------------------------------------------------------
