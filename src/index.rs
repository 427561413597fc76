use std::fmt::{Debug};

use super::{Error, Result};

/// Implemented by types that can name a component of a tuple.
///
/// Integer types of every width and signedness are accepted so that call
/// sites can write plain literals. A negative integer is never a valid
/// index. [`Component`] names a component by its accessor instead.
///
/// ```
/// use smalltuple::{ComponentIndex, Component};
/// assert_eq!(2usize.to_offset(3), Ok(2));
/// assert_eq!(Component::V1.to_offset(2), Ok(1));
/// assert!((-1i32).to_offset(3).is_err());
/// assert!(3u8.to_offset(3).is_err());
/// ```
pub trait ComponentIndex: Copy + Debug {
    /// Returns the offset (in `0..dimensions`) named by `self`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if there is no such component.
    fn to_offset(self, dimensions: usize) -> Result<usize>;
}

/// Checks a signed or unsigned integer index against `dimensions`.
#[inline(always)]
fn checked(index: i128, dimensions: usize) -> Result<usize> {
    if 0 <= index && index < dimensions as i128 {
        Ok(index as usize)
    } else {
        Err(Error::index_out_of_range(index, dimensions))
    }
}

macro_rules! impl_component_index {
    ($($t:ty),*) => {
        $(
            impl ComponentIndex for $t {
                #[inline(always)]
                fn to_offset(self, dimensions: usize) -> Result<usize> {
                    checked(self as i128, dimensions)
                }
            }
        )*
    };
}

impl_component_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// ----------------------------------------------------------------------------

/// A tuple component named by its accessor, e.g. `V0` for `v0()`.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Component {
    V0,
    V1,
    V2,
    V3,
}

impl Component {
    /// The complete list of named components.
    pub const ALL: &'static [Self] = &[Component::V0, Component::V1, Component::V2, Component::V3];

    /// Returns the offset this name stands for, regardless of dimension.
    pub fn offset(self) -> usize { self as usize }
}

impl ComponentIndex for Component {
    fn to_offset(self, dimensions: usize) -> Result<usize> {
        checked(self.offset() as i128, dimensions)
    }
}

// ----------------------------------------------------------------------------
