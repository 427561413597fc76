//! Small fixed-arity tuples of scalars.
//!
//! [`Tup<K, N>`] holds exactly `N` components of a [`ScalarKind`] `K`, such
//! as `i32`, `f64`, `char` or `BigInt`. There are aliases for the common
//! cases, named after the arity and the kind, e.g. [`Tup2i`] for two `i32`s
//! and [`Tup3d`] for three `f64`s. [`TupN<K>`] is the same thing with the
//! number of components chosen at run time.
//!
//! Access to a tuple is split into capabilities, so that code can ask for
//! only what it needs:
//!
//! - [`ReadOnly`] - accessors, exact and approximate equality, ordering.
//! - [`WriteOnly`] - setters, [`arrange()`] and [`swizzle()`].
//! - [`Mutable`] - both of the above.
//! - [`CreateNew`] - copies, and the value-returning [`arrange_n()`] and
//!   [`swizzle_n()`].
//!
//! Every fallible method returns a [`Result`] and checks its arguments
//! before touching anything, so an [`Error`] never leaves a tuple partially
//! modified.
//!
//! ```
//! use smalltuple::{ReadOnly, CreateNew, Scalar, Tup3d};
//! let mut t = Tup3d::new(1.0, 2.0, 3.0);
//! assert_eq!(t.equals_within(&[1.0, 2.0, 3.001], &0.01), Ok(true));
//! assert!(t.equals_within(&Scalar(0.0), &-1.0).is_err());
//!
//! let u = t.arrange_n(&[2, 2, 0]).unwrap();
//! assert_eq!(u, Tup3d::new(3.0, 3.0, 1.0));
//! t.swizzle_v0_v2();
//! assert_eq!(t.to_array(), vec![3.0, 2.0, 1.0]);
//! ```
//!
//! [`arrange()`]: WriteOnly::arrange()
//! [`swizzle()`]: WriteOnly::swizzle()
//! [`arrange_n()`]: CreateNew::arrange_n()
//! [`swizzle_n()`]: CreateNew::swizzle_n()

mod error;
pub use error::{Error, Result};

mod index;
pub use index::{ComponentIndex, Component};

pub mod kind;
pub use kind::{ScalarKind, Ordered, Numeric};

pub mod capability;
pub use capability::{Dimensioned, ReadOnly, WriteOnly, Mutable, CreateNew};

mod operand;
pub use operand::{Operand, Scalar};

mod compare;
mod arrange;

mod fixed;
pub use fixed::{Tup, Tup2, Tup3, Tup4};
pub use fixed::{Tup2z, Tup3z, Tup4z, TupNz};
pub use fixed::{Tup2b, Tup3b, Tup4b, TupNb};
pub use fixed::{Tup2s, Tup3s, Tup4s, TupNs};
pub use fixed::{Tup2i, Tup3i, Tup4i, TupNi};
pub use fixed::{Tup2l, Tup3l, Tup4l, TupNl};
pub use fixed::{Tup2f, Tup3f, Tup4f, TupNf};
pub use fixed::{Tup2d, Tup3d, Tup4d, TupNd};
pub use fixed::{Tup2c, Tup3c, Tup4c, TupNc};
pub use fixed::{Tup2str, Tup3str, Tup4str, TupNstr};
pub use fixed::{Tup2o, Tup3o, Tup4o, TupNo};
#[cfg(feature = "bigint")]
pub use fixed::{Tup2bi, Tup3bi, Tup4bi, TupNbi};
#[cfg(feature = "decimal")]
pub use fixed::{Tup2bd, Tup3bd, Tup4bd, TupNbd};

mod dynamic;
pub use dynamic::{TupN};

pub mod view;
pub use view::{ReadView, WriteView};

#[cfg(feature = "bigint")]
pub use num_bigint::{BigInt};
#[cfg(feature = "decimal")]
pub use bigdecimal::{BigDecimal};
