//! Fortarray provides multidimensional arrays whose axes carry arbitrary lower
//! bounds, in both C and Fortran memory order.
//!
//! Shapes, bounds and strides are resolved at build time wherever they are
//! known, so an element access is one multiply-add per axis on constants.
//!
//! - [`Tensor`] and [`Dimension`] are fixed-shape arrays stored inline as
//!   native nested arrays: [`Tensor`] is C-style (last axis contiguous, bare
//!   extents 0-based), [`Dimension`] is Fortran-style (first axis contiguous,
//!   bare extents 1-based). Axes are [`Ext<N>`] for a bare extent or
//!   [`Span<FRONT, N>`] for an explicit range.
//! - [`Allocatable`] is a heap array whose extents are chosen at run time and
//!   whose lower bounds are fixed by [`B1`]..[`B6`].
//! - [`RangeCode`] packs one axis' lower bound and extent into an integer.
//!
//! Every array can be addressed *sequentially* (0-based on every axis) or
//! *bound-relative* (each index within the axis' declared bounds).
//!
//! ## What can you do with it?
//! ```
//! use fortarray_core::{Allocatable, Dimension, Ext, Span, Tensor, B2, E2, R2};
//!
//! // int t[2][3]
//! let mut t = Tensor::<i32, E2<2, 3>>::zeros();
//! t[1][2] = 5;
//! assert_eq!(*t.at_sequential([1, 2]), 5);
//!
//! // integer :: d(-1:0, 3)
//! let mut d = Dimension::<i32, R2<Span<-1, 2>, Ext<3>>>::zeros();
//! *d.at_bound_mut([0, 3]) = 7;
//! assert_eq!(d.data()[5], 7);
//!
//! // real(8), allocatable :: a(:, :); allocate(a(4, 2))
//! let mut a = Allocatable::<f64, B2<1, 1>>::new();
//! a.allocate([4, 2]);
//! *a.at_bound_mut([4, 2]) = 1.5;
//! assert_eq!(a.at(1)[3], 1.5);
//! a.deallocate();
//! assert!(!a.allocated());
//! ```
//!
//! ## Checked mode
//! [`CHECKED`] is on in debug builds and with the `checked` feature. It
//! validates range codes and per-axis indices, panicking with the offending
//! axis. Without it only the flat offset is bounds-checked.

mod dtype;
mod error;
mod layout;
mod range;
mod shape;
mod tensor;

pub use dtype::DType;
pub use error::{Error, Result, CHECKED};
pub use layout::{rev_prod, AxisOrder, CStyle, FortranStyle, Layout, Order};
pub use range::{Code, Idx, RangeCode, MAX_FRONT, MAX_SIZE, MIN_FRONT};
pub use shape::{
    Axis, Bounds, Ext, Indices, Shape, Span, B1, B2, B3, B4, B5, B6, E1, E2, E3, E4, E5, E6,
    R1, R2, R3, R4, R5, R6,
};
pub use tensor::{Allocatable, Dimension, Fixed, Tensor, View, ViewMut};
