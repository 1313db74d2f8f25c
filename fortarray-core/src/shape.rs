//! Type-level axis descriptions.
//!
//! A fixed shape is a list of axis types, each either a bare extent
//! ([`Ext<N>`]) or an explicit range ([`Span<FRONT, N>`]):
//!
//! ```
//! use fortarray_core::{Dimension, Ext, Span, Tensor, E2, R2};
//!
//! // int a[2][3]
//! let a = Tensor::<i32, E2<2, 3>>::zeros();
//! // integer, dimension(-4:-2, 3) :: b
//! let b = Dimension::<i32, R2<Span<-4, 3>, Ext<3>>>::zeros();
//! assert_eq!(b.lbound(0), -4);
//! assert_eq!(b.lbound(1), 1);
//! assert_eq!(a.size(), 6);
//! ```
//!
//! Dynamic arrays only fix the lower bound of each axis, via [`B1`]..[`B6`].

use std::{fmt::Debug, marker::PhantomData};

use crate::{
    dtype::DType,
    layout::{AxisOrder, Layout, Order},
    range::{Idx, RangeCode},
    tensor::{check_position, View, ViewMut},
    Result,
};

/// One axis of a fixed shape.
pub trait Axis: 'static {
    /// Declared range; implicit for bare extents.
    const RANGE: RangeCode;

    /// `E` repeated once per position along this axis.
    type Array<E: Copy>: Copy;
}

/// A bare extent; its front is 0 in C-style and 1 in Fortran-style arrays.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ext<const N: usize>;

/// The explicit range `[FRONT, FRONT + N)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Span<const FRONT: Idx, const N: usize>;

impl<const N: usize> Axis for Ext<N> {
    const RANGE: RangeCode = RangeCode::extent(N as Idx);
    type Array<E: Copy> = [E; N];
}

impl<const FRONT: Idx, const N: usize> Axis for Span<FRONT, N> {
    const RANGE: RangeCode = RangeCode::new(FRONT, N as Idx);
    type Array<E: Copy> = [E; N];
}

/// A fixed-length list of indices, one per axis.
pub trait Indices: Copy + Debug + AsRef<[Idx]> + AsMut<[Idx]> + Send + Sync + 'static {
    const LEN: usize;
    const ZEROS: Self;
}

impl<const K: usize> Indices for [Idx; K] {
    const LEN: usize = K;
    const ZEROS: Self = [0; K];
}

/// A list of axes known at build time.
pub trait Shape: 'static {
    const RANK: usize;
    const SIZE: usize;

    type Index: Indices;

    /// Nested array with the first listed axis outermost.
    type MajorNest<T: DType>: Copy;
    /// Nested array with the first listed axis innermost.
    type MinorNest<T: DType>: Copy;

    fn range<O: Order>(axis: usize) -> RangeCode;
    fn strides<O: Order>() -> Self::Index;
    fn sequential_index<O: Order>(idx: Self::Index) -> Idx;
    fn bound_index<O: Order>(idx: Self::Index) -> Idx;
    fn check_sequential<O: Order>(idx: &Self::Index) -> Result<()>;
    fn check_bound<O: Order>(idx: &Self::Index) -> Result<()>;
}

macro_rules! nest {
    ($T:ty; $A:ident) => { <$A as Axis>::Array<$T> };
    ($T:ty; $A:ident, $($rest:ident),+) => { <$A as Axis>::Array<nest!($T; $($rest),+)> };
}

macro_rules! shape {
    ($name:ident, $alias:ident, $k:literal, ($($A:ident),+), ($($R:ident),+)) => {
        pub struct $name<$($A: Axis),+>(PhantomData<($($A,)+)>);

        pub type $alias<$(const $A: usize),+> = $name<$(Ext<$A>),+>;

        impl<$($A: Axis),+> $name<$($A),+> {
            const DECLARED: [RangeCode; $k] = [$($A::RANGE),+];
            const MAJOR: Layout<$k> = Layout::new(Self::DECLARED, AxisOrder::MajorFirst);
            const MINOR: Layout<$k> = Layout::new(Self::DECLARED, AxisOrder::MinorFirst);

            #[inline(always)]
            const fn layout<O: Order>() -> Layout<$k> {
                match O::ORDER {
                    AxisOrder::MajorFirst => Self::MAJOR,
                    AxisOrder::MinorFirst => Self::MINOR,
                }
            }
        }

        impl<$($A: Axis),+> Shape for $name<$($A),+> {
            const RANK: usize = $k;
            const SIZE: usize = Self::MAJOR.size();

            type Index = [Idx; $k];

            type MajorNest<T: DType> = nest!(T; $($A),+);
            type MinorNest<T: DType> = nest!(T; $($R),+);

            fn range<O: Order>(axis: usize) -> RangeCode {
                Self::layout::<O>().range(axis)
            }

            fn strides<O: Order>() -> [Idx; $k] {
                Self::layout::<O>().strides()
            }

            #[inline(always)]
            fn sequential_index<O: Order>(idx: [Idx; $k]) -> Idx {
                Self::layout::<O>().sequential_index(idx)
            }

            #[inline(always)]
            fn bound_index<O: Order>(idx: [Idx; $k]) -> Idx {
                Self::layout::<O>().bound_index(idx)
            }

            fn check_sequential<O: Order>(idx: &[Idx; $k]) -> Result<()> {
                Self::layout::<O>().check_sequential(idx)
            }

            fn check_bound<O: Order>(idx: &[Idx; $k]) -> Result<()> {
                Self::layout::<O>().check_bound(idx)
            }
        }
    };
}

shape!(R1, E1, 1, (A), (A));
shape!(R2, E2, 2, (A, B), (B, A));
shape!(R3, E3, 3, (A, B, C), (C, B, A));
shape!(R4, E4, 4, (A, B, C, D), (D, C, B, A));
shape!(R5, E5, 5, (A, B, C, D, E), (E, D, C, B, A));
shape!(R6, E6, 6, (A, B, C, D, E, F), (F, E, D, C, B, A));

/// Lower bounds of a dynamic array, fastest axis first.
pub trait Bounds: 'static {
    const RANK: usize;

    type Index: Indices;

    const FRONTS: Self::Index;

    /// Result of one subscript: a view one axis shallower, or the element
    /// itself for rank 1.
    type Sub<'a, T: 'a>;
    type SubMut<'a, T: 'a>;

    fn sub<'a, T: 'a>(data: &'a [T], dims: &'a [Idx], i: usize) -> Self::Sub<'a, T>;
    fn sub_mut<'a, T: 'a>(data: &'a mut [T], dims: &'a [Idx], i: usize) -> Self::SubMut<'a, T>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct B1<const A: Idx>;

impl<const A: Idx> Bounds for B1<A> {
    const RANK: usize = 1;

    type Index = [Idx; 1];

    const FRONTS: [Idx; 1] = [A];

    type Sub<'a, T: 'a> = &'a T;
    type SubMut<'a, T: 'a> = &'a mut T;

    #[inline(always)]
    fn sub<'a, T: 'a>(data: &'a [T], dims: &'a [Idx], i: usize) -> &'a T {
        check_position(0, i, dims[0] as usize);
        &data[i]
    }

    #[inline(always)]
    fn sub_mut<'a, T: 'a>(data: &'a mut [T], dims: &'a [Idx], i: usize) -> &'a mut T {
        check_position(0, i, dims[0] as usize);
        &mut data[i]
    }
}

macro_rules! bounds {
    ($name:ident, $k:literal, ($($F:ident),+)) => {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name<$(const $F: Idx),+>;

        impl<$(const $F: Idx),+> Bounds for $name<$($F),+> {
            const RANK: usize = $k;

            type Index = [Idx; $k];

            const FRONTS: [Idx; $k] = [$($F),+];

            type Sub<'a, T: 'a> = View<'a, T, { $k - 1 }>;
            type SubMut<'a, T: 'a> = ViewMut<'a, T, { $k - 1 }>;

            #[inline(always)]
            fn sub<'a, T: 'a>(data: &'a [T], dims: &'a [Idx], i: usize) -> Self::Sub<'a, T> {
                View::<'a, T, $k>::new(data, dims).at(i)
            }

            #[inline(always)]
            fn sub_mut<'a, T: 'a>(
                data: &'a mut [T],
                dims: &'a [Idx],
                i: usize,
            ) -> Self::SubMut<'a, T> {
                ViewMut::<'a, T, $k>::new(data, dims).at_mut(i)
            }
        }
    };
}

bounds!(B2, 2, (A, B));
bounds!(B3, 3, (A, B, C));
bounds!(B4, 4, (A, B, C, D));
bounds!(B5, 5, (A, B, C, D, E));
bounds!(B6, 6, (A, B, C, D, E, F));
