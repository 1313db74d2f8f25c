//! Flat-offset arithmetic.
//!
//! [`Layout`] covers axis lists fixed at build time: it is built by a `const fn`
//! so every stride, front and the total size end up as constants, and an index
//! costs one multiply-add per axis. The [`runtime`](self::runtime) functions do
//! the same over extents only known after allocation.

mod runtime;

pub use runtime::{bound_offset, check_bound, check_sequential, rev_prod, sequential_offset};

use std::fmt::Debug;

use crate::{
    dtype::DType,
    range::{Idx, RangeCode},
    shape::Shape,
    Error, Result,
};

/// Which listed axis is contiguous in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrder {
    /// The last listed axis varies fastest, as in `int a[A][B][C]`.
    MajorFirst,
    /// The first listed axis varies fastest, as in `dimension(A, B, C)`.
    MinorFirst,
}

impl AxisOrder {
    /// Front given to bare extents: 0 for C-style, 1 for Fortran-style.
    pub const fn default_front(self) -> Idx {
        match self {
            Self::MajorFirst => 0,
            Self::MinorFirst => 1,
        }
    }
}

/// Type-level axis order of a fixed-shape container.
pub trait Order: Clone + Copy + Debug + Default + Send + Sync + 'static {
    const ORDER: AxisOrder;

    /// Native nested array holding a `T` for every element of `S`.
    type Storage<T: DType, S: Shape>: Copy;
}

/// Major-first layout with 0-based bare extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CStyle;

/// Minor-first layout with 1-based bare extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FortranStyle;

impl Order for CStyle {
    const ORDER: AxisOrder = AxisOrder::MajorFirst;
    type Storage<T: DType, S: Shape> = S::MajorNest<T>;
}

impl Order for FortranStyle {
    const ORDER: AxisOrder = AxisOrder::MinorFirst;
    type Storage<T: DType, S: Shape> = S::MinorNest<T>;
}

/// Strides and bounds of `K` axes under one [`AxisOrder`].
///
/// Indices are always passed in declared axis order; the order only decides
/// which axis gets stride 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout<const K: usize> {
    order: AxisOrder,
    ranges: [RangeCode; K],
    strides: [Idx; K],
    // sum of front * stride, subtracted from bound-relative offsets
    base: Idx,
    size: Idx,
}

impl<const K: usize> Layout<K> {
    /// Materialize `declared` with the order's default front and derive the
    /// strides. Overflowing the element count is a build error when evaluated
    /// in a constant.
    pub const fn new(declared: [RangeCode; K], order: AxisOrder) -> Self {
        let mut ranges = declared;
        let mut i = 0;
        while i < K {
            ranges[i] = declared[i].materialize(order.default_front());
            i += 1;
        }

        let mut strides = [0; K];
        let mut size = 1;
        match order {
            AxisOrder::MajorFirst => {
                let mut i = K;
                while i > 0 {
                    i -= 1;
                    strides[i] = size;
                    size *= ranges[i].size();
                }
            }
            AxisOrder::MinorFirst => {
                let mut i = 0;
                while i < K {
                    strides[i] = size;
                    size *= ranges[i].size();
                    i += 1;
                }
            }
        }

        let mut base = 0;
        let mut i = 0;
        while i < K {
            base += ranges[i].front() * strides[i];
            i += 1;
        }

        Self {
            order,
            ranges,
            strides,
            base,
            size,
        }
    }

    pub const fn order(&self) -> AxisOrder {
        self.order
    }

    pub const fn rank(&self) -> usize {
        K
    }

    /// Total element count.
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Materialized range of `axis`, in declared order.
    pub const fn range(&self, axis: usize) -> RangeCode {
        self.ranges[axis]
    }

    pub const fn ranges(&self) -> [RangeCode; K] {
        self.ranges
    }

    pub const fn strides(&self) -> [Idx; K] {
        self.strides
    }

    /// Offset of 0-based indices.
    #[inline(always)]
    pub const fn sequential_index(&self, idx: [Idx; K]) -> Idx {
        let mut offset = 0;
        let mut i = 0;
        while i < K {
            offset += idx[i] * self.strides[i];
            i += 1;
        }
        offset
    }

    /// Offset of indices lying in `[front, front + size)` on each axis.
    #[inline(always)]
    pub const fn bound_index(&self, idx: [Idx; K]) -> Idx {
        self.sequential_index(idx) - self.base
    }

    pub fn check_sequential(&self, idx: &[Idx; K]) -> Result<()> {
        for (axis, (&index, range)) in idx.iter().zip(self.ranges.iter()).enumerate() {
            if !(0..range.size()).contains(&index) {
                return Err(Error::IndexOutOfBounds {
                    axis,
                    index,
                    lower: 0,
                    upper: range.size() - 1,
                });
            }
        }
        Ok(())
    }

    pub fn check_bound(&self, idx: &[Idx; K]) -> Result<()> {
        for (axis, (&index, range)) in idx.iter().zip(self.ranges.iter()).enumerate() {
            if !range.contains(index) {
                return Err(Error::IndexOutOfBounds {
                    axis,
                    index,
                    lower: range.front(),
                    upper: range.back(),
                });
            }
        }
        Ok(())
    }
}
