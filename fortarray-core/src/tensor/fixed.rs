use std::{
    fmt,
    marker::PhantomData,
    mem::{size_of, MaybeUninit},
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::{
    error::raise,
    layout::{CStyle, FortranStyle, Order},
    range::{Idx, RangeCode},
    shape::Shape,
    DType, CHECKED,
};

/// An array whose axes are all fixed at build time.
///
/// The storage is the native nested array for `S` under `O`, so the value
/// lives inline (on the stack, or in whatever contains it) and nested
/// indexing `a[i][j][k]` is plain array indexing. Every index, stride and
/// bound is a constant.
///
/// Two indexing conventions are offered, both taking one index per axis in
/// declared order:
/// - *sequential*: 0-based on every axis;
/// - *bound-relative*: each index lies in the axis' `[front, back]`.
#[repr(transparent)]
pub struct Fixed<T: DType, S: Shape, O: Order> {
    data: O::Storage<T, S>,
    _ghost: PhantomData<(S, O)>,
}

/// C-style array: last axis contiguous, bare extents 0-based.
pub type Tensor<T, S> = Fixed<T, S, CStyle>;

/// Fortran-style array: first axis contiguous, bare extents 1-based.
pub type Dimension<T, S> = Fixed<T, S, FortranStyle>;

impl<T: DType, S: Shape, O: Order> Fixed<T, S, O> {
    const STORAGE_IS_FLAT: () = assert!(
        size_of::<O::Storage<T, S>>() == S::SIZE * size_of::<T>(),
        "nested storage must hold exactly the shape's elements"
    );

    /// An array with every element set to `value`.
    pub fn full(value: T) -> Self {
        let () = Self::STORAGE_IS_FLAT;
        let mut storage = MaybeUninit::<O::Storage<T, S>>::uninit();
        let first = storage.as_mut_ptr().cast::<T>();
        for i in 0..S::SIZE {
            // SAFETY: the storage is `S::SIZE` contiguous `T`s.
            unsafe { first.add(i).write(value) };
        }
        Self {
            // SAFETY: every element was written above.
            data: unsafe { storage.assume_init() },
            _ghost: PhantomData,
        }
    }

    pub fn zeros() -> Self {
        Self::full(T::ZERO)
    }

    pub fn ones() -> Self {
        Self::full(T::ONE)
    }

    /// Fill from a function of the flat storage offset.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut out = Self::zeros();
        for (i, x) in out.data_mut().iter_mut().enumerate() {
            *x = f(i);
        }
        out
    }

    /// Wrap a native nested array.
    pub fn from_array(data: O::Storage<T, S>) -> Self {
        let () = Self::STORAGE_IS_FLAT;
        Self {
            data,
            _ghost: PhantomData,
        }
    }

    pub fn into_array(self) -> O::Storage<T, S> {
        self.data
    }

    pub const fn rank(&self) -> usize {
        S::RANK
    }

    /// Total element count.
    pub const fn size(&self) -> usize {
        S::SIZE
    }

    /// The native nested array.
    pub fn array(&self) -> &O::Storage<T, S> {
        &self.data
    }

    pub fn array_mut(&mut self) -> &mut O::Storage<T, S> {
        &mut self.data
    }

    pub fn as_ptr(&self) -> *const T {
        ptr::addr_of!(self.data).cast()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        ptr::addr_of_mut!(self.data).cast()
    }

    /// All elements in storage order.
    pub fn data(&self) -> &[T] {
        // SAFETY: the storage is `S::SIZE` contiguous, initialized `T`s.
        unsafe { slice::from_raw_parts(self.as_ptr(), S::SIZE) }
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `data`, and we hold the only borrow.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), S::SIZE) }
    }

    /// Range of `axis` with bare extents materialized for this order.
    pub fn range(&self, axis: usize) -> RangeCode {
        S::range::<O>(axis)
    }

    /// Lower bound of `axis`.
    pub fn lbound(&self, axis: usize) -> Idx {
        self.range(axis).front()
    }

    /// Inclusive upper bound of `axis`.
    pub fn ubound(&self, axis: usize) -> Idx {
        self.range(axis).back()
    }

    pub fn extent(&self, axis: usize) -> Idx {
        self.range(axis).size()
    }

    pub fn strides(&self) -> S::Index {
        S::strides::<O>()
    }

    /// Flat offset of 0-based indices.
    #[inline(always)]
    pub fn sequential_index(&self, idx: S::Index) -> Idx {
        S::sequential_index::<O>(idx)
    }

    /// Flat offset of bound-relative indices.
    #[inline(always)]
    pub fn bound_index(&self, idx: S::Index) -> Idx {
        S::bound_index::<O>(idx)
    }

    #[inline(always)]
    pub fn at_sequential(&self, idx: S::Index) -> &T {
        if CHECKED {
            if let Err(e) = S::check_sequential::<O>(&idx) {
                raise(e)
            }
        }
        &self.data()[S::sequential_index::<O>(idx) as usize]
    }

    #[inline(always)]
    pub fn at_sequential_mut(&mut self, idx: S::Index) -> &mut T {
        if CHECKED {
            if let Err(e) = S::check_sequential::<O>(&idx) {
                raise(e)
            }
        }
        &mut self.data_mut()[S::sequential_index::<O>(idx) as usize]
    }

    #[inline(always)]
    pub fn at_bound(&self, idx: S::Index) -> &T {
        if CHECKED {
            if let Err(e) = S::check_bound::<O>(&idx) {
                raise(e)
            }
        }
        &self.data()[S::bound_index::<O>(idx) as usize]
    }

    #[inline(always)]
    pub fn at_bound_mut(&mut self, idx: S::Index) -> &mut T {
        if CHECKED {
            if let Err(e) = S::check_bound::<O>(&idx) {
                raise(e)
            }
        }
        &mut self.data_mut()[S::bound_index::<O>(idx) as usize]
    }

    pub fn fill(&mut self, value: T) {
        tracing::trace!(size = S::SIZE, elem = T::NAME, "fill");
        self.data_mut().fill(value);
    }

    pub fn zero(&mut self) {
        self.fill(T::ZERO);
    }

    /// Reinterpret the storage as a `V` of the same size.
    ///
    /// A size mismatch is a build error.
    ///
    /// # Safety
    /// Every bit pattern of the storage must be a valid `V`, and `V` must not
    /// need a stricter alignment than `T`.
    pub unsafe fn view_as<V>(&self) -> &V {
        const { assert!(size_of::<V>() == size_of::<Self>()) };
        debug_assert!(self.as_ptr().cast::<V>().is_aligned());
        &*self.as_ptr().cast::<V>()
    }

    /// Mutable version of [`Self::view_as`].
    ///
    /// # Safety
    /// As for [`Self::view_as`]; additionally, every `V` written must leave
    /// valid `T`s behind.
    pub unsafe fn view_as_mut<V>(&mut self) -> &mut V {
        const { assert!(size_of::<V>() == size_of::<Self>()) };
        debug_assert!(self.as_ptr().cast::<V>().is_aligned());
        &mut *self.as_mut_ptr().cast::<V>()
    }
}

/// Nested indexing, outermost storage axis first.
impl<T: DType, S: Shape, O: Order> Index<usize> for Fixed<T, S, O>
where
    O::Storage<T, S>: Index<usize>,
{
    type Output = <O::Storage<T, S> as Index<usize>>::Output;

    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl<T: DType, S: Shape, O: Order> IndexMut<usize> for Fixed<T, S, O>
where
    O::Storage<T, S>: IndexMut<usize>,
{
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.data[i]
    }
}

impl<T: DType, S: Shape, O: Order> Clone for Fixed<T, S, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DType, S: Shape, O: Order> Copy for Fixed<T, S, O> {}

impl<T: DType, S: Shape, O: Order> Default for Fixed<T, S, O> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: DType, S: Shape, O: Order> PartialEq for Fixed<T, S, O> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<T: DType, S: Shape, O: Order> fmt::Debug for Fixed<T, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranges: Vec<RangeCode> = (0..S::RANK).map(|axis| self.range(axis)).collect();
        f.debug_struct("Fixed")
            .field("order", &O::ORDER)
            .field("ranges", &ranges)
            .field("data", &self.data())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Ext, Span, E2, R2};

    #[test]
    fn storage_is_the_native_array() {
        let mut t = Tensor::<i32, E2<2, 3>>::from_fn(|i| i as i32);
        assert_eq!(*t.array(), [[0, 1, 2], [3, 4, 5]]);
        t[1][2] = 9;
        assert_eq!(*t.at_sequential([1, 2]), 9);

        let d = Dimension::<i32, E2<2, 3>>::from_fn(|i| i as i32);
        assert_eq!(*d.array(), [[0, 1], [2, 3], [4, 5]]);
        assert_eq!(*d.at_bound([2, 1]), 1);
    }

    #[test]
    fn explicit_fronts() {
        let d = Dimension::<u8, R2<Span<-4, 3>, Ext<3>>>::zeros();
        assert_eq!((d.lbound(0), d.ubound(0)), (-4, -2));
        assert_eq!((d.lbound(1), d.ubound(1)), (1, 3));
        assert_eq!(d.bound_index([-4, 1]), 0);
        assert_eq!(d.bound_index([-2, 3]), 8);
    }

    #[test]
    fn is_inline() {
        assert_eq!(size_of::<Tensor<f64, E2<4, 5>>>(), 20 * size_of::<f64>());
    }
}
