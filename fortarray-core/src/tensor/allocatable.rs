use std::{
    fmt,
    marker::PhantomData,
    mem::{size_of, size_of_val},
    ptr,
};

use crate::{
    error::raise,
    layout::{bound_offset, check_bound, check_sequential, sequential_offset},
    range::{Idx, MAX_SIZE},
    shape::{Bounds, Indices},
    DType, Error, Result, CHECKED,
};

/// A heap array whose extents are chosen at run time and whose lower bounds
/// `B` are fixed at build time.
///
/// Extents are kept fastest axis first. Two entry points fill them:
/// [`Self::allocate`] takes Fortran order (`allocate(a(n1, n2))`),
/// [`Self::reserve`] takes C order (`new T[n2][n1]`). Both describe the same
/// storage:
///
/// ```
/// use fortarray_core::{Allocatable, B2};
///
/// let mut a = Allocatable::<i32, B2<1, 1>>::new();
/// a.reserve([2, 3]);
/// assert_eq!(a.extents(), [3, 2]);
/// *a.at_sequential_mut([1, 2]) = 7;
/// assert_eq!(*a.at_bound([3, 2]), 7);
/// assert_eq!(a.at(1)[2], 7);
/// ```
pub struct Allocatable<T: DType, B: Bounds> {
    data: Option<Box<[T]>>,
    // all zero while unallocated
    dims: B::Index,
    _ghost: PhantomData<B>,
}

impl<T: DType, B: Bounds> Allocatable<T, B> {
    /// An unallocated array.
    pub fn new() -> Self {
        Self {
            data: None,
            dims: <B::Index as Indices>::ZEROS,
            _ghost: PhantomData,
        }
    }

    pub fn allocated(&self) -> bool {
        self.data.is_some()
    }

    pub fn rank(&self) -> usize {
        B::RANK
    }

    /// Product of the extents; 0 while unallocated.
    pub fn size(&self) -> usize {
        self.data().len()
    }

    /// Extents, fastest axis first.
    pub fn extents(&self) -> B::Index {
        self.dims
    }

    /// Extents, slowest axis first.
    pub fn shape(&self) -> B::Index {
        let mut shape = self.dims;
        shape.as_mut().reverse();
        shape
    }

    /// Lower bound of `axis`, counted fastest first.
    pub fn lbound(&self, axis: usize) -> Idx {
        B::FRONTS.as_ref()[axis]
    }

    /// Inclusive upper bound of `axis`, counted fastest first.
    pub fn ubound(&self, axis: usize) -> Idx {
        self.lbound(axis) + self.dims.as_ref()[axis] - 1
    }

    pub fn extent(&self, axis: usize) -> Idx {
        self.dims.as_ref()[axis]
    }

    /// Allocate zeroed storage for `extents`, fastest axis first.
    pub fn try_allocate(&mut self, extents: B::Index) -> Result<()> {
        if let Some(data) = &self.data {
            return Err(Error::AlreadyAllocated { size: data.len() }.bt());
        }
        for (axis, &extent) in extents.as_ref().iter().enumerate() {
            if extent < 0 {
                return Err(Error::NegativeExtent { axis, extent }.bt());
            }
            if extent > MAX_SIZE {
                return Err(Error::SizeOutOfRange {
                    size: extent,
                    max: MAX_SIZE,
                }
                .bt());
            }
        }
        let size = extents
            .as_ref()
            .iter()
            .try_fold(1 as Idx, |acc, &extent| acc.checked_mul(extent))
            .and_then(|size| usize::try_from(size).ok())
            .ok_or_else(|| {
                Error::ElementCountOverflow {
                    extents: extents.as_ref().to_vec(),
                }
                .bt()
            })?;
        tracing::debug!(?extents, size, elem = T::NAME, "allocate");
        self.data = Some(vec![T::ZERO; size].into_boxed_slice());
        self.dims = extents;
        Ok(())
    }

    /// Panicking version of [`Self::try_allocate`].
    #[track_caller]
    pub fn allocate(&mut self, extents: B::Index) {
        if let Err(e) = self.try_allocate(extents) {
            raise(e)
        }
    }

    /// Allocate zeroed storage for `shape`, slowest axis first.
    pub fn try_reserve(&mut self, shape: B::Index) -> Result<()> {
        let mut extents = shape;
        extents.as_mut().reverse();
        self.try_allocate(extents)
    }

    #[track_caller]
    pub fn reserve(&mut self, shape: B::Index) {
        if let Err(e) = self.try_reserve(shape) {
            raise(e)
        }
    }

    /// Release any storage, then [`Self::allocate`].
    #[track_caller]
    pub fn reallocate(&mut self, extents: B::Index) {
        self.deallocate();
        self.allocate(extents);
    }

    /// Release any storage, then [`Self::reserve`].
    #[track_caller]
    pub fn resize(&mut self, shape: B::Index) {
        self.clear();
        self.reserve(shape);
    }

    /// Release the storage. Does nothing if unallocated.
    pub fn deallocate(&mut self) {
        if let Some(data) = self.data.take() {
            tracing::debug!(size = data.len(), elem = T::NAME, "deallocate");
        }
        self.dims = <B::Index as Indices>::ZEROS;
    }

    pub fn clear(&mut self) {
        self.deallocate();
    }

    /// Storage in memory order; empty while unallocated.
    pub fn data(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_deref_mut().unwrap_or_default()
    }

    /// First element, or null while unallocated.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ref().map_or(ptr::null(), |data| data.as_ptr())
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data
            .as_mut()
            .map_or(ptr::null_mut(), |data| data.as_mut_ptr())
    }

    /// Flat offset of 0-based indices, slowest axis first.
    #[inline(always)]
    pub fn sequential_index(&self, idx: B::Index) -> Idx {
        sequential_offset(self.dims.as_ref(), idx.as_ref())
    }

    /// Flat offset of bound-relative indices, fastest axis first.
    #[inline(always)]
    pub fn bound_index(&self, idx: B::Index) -> Idx {
        bound_offset(self.dims.as_ref(), B::FRONTS.as_ref(), idx.as_ref())
    }

    #[inline(always)]
    pub fn at_sequential(&self, idx: B::Index) -> &T {
        if CHECKED {
            if let Err(e) = check_sequential(self.dims.as_ref(), idx.as_ref()) {
                raise(e)
            }
        }
        &self.data()[self.sequential_index(idx) as usize]
    }

    #[inline(always)]
    pub fn at_sequential_mut(&mut self, idx: B::Index) -> &mut T {
        if CHECKED {
            if let Err(e) = check_sequential(self.dims.as_ref(), idx.as_ref()) {
                raise(e)
            }
        }
        let offset = self.sequential_index(idx) as usize;
        &mut self.data_mut()[offset]
    }

    #[inline(always)]
    pub fn at_bound(&self, idx: B::Index) -> &T {
        if CHECKED {
            if let Err(e) = check_bound(self.dims.as_ref(), B::FRONTS.as_ref(), idx.as_ref()) {
                raise(e)
            }
        }
        &self.data()[self.bound_index(idx) as usize]
    }

    #[inline(always)]
    pub fn at_bound_mut(&mut self, idx: B::Index) -> &mut T {
        if CHECKED {
            if let Err(e) = check_bound(self.dims.as_ref(), B::FRONTS.as_ref(), idx.as_ref()) {
                raise(e)
            }
        }
        let offset = self.bound_index(idx) as usize;
        &mut self.data_mut()[offset]
    }

    /// Sub-region at 0-based position `i` of the slowest axis, or the element
    /// itself for rank 1. Chain with [`View::at`](crate::View::at) and
    /// indexing: `a.at(i).at(j)[k]`.
    #[inline(always)]
    pub fn at(&self, i: usize) -> B::Sub<'_, T> {
        B::sub(self.data(), self.dims.as_ref(), i)
    }

    #[inline(always)]
    pub fn at_mut(&mut self, i: usize) -> B::SubMut<'_, T> {
        let data = self.data.as_deref_mut().unwrap_or_default();
        B::sub_mut(data, self.dims.as_ref(), i)
    }

    pub fn fill(&mut self, value: T) {
        tracing::trace!(size = self.size(), elem = T::NAME, "fill");
        self.data_mut().fill(value);
    }

    pub fn zero(&mut self) {
        self.fill(T::ZERO);
    }

    /// Reinterpret the storage as a `V` of the same size.
    ///
    /// Panics if the sizes differ or the storage is misaligned for `V`.
    ///
    /// # Safety
    /// Every bit pattern of the storage must be a valid `V`.
    #[track_caller]
    pub unsafe fn view_as<V>(&self) -> &V {
        self.check_view::<V>();
        &*self.data().as_ptr().cast::<V>()
    }

    /// Mutable version of [`Self::view_as`].
    ///
    /// # Safety
    /// As for [`Self::view_as`]; additionally, every `V` written must leave
    /// valid `T`s behind.
    #[track_caller]
    pub unsafe fn view_as_mut<V>(&mut self) -> &mut V {
        self.check_view::<V>();
        &mut *self.data_mut().as_mut_ptr().cast::<V>()
    }

    #[track_caller]
    fn check_view<V>(&self) {
        let found = size_of_val(self.data());
        if found != size_of::<V>() {
            raise(Error::SizeMismatch {
                expected: size_of::<V>(),
                found,
            })
        }
        assert!(
            self.data().as_ptr().cast::<V>().is_aligned(),
            "storage is misaligned for the view"
        );
    }
}

impl<T: DType, B: Bounds> Default for Allocatable<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DType, B: Bounds> fmt::Debug for Allocatable<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocatable")
            .field("fronts", &B::FRONTS)
            .field("extents", &self.dims)
            .field("data", &self.data.as_deref())
            .finish()
    }
}
