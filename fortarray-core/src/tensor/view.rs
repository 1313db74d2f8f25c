use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{error::raise, layout::rev_prod, range::Idx, Error, CHECKED};

/// Borrowed sub-region of a dynamic array with `D` axes left.
///
/// `dims` holds the remaining extents fastest axis first, so the outermost
/// remaining axis is `dims[D - 1]`. Each [`View::at`] peels it off; at `D == 1`
/// the view indexes elements directly.
///
/// Out-of-range positions panic in checked mode, naming the axis the way
/// bound-relative indexing does: `at` reports axis `D - 1`, element indexing
/// reports axis 0.
pub struct View<'a, T, const D: usize> {
    data: &'a [T],
    dims: &'a [Idx],
}

/// Mutable counterpart of [`View`].
pub struct ViewMut<'a, T, const D: usize> {
    data: &'a mut [T],
    dims: &'a [Idx],
}

impl<T, const D: usize> Clone for View<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const D: usize> Copy for View<'_, T, D> {}

/// `axis` is the container's axis number, fastest first, as in
/// [`Allocatable::extents`](crate::Allocatable::extents). A depth-`D` view
/// covers axes `0..D`, so its outermost axis is `D - 1`.
#[inline(always)]
pub(crate) fn check_position(axis: usize, i: usize, len: usize) {
    if CHECKED && i >= len {
        raise(Error::IndexOutOfBounds {
            axis,
            index: i as Idx,
            lower: 0,
            upper: len as Idx - 1,
        })
    }
}

impl<'a, T, const D: usize> View<'a, T, D> {
    pub(crate) fn new(data: &'a [T], dims: &'a [Idx]) -> Self {
        debug_assert_eq!(dims.len(), D);
        Self { data, dims }
    }

    /// Extent of the outermost remaining axis.
    pub fn len(&self) -> usize {
        self.dims[D - 1] as usize
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remaining extents, fastest axis first.
    pub fn extents(&self) -> &'a [Idx] {
        self.dims
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T, const D: usize> ViewMut<'a, T, D> {
    pub(crate) fn new(data: &'a mut [T], dims: &'a [Idx]) -> Self {
        debug_assert_eq!(dims.len(), D);
        Self { data, dims }
    }

    pub fn len(&self) -> usize {
        self.dims[D - 1] as usize
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn extents(&self) -> &'a [Idx] {
        self.dims
    }

    pub fn as_view(&self) -> View<'_, T, D> {
        View {
            data: &*self.data,
            dims: self.dims,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.data
    }
}

macro_rules! view_step {
    ($($d:literal => $s:literal),+ $(,)?) => {$(
        impl<'a, T> View<'a, T, $d> {
            /// Sub-region at 0-based position `i` of the outermost axis.
            #[inline(always)]
            pub fn at(self, i: usize) -> View<'a, T, $s> {
                check_position($d - 1, i, self.len());
                let stride = rev_prod(self.dims, $d - 2, $d - 1) as usize;
                View {
                    data: &self.data[i * stride..(i + 1) * stride],
                    dims: &self.dims[..$s],
                }
            }
        }

        impl<'a, T> ViewMut<'a, T, $d> {
            #[inline(always)]
            pub fn at_mut(self, i: usize) -> ViewMut<'a, T, $s> {
                check_position($d - 1, i, self.len());
                let stride = rev_prod(self.dims, $d - 2, $d - 1) as usize;
                let Self { data, dims } = self;
                ViewMut {
                    data: &mut data[i * stride..(i + 1) * stride],
                    dims: &dims[..$s],
                }
            }
        }
    )+};
}

view_step!(6 => 5, 5 => 4, 4 => 3, 3 => 2, 2 => 1);

impl<T> Index<usize> for View<'_, T, 1> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        check_position(0, i, self.len());
        &self.data[i]
    }
}

impl<T> Index<usize> for ViewMut<'_, T, 1> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        check_position(0, i, self.len());
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for ViewMut<'_, T, 1> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        check_position(0, i, self.len());
        &mut self.data[i]
    }
}

impl<T: fmt::Debug, const D: usize> fmt::Debug for View<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("extents", &self.dims)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Debug, const D: usize> fmt::Debug for ViewMut<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMut")
            .field("extents", &self.dims)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peel_major_axis() {
        // [2][3] stored as dims [3, 2]
        let data: Vec<i32> = (0..6).collect();
        let dims = [3, 2];
        let view = View::<i32, 2>::new(&data, &dims);
        assert_eq!(view.len(), 2);
        assert_eq!(view.at(1)[0], 3);
        assert_eq!(view.at(1)[2], 5);
        assert_eq!(view.at(0).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn write_through() {
        let mut data = vec![0u8; 24];
        let dims = [4, 3, 2];
        ViewMut::<u8, 3>::new(&mut data, &dims).at_mut(1).at_mut(2)[3] = 7;
        assert_eq!(data[23], 7);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "checked"))]
    #[should_panic(expected = "outside [0, 1]")]
    fn position_is_checked() {
        let data = [0u8; 6];
        let dims = [3, 2];
        let _ = View::<u8, 2>::new(&data, &dims).at(2);
    }
}
