//! Offsets over extents chosen at allocation time.
//!
//! Extents are stored fastest axis first: `dims[0]` is contiguous. Sequential
//! indices are read slowest axis first (C order), bound-relative indices
//! fastest axis first (Fortran order), so both read like their native
//! declarations.

use crate::{range::Idx, Error, Result};

/// Product of `n` extents read backward from `dims[back]`.
///
/// For `dims = [5, 4, 3, 2]`, `back = 2` and `n = 2` this is `3 * 4 = 12`.
#[inline(always)]
pub fn rev_prod(dims: &[Idx], back: usize, n: usize) -> Idx {
    debug_assert!(n <= back + 1);
    dims[back + 1 - n..=back].iter().product()
}

/// Offset of 0-based indices given slowest axis first.
#[inline(always)]
pub fn sequential_offset(dims: &[Idx], idx: &[Idx]) -> Idx {
    debug_assert_eq!(dims.len(), idx.len());
    idx.iter()
        .zip(dims.iter().rev())
        .fold(0, |offset, (&s, &extent)| offset * extent + s)
}

/// Offset of indices given fastest axis first, each shifted by its front.
#[inline(always)]
pub fn bound_offset(dims: &[Idx], fronts: &[Idx], idx: &[Idx]) -> Idx {
    debug_assert_eq!(dims.len(), idx.len());
    debug_assert_eq!(fronts.len(), idx.len());
    idx.iter()
        .zip(fronts)
        .zip(dims)
        .rev()
        .fold(0, |offset, ((&x, &front), &extent)| {
            offset * extent + (x - front)
        })
}

/// Validate sequential indices; `axis` in the error is the argument position.
pub fn check_sequential(dims: &[Idx], idx: &[Idx]) -> Result<()> {
    for (axis, (&index, &extent)) in idx.iter().zip(dims.iter().rev()).enumerate() {
        if !(0..extent).contains(&index) {
            return Err(Error::IndexOutOfBounds {
                axis,
                index,
                lower: 0,
                upper: extent - 1,
            });
        }
    }
    Ok(())
}

/// Validate bound-relative indices against `[front, front + extent)`.
pub fn check_bound(dims: &[Idx], fronts: &[Idx], idx: &[Idx]) -> Result<()> {
    for (axis, ((&index, &front), &extent)) in idx.iter().zip(fronts).zip(dims).enumerate() {
        if !(front..front + extent).contains(&index) {
            return Err(Error::IndexOutOfBounds {
                axis,
                index,
                lower: front,
                upper: front + extent - 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rev_prod_reads_backward() {
        let dims = [5, 4, 3, 2];
        assert_eq!(rev_prod(&dims, 2, 2), 12);
        assert_eq!(rev_prod(&dims, 3, 4), 120);
        assert_eq!(rev_prod(&dims, 0, 1), 5);
        assert_eq!(rev_prod(&dims, 1, 0), 1);
    }

    #[test]
    fn sequential_is_major_first() {
        // C declaration [2][3][4] is stored as dims [4, 3, 2].
        let dims = [4, 3, 2];
        assert_eq!(sequential_offset(&dims, &[0, 0, 1]), 1);
        assert_eq!(sequential_offset(&dims, &[0, 1, 0]), 4);
        assert_eq!(sequential_offset(&dims, &[1, 0, 0]), 12);
        assert_eq!(sequential_offset(&dims, &[1, 2, 3]), 23);
    }

    #[test]
    fn bound_is_minor_first() {
        let dims = [4, 3, 2];
        let fronts = [1, -1, 5];
        assert_eq!(bound_offset(&dims, &fronts, &[1, -1, 5]), 0);
        assert_eq!(bound_offset(&dims, &fronts, &[2, -1, 5]), 1);
        assert_eq!(bound_offset(&dims, &fronts, &[1, 0, 5]), 4);
        assert_eq!(bound_offset(&dims, &fronts, &[4, 1, 6]), 23);
    }

    #[test]
    fn conventions_agree() {
        let dims = [4, 3, 2];
        let fronts = [0, 0, 0];
        for a in 0..2 {
            for b in 0..3 {
                for c in 0..4 {
                    assert_eq!(
                        sequential_offset(&dims, &[a, b, c]),
                        bound_offset(&dims, &fronts, &[c, b, a])
                    );
                }
            }
        }
    }

    #[test]
    fn checks() {
        let dims = [4, 3];
        assert!(check_sequential(&dims, &[2, 3]).is_ok());
        assert!(matches!(
            check_sequential(&dims, &[3, 0]),
            Err(Error::IndexOutOfBounds { axis: 0, upper: 2, .. })
        ));
        assert!(check_bound(&dims, &[1, 1], &[4, 3]).is_ok());
        assert!(matches!(
            check_bound(&dims, &[1, 1], &[5, 1]),
            Err(Error::IndexOutOfBounds { axis: 0, lower: 1, upper: 4, .. })
        ));
    }
}
