//! Packed axis ranges.
//!
//! A [`RangeCode`] stores one axis' lower bound ("front") and extent in a
//! single `u64`, so it can travel through const generics and associated
//! constants. Bit layout, most significant first:
//!
//! | bits  | field      | meaning                                   |
//! |-------|------------|-------------------------------------------|
//! | 63    | `explicit` | the front was given explicitly            |
//! | 32-62 | `front`    | 31-bit two's complement lower bound       |
//! | 0-31  | `size`     | extent, at most [`MAX_SIZE`]              |
//!
//! The width is fixed at 64 bits on every host, which bounds fronts to
//! [`MIN_FRONT`]..=[`MAX_FRONT`] and extents to `0..=`[`MAX_SIZE`].

use std::fmt;

use crate::{Error, Result, CHECKED};

/// Raw integer representation of a [`RangeCode`].
pub type Code = u64;

/// Signed index type used for indices, fronts, extents and flat offsets.
pub type Idx = i64;

const FRONT_BITS: u32 = 31;
const SIZE_BITS: u32 = 32;
const EXPLICIT_SHIFT: u32 = FRONT_BITS + SIZE_BITS;

const SIZE_MASK: Code = (1 << SIZE_BITS) - 1;
const FRONT_MASK: Code = ((1 << FRONT_BITS) - 1) << SIZE_BITS;

/// Smallest representable lower bound.
pub const MIN_FRONT: Idx = -(1 << (FRONT_BITS - 1));
/// Largest representable lower bound.
pub const MAX_FRONT: Idx = (1 << (FRONT_BITS - 1)) - 1;
/// Largest representable extent.
pub const MAX_SIZE: Idx = 0x7FFF_FFFF;

/// One axis range `[front, front + size)` packed into a [`Code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RangeCode(Code);

const fn pack(explicit: bool, front: Idx, size: Idx) -> Code {
    ((explicit as Code) << EXPLICIT_SHIFT)
        | (((front as Code) << SIZE_BITS) & FRONT_MASK)
        | ((size as Code) & SIZE_MASK)
}

const fn check_front(front: Idx) {
    if CHECKED && (front < MIN_FRONT || front > MAX_FRONT) {
        panic!("range front is out of range");
    }
}

const fn check_size(size: Idx) {
    if CHECKED && (size < 0 || size > MAX_SIZE) {
        panic!("range size is out of range");
    }
}

impl RangeCode {
    /// The half-open range `[front, front + size)`.
    ///
    /// Panics in checked mode (a build error in const context) if either
    /// field does not fit; otherwise the fields are truncated.
    pub const fn new(front: Idx, size: Idx) -> Self {
        check_front(front);
        check_size(size);
        Self(pack(true, front, size))
    }

    /// The inclusive range `[front, back]`.
    pub const fn inclusive(front: Idx, back: Idx) -> Self {
        Self::new(front, back - front + 1)
    }

    /// A bare extent whose front is resolved later by [`Self::materialize`].
    pub const fn extent(size: Idx) -> Self {
        check_size(size);
        Self(pack(false, 0, size))
    }

    /// Validating version of [`Self::new`], independent of [`CHECKED`].
    pub fn try_new(front: Idx, size: Idx) -> Result<Self> {
        if !(MIN_FRONT..=MAX_FRONT).contains(&front) {
            return Err(Error::FrontOutOfRange {
                front,
                min: MIN_FRONT,
                max: MAX_FRONT,
            }
            .bt());
        }
        if !(0..=MAX_SIZE).contains(&size) {
            return Err(Error::SizeOutOfRange {
                size,
                max: MAX_SIZE,
            }
            .bt());
        }
        Ok(Self(pack(true, front, size)))
    }

    /// Validating version of [`Self::inclusive`].
    pub fn try_inclusive(front: Idx, back: Idx) -> Result<Self> {
        let size = back
            .checked_sub(front)
            .and_then(|d| d.checked_add(1))
            .ok_or_else(|| {
                Error::SizeOutOfRange {
                    size: back.saturating_sub(front).saturating_add(1),
                    max: MAX_SIZE,
                }
                .bt()
            })?;
        Self::try_new(front, size)
    }

    pub const fn from_code(code: Code) -> Self {
        Self(code)
    }

    pub const fn code(self) -> Code {
        self.0
    }

    pub const fn is_explicit(self) -> bool {
        self.0 >> EXPLICIT_SHIFT != 0
    }

    /// Lower bound. Meaningless until materialized if the code is implicit.
    pub const fn front(self) -> Idx {
        // Shift the sign bit of the front field into bit 63, then shift back
        // arithmetically.
        ((self.0 << 1) as Idx) >> (SIZE_BITS + 1)
    }

    pub const fn size(self) -> Idx {
        (self.0 & SIZE_MASK) as Idx
    }

    /// Inclusive upper bound, `front + size - 1`.
    pub const fn back(self) -> Idx {
        self.front() + self.size() - 1
    }

    pub const fn decode(self) -> (Idx, Idx) {
        (self.front(), self.size())
    }

    pub const fn contains(self, index: Idx) -> bool {
        self.front() <= index && index <= self.back()
    }

    /// Explicit codes are returned unchanged; implicit ones get `default_front`.
    pub const fn materialize(self, default_front: Idx) -> Self {
        if self.is_explicit() {
            self
        } else {
            Self::new(default_front, self.size())
        }
    }

    /// `[0, size)` for bare extents.
    pub const fn materialize_as_sequential(self) -> Self {
        self.materialize(0)
    }

    /// `[1, size]` for bare extents.
    pub const fn materialize_as_bound1(self) -> Self {
        self.materialize(1)
    }
}

impl From<Code> for RangeCode {
    fn from(code: Code) -> Self {
        Self::from_code(code)
    }
}

impl From<RangeCode> for Code {
    fn from(range: RangeCode) -> Self {
        range.code()
    }
}

impl fmt::Debug for RangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_explicit() {
            write!(f, "RangeCode({}:{})", self.front(), self.back())
        } else {
            write!(f, "RangeCode(_; {})", self.size())
        }
    }
}

/// Fortran notation, `front:back`.
impl fmt::Display for RangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.front(), self.back())
    }
}
