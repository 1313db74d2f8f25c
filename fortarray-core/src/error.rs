use crate::range::Idx;

/// Whether axis indices and range codes are validated.
///
/// Always on under `debug_assertions`; the `checked` feature turns it on for
/// optimized builds too. When off, out-of-range fronts and extents are
/// truncated into their bit fields and per-axis index validation is skipped.
pub const CHECKED: bool = cfg!(any(debug_assertions, feature = "checked"));

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("lower bound {front} is out of range [{min}, {max}]")]
    FrontOutOfRange { front: Idx, min: Idx, max: Idx },

    #[error("extent {size} is out of range [0, {max}]")]
    SizeOutOfRange { size: Idx, max: Idx },

    #[error("extent {extent} on axis {axis} is negative")]
    NegativeExtent { axis: usize, extent: Idx },

    #[error("index {index} on axis {axis} is outside [{lower}, {upper}]")]
    IndexOutOfBounds {
        axis: usize,
        index: Idx,
        lower: Idx,
        upper: Idx,
    },

    #[error("extents {extents:?} hold more elements than the host can address")]
    ElementCountOverflow { extents: Vec<Idx> },

    #[error("array is already allocated with {size} elements")]
    AlreadyAllocated { size: usize },

    #[error("cannot view {found} bytes of storage as a {expected} byte value")]
    SizeMismatch { expected: usize, found: usize },

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }

    /// The error with any backtrace wrapper removed.
    pub fn without_backtrace(self) -> Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.without_backtrace(),
            err => err,
        }
    }
}

/// Panic with the error's message. Used where a violated precondition is a
/// caller bug rather than a recoverable condition.
#[track_caller]
pub(crate) fn raise(err: Error) -> ! {
    panic!("{err}")
}
