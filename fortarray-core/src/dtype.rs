use std::fmt::Debug;

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

/// Marker trait for element types stored in arrays.
///
/// Elements are plain `Copy` data: storage is filled, zeroed and reinterpreted
/// bit for bit, so no element ever needs dropping.
pub trait DType: Debug + Copy + PartialEq + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;
}

macro_rules! dtype {
    ($rt:ident, $zero:expr, $one:expr) => {
        impl DType for $rt {
            const ZERO: $rt = $zero;
            const ONE: $rt = $one;
            const NAME: &'static str = stringify!($rt);
        }
    };
}

dtype!(bool, false, true);
dtype!(u8, 0u8, 1u8);
dtype!(i8, 0i8, 1i8);
dtype!(u16, 0u16, 1u16);
dtype!(i16, 0i16, 1i16);
dtype!(u32, 0u32, 1u32);
dtype!(i32, 0i32, 1i32);
dtype!(u64, 0u64, 1u64);
dtype!(i64, 0i64, 1i64);
dtype!(usize, 0usize, 1usize);
dtype!(isize, 0isize, 1isize);
dtype!(f32, 0f32, 1f32);
dtype!(f64, 0f64, 1f64);

#[cfg(feature = "half")]
impl DType for f16 {
    const ZERO: f16 = f16::from_f64_const(0.0);
    const ONE: f16 = f16::from_f64_const(1.0);
    const NAME: &'static str = "f16";
}

#[cfg(feature = "bfloat")]
impl DType for bf16 {
    const ZERO: bf16 = bf16::from_f64_const(0.0);
    const ONE: bf16 = bf16::from_f64_const(1.0);
    const NAME: &'static str = "bf16";
}
