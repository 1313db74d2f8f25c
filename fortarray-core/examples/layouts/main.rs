use std::str::FromStr;

use fortarray_core::{Allocatable, Dimension, Ext, Span, Tensor, B2, E2, R2};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let level = std::env::var("RUST_LOG").unwrap_or("debug".to_string());
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from_str(&level).unwrap_or(LevelFilter::DEBUG))
        .init();

    // int c[2][3]: the last axis is contiguous.
    let c = Tensor::<i32, E2<2, 3>>::from_fn(|i| i as i32);
    dbg!(c.strides(), c.array());

    // integer :: f(-1:0, 3): the first axis is contiguous.
    let f = Dimension::<i32, R2<Span<-1, 2>, Ext<3>>>::from_fn(|i| i as i32);
    dbg!(f.strides(), f.range(0), f.range(1));
    for j in f.lbound(1)..=f.ubound(1) {
        for i in f.lbound(0)..=f.ubound(0) {
            println!("f({i}, {j}) = {}", f.at_bound([i, j]));
        }
    }

    // real(8), allocatable :: a(:, :); allocate(a(3, 2))
    let mut a = Allocatable::<f64, B2<1, 1>>::new();
    a.allocate([3, 2]);
    for (k, x) in a.data_mut().iter_mut().enumerate() {
        *x = k as f64 / 2.0;
    }
    println!("a.shape() = {:?}, a(3, 2) = {}", a.shape(), a.at_bound([3, 2]));
    println!("a[1][2] = {}", a.at(1)[2]);
    a.deallocate();
}
