use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fortarray_core::{Allocatable, Tensor, B3, E3};

const D2: usize = 20;
const D1: usize = 3;

fn bench_nested_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_vec");
    for d3 in [1usize << 6, 1 << 10, 8 << 10] {
        let here = vec![vec![vec![1.0f64; D1]; D2]; d3];
        let mut out = vec![0.0f64; d3 * D2 * D1];
        group.bench_with_input(BenchmarkId::from_parameter(d3), &d3, |bencher, &d3| {
            bencher.iter(|| {
                let mut count = 0;
                for i3 in 0..d3 {
                    for i2 in 0..D2 {
                        for i1 in 0..D1 {
                            out[count] = here[i3][i2][i1];
                            count += 1;
                        }
                    }
                }
                black_box(&out);
            });
        });
    }
    group.finish();
}

fn bench_raw_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_slice");
    for d3 in [1usize << 6, 1 << 10, 8 << 10] {
        let here = vec![1.0f64; d3 * D2 * D1];
        let mut out = vec![0.0f64; d3 * D2 * D1];
        group.bench_with_input(BenchmarkId::from_parameter(d3), &d3, |bencher, &d3| {
            bencher.iter(|| {
                let mut count = 0;
                for i3 in 0..d3 {
                    for i2 in 0..D2 {
                        for i1 in 0..D1 {
                            out[count] = here[(i3 * D2 + i2) * D1 + i1];
                            count += 1;
                        }
                    }
                }
                black_box(&out);
            });
        });
    }
    group.finish();
}

fn bench_allocatable_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocatable_views");
    for d3 in [1usize << 6, 1 << 10, 8 << 10] {
        let mut here = Allocatable::<f64, B3<1, 1, 1>>::new();
        here.reserve([d3 as i64, D2 as i64, D1 as i64]);
        here.fill(1.0);
        let mut out = vec![0.0f64; d3 * D2 * D1];
        group.bench_with_input(BenchmarkId::from_parameter(d3), &d3, |bencher, &d3| {
            bencher.iter(|| {
                let mut count = 0;
                for i3 in 0..d3 {
                    for i2 in 0..D2 {
                        for i1 in 0..D1 {
                            out[count] = here.at(i3).at(i2)[i1];
                            count += 1;
                        }
                    }
                }
                black_box(&out);
            });
        });
    }
    group.finish();
}

fn bench_allocatable_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocatable_bound");
    for d3 in [1usize << 6, 1 << 10, 8 << 10] {
        let mut here = Allocatable::<f64, B3<1, 1, 1>>::new();
        here.allocate([D1 as i64, D2 as i64, d3 as i64]);
        here.fill(1.0);
        let mut out = vec![0.0f64; d3 * D2 * D1];
        group.bench_with_input(BenchmarkId::from_parameter(d3), &d3, |bencher, &d3| {
            bencher.iter(|| {
                let mut count = 0;
                for i3 in 1..=d3 as i64 {
                    for i2 in 1..=D2 as i64 {
                        for i1 in 1..=D1 as i64 {
                            debug_assert_eq!(here.bound_index([i1, i2, i3]) as usize, count);
                            out[count] = *here.at_bound([i1, i2, i3]);
                            count += 1;
                        }
                    }
                }
                black_box(&out);
            });
        });
    }
    group.finish();
}

fn bench_fixed_sequential(c: &mut Criterion) {
    const D3: usize = 1 << 10;
    let here = Box::new(Tensor::<f64, E3<D3, D2, D1>>::ones());
    let mut out = vec![0.0f64; D3 * D2 * D1];
    c.bench_function("fixed_sequential_1024", |bencher| {
        bencher.iter(|| {
            let mut count = 0;
            for i3 in 0..D3 as i64 {
                for i2 in 0..D2 as i64 {
                    for i1 in 0..D1 as i64 {
                        debug_assert_eq!(here.sequential_index([i3, i2, i1]) as usize, count);
                        out[count] = *here.at_sequential([i3, i2, i1]);
                        count += 1;
                    }
                }
            }
            black_box(&out);
        });
    });
}

criterion_group!(
    benches,
    bench_nested_vec,
    bench_raw_slice,
    bench_allocatable_views,
    bench_allocatable_bound,
    bench_fixed_sequential
);
criterion_main!(benches);
