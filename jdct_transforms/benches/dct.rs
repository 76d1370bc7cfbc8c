// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jdct_transforms::*;
use std::hint::black_box;

fn test_block() -> [i16; BLOCK_SIZE] {
    std::array::from_fn(|i| ((i * 37 + 11) % 256) as i16 - 128)
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    let samples = test_block();
    for precision in Precision::ALL {
        let id = BenchmarkId::new("8x8", precision);
        group.bench_function(id, |b| {
            b.iter(|| forward_dct_8x8(black_box(&samples), precision, Rounding::Nearest))
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let coeffs = forward_dct_8x8(&test_block(), Precision::High, Rounding::Nearest);
    for precision in Precision::ALL {
        let id = BenchmarkId::new("8x8", precision);
        group.bench_function(id, |b| {
            b.iter(|| inverse_dct_8x8(black_box(&coeffs), precision, Rounding::Nearest))
        });
    }
    group.bench_function("dc_only", |b| {
        b.iter(|| inverse_dc_only(black_box(coeffs[0]), Rounding::Nearest))
    });
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
