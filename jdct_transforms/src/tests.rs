// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.
use super::*;
use crate::reference::{forward_dct_8x8_f64, inverse_dct_8x8_f64};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use test_log::test;

fn random_samples(rng: &mut ChaCha12Rng) -> [i16; BLOCK_SIZE] {
    std::array::from_fn(|_| rng.random_range(-128..=127))
}

/// Coefficients of a plausible image block: large low frequencies, sparse high ones.
fn random_coefficients(rng: &mut ChaCha12Rng) -> [i16; BLOCK_SIZE] {
    std::array::from_fn(|i| {
        let (row, col) = (i / BLOCK_DIM, i % BLOCK_DIM);
        let limit = 1024 >> (row + col).min(6);
        if rng.random_bool(0.3) {
            0
        } else {
            rng.random_range(-limit..=limit)
        }
    })
}

fn check_close(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "{a} vs {b} differ by more than {tolerance}"
    );
}

macro_rules! test_precision {
    ($name:ident, $precision:expr, $forward_tol:expr, $inverse_tol:expr) => {
        paste::paste! {
            #[test]
            fn [<forward_ $name _matches_reference>]() {
                let mut rng = ChaCha12Rng::seed_from_u64(0);
                for _ in 0..200 {
                    let samples = random_samples(&mut rng);
                    let coeffs = forward_dct_8x8(&samples, $precision, Rounding::Nearest);
                    let reference = forward_dct_8x8_f64(&samples.map(|s| s as f64));
                    for i in 0..BLOCK_SIZE {
                        check_close(coeffs[i] as f64, reference[i], $forward_tol);
                    }
                }
            }

            #[test]
            fn [<inverse_ $name _matches_reference>]() {
                let mut rng = ChaCha12Rng::seed_from_u64(1);
                for _ in 0..200 {
                    let coeffs = random_coefficients(&mut rng);
                    let samples = inverse_dct_8x8(&coeffs, $precision, Rounding::Nearest);
                    let reference = inverse_dct_8x8_f64(&coeffs.map(|c| c as f64));
                    for i in 0..BLOCK_SIZE {
                        check_close(samples[i] as f64, reference[i], $inverse_tol);
                    }
                }
            }

            #[test]
            fn [<roundtrip_ $name>]() {
                let mut rng = ChaCha12Rng::seed_from_u64(2);
                for _ in 0..500 {
                    let samples = random_samples(&mut rng);
                    let coeffs = forward_dct_8x8(&samples, $precision, Rounding::Nearest);
                    assert!(coeffs.iter().all(|&c| (c as i32).abs() <= COEFFICIENT_LIMIT));
                    let back = inverse_dct_8x8(&coeffs, $precision, Rounding::Nearest);
                    for i in 0..BLOCK_SIZE {
                        assert!((back[i] - samples[i] as i32).abs() <= 1, "{i}");
                    }
                }
            }
        }
    };
}

test_precision!(high, Precision::High, 2.0, 1.5);
test_precision!(medium, Precision::Medium, 4.0, 1.5);
test_precision!(fast, Precision::Fast, 10.0, 2.0);

#[test]
fn significant_coefficients_keep_their_sign() {
    let mut rng = ChaCha12Rng::seed_from_u64(3);
    for _ in 0..1000 {
        let samples = random_samples(&mut rng);
        let high = forward_dct_8x8(&samples, Precision::High, Rounding::Nearest);
        for precision in [Precision::Medium, Precision::Fast] {
            let other = forward_dct_8x8(&samples, precision, Rounding::Nearest);
            for i in 0..BLOCK_SIZE {
                if high[i].abs() > 16 {
                    assert_eq!(high[i].signum(), other[i].signum(), "{precision} at {i}");
                }
            }
        }
    }
}

#[test]
fn rounding_modes_stay_within_one() {
    let mut rng = ChaCha12Rng::seed_from_u64(4);
    for _ in 0..100 {
        let coeffs = random_coefficients(&mut rng);
        let floor = inverse_dct_8x8(&coeffs, Precision::High, Rounding::Floor);
        let ceil = inverse_dct_8x8(&coeffs, Precision::High, Rounding::Ceiling);
        for i in 0..BLOCK_SIZE {
            assert!(floor[i] <= ceil[i] && ceil[i] - floor[i] <= 1);
        }
    }
}

/// Blocks of extreme samples that follow the sign pattern of one basis function, the
/// inputs that maximize the magnitude of that coefficient.
fn basis_sign_blocks() -> impl Iterator<Item = [i16; BLOCK_SIZE]> {
    let cos = |k: usize, n: usize| {
        ((2 * n + 1) as f64 * k as f64 * std::f64::consts::PI / 16.0).cos()
    };
    (0..BLOCK_SIZE).flat_map(move |basis| {
        let (v, u) = (basis / BLOCK_DIM, basis % BLOCK_DIM);
        [1.0, -1.0].map(|polarity| {
            std::array::from_fn::<i16, BLOCK_SIZE, _>(|i| {
                let (y, x) = (i / BLOCK_DIM, i % BLOCK_DIM);
                if polarity * cos(u, x) * cos(v, y) >= 0.0 {
                    127
                } else {
                    -128
                }
            })
        })
    })
}

#[test]
fn extreme_blocks_stay_within_coefficient_limit() {
    for samples in basis_sign_blocks() {
        for precision in Precision::ALL {
            for rounding in Rounding::ALL {
                let coeffs = forward_dct_8x8(&samples, precision, rounding);
                assert!(
                    coeffs.iter().all(|&c| (c as i32).abs() <= COEFFICIENT_LIMIT),
                    "{precision} {rounding}: {coeffs:?}"
                );
            }
            let coeffs = forward_dct_8x8(&samples, precision, Rounding::Nearest);
            let back = inverse_dct_8x8(&coeffs, precision, Rounding::Nearest);
            for i in 0..BLOCK_SIZE {
                assert!((back[i] - samples[i] as i32).abs() <= 1, "{precision} at {i}");
            }
        }
    }
}
