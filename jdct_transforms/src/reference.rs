// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Floating point DCT with the same scaling as the integer kernels. Slow; used to measure
//! the accuracy of the fixed-point transforms.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::{BLOCK_DIM, BLOCK_SIZE};

fn basis() -> [[f64; BLOCK_DIM]; BLOCK_DIM] {
    std::array::from_fn(|u| {
        let scale = if u == 0 { FRAC_1_SQRT_2 } else { 1.0 };
        std::array::from_fn(|x| scale * ((2 * x + 1) as f64 * u as f64 * PI / 16.0).cos())
    })
}

/// Forward DCT of level-shifted samples, scaled by 8 with respect to the orthonormal
/// transform.
pub fn forward_dct_8x8_f64(samples: &[f64; BLOCK_SIZE]) -> [f64; BLOCK_SIZE] {
    let b = basis();
    let mut out = [0.0; BLOCK_SIZE];
    for v in 0..BLOCK_DIM {
        for u in 0..BLOCK_DIM {
            let mut sum = 0.0;
            for y in 0..BLOCK_DIM {
                for x in 0..BLOCK_DIM {
                    sum += samples[y * BLOCK_DIM + x] * b[v][y] * b[u][x];
                }
            }
            // 1/4 for the orthonormal transform, times 8.
            out[v * BLOCK_DIM + u] = 2.0 * sum;
        }
    }
    out
}

/// Inverse of [`forward_dct_8x8_f64`].
pub fn inverse_dct_8x8_f64(coeffs: &[f64; BLOCK_SIZE]) -> [f64; BLOCK_SIZE] {
    let b = basis();
    let mut out = [0.0; BLOCK_SIZE];
    for y in 0..BLOCK_DIM {
        for x in 0..BLOCK_DIM {
            let mut sum = 0.0;
            for v in 0..BLOCK_DIM {
                for u in 0..BLOCK_DIM {
                    sum += coeffs[v * BLOCK_DIM + u] * b[v][y] * b[u][x];
                }
            }
            out[y * BLOCK_DIM + x] = sum / 32.0;
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn flat_block() {
        let coeffs = forward_dct_8x8_f64(&[100.0; BLOCK_SIZE]);
        assert!((coeffs[0] - 6400.0).abs() < 1e-9);
        assert!(coeffs[1..].iter().all(|c| c.abs() < 1e-9));
    }

    #[test]
    fn inverse_undoes_forward() {
        let samples = std::array::from_fn(|i| ((i * 53) % 256) as f64 - 128.0);
        let back = inverse_dct_8x8_f64(&forward_dct_8x8_f64(&samples));
        for i in 0..BLOCK_SIZE {
            assert!((back[i] - samples[i]).abs() < 1e-9, "{i}");
        }
    }
}
