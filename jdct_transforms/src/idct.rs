// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::num::Wrapping;

use crate::consts::FixedConstants;
use crate::modes::{round_shift, Precision, Rounding};
use crate::{BLOCK_DIM, BLOCK_SIZE, DC_SHIFT};

type W = Wrapping<i32>;

/// One 8-point inverse DCT; the mirror image of the forward butterfly. Outputs carry
/// `k.bits` fractional bits.
#[inline(always)]
fn idct_1d(x: [W; BLOCK_DIM], k: &FixedConstants) -> [W; BLOCK_DIM] {
    let bits = k.bits as usize;
    let fix = |c: i32| Wrapping(c);

    // Even part: reverse the even half of the forward transform.
    let z2 = x[2];
    let z3 = x[6];
    let z1 = (z2 + z3) * fix(k.fix_0_541196100);
    let tmp2 = z1 - z3 * fix(k.fix_1_847759065);
    let tmp3 = z1 + z2 * fix(k.fix_0_765366865);

    let tmp0 = (x[0] + x[4]) << bits;
    let tmp1 = (x[0] - x[4]) << bits;

    let tmp10 = tmp0 + tmp3;
    let tmp13 = tmp0 - tmp3;
    let tmp11 = tmp1 + tmp2;
    let tmp12 = tmp1 - tmp2;

    // Odd part.
    let tmp0 = x[7];
    let tmp1 = x[5];
    let tmp2 = x[3];
    let tmp3 = x[1];

    let z1 = tmp0 + tmp3;
    let z2 = tmp1 + tmp2;
    let z3 = tmp0 + tmp2;
    let z4 = tmp1 + tmp3;
    let z5 = (z3 + z4) * fix(k.fix_1_175875602);

    let tmp0 = tmp0 * fix(k.fix_0_298631336);
    let tmp1 = tmp1 * fix(k.fix_2_053119869);
    let tmp2 = tmp2 * fix(k.fix_3_072711026);
    let tmp3 = tmp3 * fix(k.fix_1_501321110);
    let z1 = z1 * fix(-k.fix_0_899976223);
    let z2 = z2 * fix(-k.fix_2_562915447);
    let z3 = z3 * fix(-k.fix_1_961570560) + z5;
    let z4 = z4 * fix(-k.fix_0_390180644) + z5;

    let tmp0 = tmp0 + z1 + z3;
    let tmp1 = tmp1 + z2 + z4;
    let tmp2 = tmp2 + z2 + z3;
    let tmp3 = tmp3 + z1 + z4;

    [
        tmp10 + tmp3,
        tmp11 + tmp2,
        tmp12 + tmp1,
        tmp13 + tmp0,
        tmp13 - tmp0,
        tmp12 - tmp1,
        tmp11 - tmp2,
        tmp10 - tmp3,
    ]
}

/// Returns true if every AC coefficient is zero.
#[inline]
pub fn is_dc_only(coeffs: &[i16; BLOCK_SIZE]) -> bool {
    coeffs[1..].iter().all(|&c| c == 0)
}

/// Inverse DCT of one block of natural-order coefficients, as produced by
/// [`crate::forward_dct_8x8`]. Returns level-shifted samples, not clamped: callers add
/// the level shift back and saturate to the sample range.
///
/// Arithmetic is 32-bit and wraps instead of panicking on coefficients that no 8-bit
/// block can produce; the output is meaningless in that case but the call is total.
pub fn inverse_dct_8x8(
    coeffs: &[i16; BLOCK_SIZE],
    precision: Precision,
    rounding: Rounding,
) -> [i32; BLOCK_SIZE] {
    let k = precision.constants();
    let pass1_bits = precision.inverse_pass1_bits();
    let mut workspace = [0i32; BLOCK_SIZE];

    // Pass 1: columns.
    for col in 0..BLOCK_DIM {
        let column: [i32; BLOCK_DIM] =
            std::array::from_fn(|i| coeffs[i * BLOCK_DIM + col] as i32);
        if column[1..].iter().all(|&c| c == 0) {
            // Flat column: the butterfly would only spread the DC term.
            let dc = column[0] << pass1_bits;
            for i in 0..BLOCK_DIM {
                workspace[i * BLOCK_DIM + col] = dc;
            }
            continue;
        }
        let out = idct_1d(column.map(Wrapping), k);
        for i in 0..BLOCK_DIM {
            workspace[i * BLOCK_DIM + col] = round_shift(out[i].0, k.bits - pass1_bits);
        }
    }

    // Pass 2: rows. The extra DC_SHIFT undoes the 8x gain of both 1D passes together
    // with the 8x scaling of the coefficients.
    let shift = k.bits + pass1_bits + DC_SHIFT;
    let mut samples = [0i32; BLOCK_SIZE];
    for row in 0..BLOCK_DIM {
        let base = row * BLOCK_DIM;
        let input = std::array::from_fn(|i| Wrapping(workspace[base + i]));
        let out = idct_1d(input, k);
        for i in 0..BLOCK_DIM {
            samples[base + i] = rounding.descale(out[i].0, shift);
        }
    }
    samples
}

/// Level-shifted sample value of every position of a block whose only non-zero
/// coefficient is `dc`. Equal to what [`inverse_dct_8x8`] computes for such a block, in
/// every precision and rounding mode.
#[inline]
pub fn inverse_dc_only(dc: i16, rounding: Rounding) -> i32 {
    rounding.descale(dc as i32, DC_SHIFT)
}
