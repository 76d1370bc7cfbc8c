// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::num::Wrapping;

use crate::consts::FixedConstants;
use crate::modes::{round_shift, Precision, Rounding};
use crate::{BLOCK_DIM, BLOCK_SIZE};

type W = Wrapping<i32>;

/// One 8-point forward DCT. All outputs carry `k.bits` fractional bits (the even outputs 0
/// and 4 are shifted up so that a single descale works for every output).
#[inline(always)]
fn fdct_1d(x: [W; BLOCK_DIM], k: &FixedConstants) -> [W; BLOCK_DIM] {
    let bits = k.bits as usize;
    let fix = |c: i32| Wrapping(c);

    let tmp0 = x[0] + x[7];
    let tmp7 = x[0] - x[7];
    let tmp1 = x[1] + x[6];
    let tmp6 = x[1] - x[6];
    let tmp2 = x[2] + x[5];
    let tmp5 = x[2] - x[5];
    let tmp3 = x[3] + x[4];
    let tmp4 = x[3] - x[4];

    // Even part.
    let tmp10 = tmp0 + tmp3;
    let tmp13 = tmp0 - tmp3;
    let tmp11 = tmp1 + tmp2;
    let tmp12 = tmp1 - tmp2;

    let mut out = [Wrapping(0); BLOCK_DIM];
    out[0] = (tmp10 + tmp11) << bits;
    out[4] = (tmp10 - tmp11) << bits;

    let z1 = (tmp12 + tmp13) * fix(k.fix_0_541196100);
    out[2] = z1 + tmp13 * fix(k.fix_0_765366865);
    out[6] = z1 - tmp12 * fix(k.fix_1_847759065);

    // Odd part.
    let z1 = tmp4 + tmp7;
    let z2 = tmp5 + tmp6;
    let z3 = tmp4 + tmp6;
    let z4 = tmp5 + tmp7;
    let z5 = (z3 + z4) * fix(k.fix_1_175875602);

    let tmp4 = tmp4 * fix(k.fix_0_298631336);
    let tmp5 = tmp5 * fix(k.fix_2_053119869);
    let tmp6 = tmp6 * fix(k.fix_3_072711026);
    let tmp7 = tmp7 * fix(k.fix_1_501321110);
    let z1 = z1 * fix(-k.fix_0_899976223);
    let z2 = z2 * fix(-k.fix_2_562915447);
    let z3 = z3 * fix(-k.fix_1_961570560) + z5;
    let z4 = z4 * fix(-k.fix_0_390180644) + z5;

    out[7] = tmp4 + z1 + z3;
    out[5] = tmp5 + z2 + z4;
    out[3] = tmp6 + z2 + z3;
    out[1] = tmp7 + z1 + z4;
    out
}

/// Forward DCT of one block of level-shifted samples (nominally `-128..=127`), in natural
/// order. Coefficients are scaled by 8 with respect to the orthonormal DCT; for 8-bit
/// input every coefficient lies within `±COEFFICIENT_LIMIT`.
///
/// Rows are transformed first, then columns; `rounding` applies to the final descale.
pub fn forward_dct_8x8(
    samples: &[i16; BLOCK_SIZE],
    precision: Precision,
    rounding: Rounding,
) -> [i16; BLOCK_SIZE] {
    let k = precision.constants();
    let pass1_bits = precision.forward_pass1_bits();
    let mut workspace = [0i32; BLOCK_SIZE];

    for row in 0..BLOCK_DIM {
        let base = row * BLOCK_DIM;
        let input = std::array::from_fn(|i| Wrapping(samples[base + i] as i32));
        let out = fdct_1d(input, k);
        for i in 0..BLOCK_DIM {
            workspace[base + i] = round_shift(out[i].0, k.bits - pass1_bits);
        }
    }

    let mut coeffs = [0i16; BLOCK_SIZE];
    for col in 0..BLOCK_DIM {
        let input = std::array::from_fn(|i| Wrapping(workspace[i * BLOCK_DIM + col]));
        let out = fdct_1d(input, k);
        for i in 0..BLOCK_DIM {
            let value = rounding.descale(out[i].0, k.bits + pass1_bits);
            coeffs[i * BLOCK_DIM + col] = value.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        }
    }
    coeffs
}
