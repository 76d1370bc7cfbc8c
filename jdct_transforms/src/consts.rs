// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Fixed-point constants of the LL&M butterfly.
//!
//! Every constant is `FIX(x) = round(x * 2^bits)`, where `x` is a combination of
//! `sqrt(2) * cos(k * pi / 16)` terms; the comments name the combination.

/// Number of fractional bits of [`SCALED_COSINES`].
pub const COSINE_BITS: u32 = 13;

/// `round(cos(k * pi / 16) * 2^13)` for `k = 0..8`.
pub const SCALED_COSINES: [i32; 8] = [8192, 8035, 7568, 6811, 5793, 4551, 3135, 1598];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConstants {
    pub bits: u32,
    /// sqrt(2) * (-c1 + c3 + c5 - c7)
    pub fix_0_298631336: i32,
    /// sqrt(2) * (c3 - c5)
    pub fix_0_390180644: i32,
    /// sqrt(2) * c6
    pub fix_0_541196100: i32,
    /// sqrt(2) * (c2 - c6)
    pub fix_0_765366865: i32,
    /// sqrt(2) * (c3 - c7)
    pub fix_0_899976223: i32,
    /// sqrt(2) * c3
    pub fix_1_175875602: i32,
    /// sqrt(2) * (c1 + c3 - c5 - c7)
    pub fix_1_501321110: i32,
    /// sqrt(2) * (c2 + c6)
    pub fix_1_847759065: i32,
    /// sqrt(2) * (c3 + c5)
    pub fix_1_961570560: i32,
    /// sqrt(2) * (c1 + c3 - c5 + c7)
    pub fix_2_053119869: i32,
    /// sqrt(2) * (c1 + c3)
    pub fix_2_562915447: i32,
    /// sqrt(2) * (c1 + c3 + c5 - c7)
    pub fix_3_072711026: i32,
}

pub const HIGH_CONSTANTS: FixedConstants = FixedConstants {
    bits: 13,
    fix_0_298631336: 2446,
    fix_0_390180644: 3196,
    fix_0_541196100: 4433,
    fix_0_765366865: 6270,
    fix_0_899976223: 7373,
    fix_1_175875602: 9633,
    fix_1_501321110: 12299,
    fix_1_847759065: 15137,
    fix_1_961570560: 16069,
    fix_2_053119869: 16819,
    fix_2_562915447: 20995,
    fix_3_072711026: 25172,
};

pub const MEDIUM_CONSTANTS: FixedConstants = FixedConstants {
    bits: 11,
    fix_0_298631336: 612,
    fix_0_390180644: 799,
    fix_0_541196100: 1108,
    fix_0_765366865: 1567,
    fix_0_899976223: 1843,
    fix_1_175875602: 2408,
    fix_1_501321110: 3075,
    fix_1_847759065: 3784,
    fix_1_961570560: 4017,
    fix_2_053119869: 4205,
    fix_2_562915447: 5249,
    fix_3_072711026: 6293,
};

pub const FAST_CONSTANTS: FixedConstants = FixedConstants {
    bits: 8,
    fix_0_298631336: 76,
    fix_0_390180644: 100,
    fix_0_541196100: 139,
    fix_0_765366865: 196,
    fix_0_899976223: 230,
    fix_1_175875602: 301,
    fix_1_501321110: 384,
    fix_1_847759065: 473,
    fix_1_961570560: 502,
    fix_2_053119869: 526,
    fix_2_562915447: 656,
    fix_3_072711026: 787,
};
