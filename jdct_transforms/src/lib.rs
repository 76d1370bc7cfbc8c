// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Integer 8x8 DCT kernels used by the JPEG block pipeline.
//!
//! Both directions use the Loeffler-Ligtenberg-Moschytz butterfly with
//! fixed-point cosine constants. Forward output is scaled by 8 with respect
//! to the orthonormal DCT, so a flat block of level-shifted value `v` has a
//! DC coefficient of `64 * v`; the inverse consumes the same scaling.

#![deny(unsafe_code)]

pub mod consts;
pub mod fdct;
pub mod idct;
pub mod modes;
pub mod reference;

pub use consts::*;
pub use fdct::*;
pub use idct::*;
pub use modes::*;

/// Side of a block.
pub const BLOCK_DIM: usize = 8;
/// Number of samples or coefficients in a block.
pub const BLOCK_SIZE: usize = BLOCK_DIM * BLOCK_DIM;

/// Largest coefficient magnitude a valid 8-bit block produces.
pub const COEFFICIENT_LIMIT: i32 = 8192;

/// `log2` of the DC gain: a flat block of value `v` has `DC = v << DC_SHIFT`.
pub const DC_SHIFT: u32 = 6;

#[cfg(test)]
mod tests;
