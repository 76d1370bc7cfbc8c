// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Offset between unsigned 8-bit samples and centered samples.
pub const LEVEL_SHIFT: i16 = 128;

#[inline]
pub fn shift_sample(pixel: u8) -> i16 {
    pixel as i16 - LEVEL_SHIFT
}

/// Adds the level shift back, saturating to `0..=255`.
#[inline]
pub fn unshift_sample(centered: i32) -> u8 {
    centered
        .saturating_add(LEVEL_SHIFT as i32)
        .clamp(0, u8::MAX as i32) as u8
}

pub fn shift_block(pixels: &[u8; BLOCK_SIZE]) -> [i16; BLOCK_SIZE] {
    pixels.map(shift_sample)
}

pub fn unshift_block(centered: &[i32; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    centered.map(unshift_sample)
}

pub(crate) fn check_block_len(len: usize) -> Result<()> {
    if len != BLOCK_SIZE {
        return Err(Error::InvalidBlockLength {
            expected: BLOCK_SIZE,
            actual: len,
        });
    }
    Ok(())
}

/// Level shifts a block of exactly 64 pixels.
pub fn shift(pixels: &[u8]) -> Result<[i16; BLOCK_SIZE]> {
    check_block_len(pixels.len())?;
    Ok(std::array::from_fn(|i| shift_sample(pixels[i])))
}

/// Undoes [`shift`] on a block of exactly 64 centered samples, saturating every sample to
/// the pixel range.
pub fn unshift(centered: &[i32]) -> Result<[u8; BLOCK_SIZE]> {
    check_block_len(centered.len())?;
    Ok(std::array::from_fn(|i| unshift_sample(centered[i])))
}
