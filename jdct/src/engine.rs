// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Checked entry points around the fixed-point kernels.
//!
//! Block shapes are validated before any work is done. Coefficient ranges are not: the
//! kernels are total, and [`DctEngine::validate_coefficients`] reports values a valid
//! 8-bit encoder cannot produce.

use jdct_transforms::{
    COEFFICIENT_LIMIT, forward_dct_8x8, inverse_dc_only, inverse_dct_8x8, is_dc_only,
};

use crate::BLOCK_SIZE;
use crate::error::{Error, Result};
use crate::level_shift::{LEVEL_SHIFT, check_block_len, shift, unshift_block, unshift_sample};
use crate::options::TransformOptions;
use crate::util::TryWithCapacity;
use crate::util::tracing_wrappers::*;

/// 64 unsigned 8-bit samples in row-major order.
pub type PixelBlock = [u8; BLOCK_SIZE];
/// 64 level-shifted samples in row-major order.
pub type CenteredBlock = [i16; BLOCK_SIZE];
/// 64 DCT coefficients in natural order, scaled by 8.
pub type CoefficientBlock = [i16; BLOCK_SIZE];

fn as_block(values: &[i16]) -> Result<&CoefficientBlock> {
    values.try_into().map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_SIZE,
        actual: values.len(),
    })
}

/// Checks that `centered` is a block of level-shifted 8-bit samples.
pub fn validate_centered(centered: &[i16]) -> Result<()> {
    check_block_len(centered.len())?;
    let range = -LEVEL_SHIFT..LEVEL_SHIFT;
    match centered.iter().position(|c| !range.contains(c)) {
        Some(index) => Err(Error::CenteredSampleOutOfRange {
            index,
            value: centered[index],
        }),
        None => Ok(()),
    }
}

/// Checks that every coefficient lies within `±COEFFICIENT_LIMIT`.
pub fn validate_coefficients(coeffs: &[i16]) -> Result<()> {
    check_block_len(coeffs.len())?;
    match coeffs
        .iter()
        .position(|&c| (c as i32).abs() > COEFFICIENT_LIMIT)
    {
        Some(index) => {
            let value = coeffs[index];
            warn!(index, value, "coefficient out of range");
            Err(Error::CoefficientOutOfRange { index, value })
        }
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DctEngine {
    options: TransformOptions,
}

impl DctEngine {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Forward DCT of a block of level-shifted samples. Samples outside `-128..=127` are
    /// rejected, not clamped.
    pub fn forward_centered(&self, centered: &[i16]) -> Result<CoefficientBlock> {
        validate_centered(centered)?;
        Ok(self.forward_block(as_block(centered)?))
    }

    /// Forward DCT of a block of 8-bit pixels; the level shift is applied internally.
    pub fn forward_pixels(&self, pixels: &[u8]) -> Result<CoefficientBlock> {
        Ok(self.forward_block(&shift(pixels)?))
    }

    #[inline]
    pub(crate) fn forward_block(&self, centered: &CenteredBlock) -> CoefficientBlock {
        forward_dct_8x8(centered, self.options.precision, self.options.rounding)
    }

    /// Reconstructs the pixels of one block, taking the DC-only shortcut when every AC
    /// coefficient is zero.
    #[inline]
    pub(crate) fn inverse_block(&self, coeffs: &CoefficientBlock) -> PixelBlock {
        if is_dc_only(coeffs) {
            return [self.inverse_dc_only(coeffs[0]); BLOCK_SIZE];
        }
        let centered = inverse_dct_8x8(coeffs, self.options.precision, self.options.rounding);
        unshift_block(&centered)
    }

    /// Pixel value of every sample of a block whose only non-zero coefficient is `dc`.
    pub fn inverse_dc_only(&self, dc: i16) -> u8 {
        unshift_sample(inverse_dc_only(dc, self.options.rounding))
    }

    /// Inverse DCT into a new pixel block; `coeffs` is left untouched.
    pub fn inverse(&self, coeffs: &[i16]) -> Result<PixelBlock> {
        Ok(self.inverse_block(as_block(coeffs)?))
    }

    /// Inverse DCT that overwrites the coefficients with the reconstructed pixel values
    /// and hands the same buffer back.
    pub fn inverse_in_place<'a>(&self, block: &'a mut [i16]) -> Result<&'a mut [i16]> {
        let pixels = self.inverse(block)?;
        for (dst, &p) in block.iter_mut().zip(pixels.iter()) {
            *dst = p as i16;
        }
        Ok(block)
    }

    /// [`Self::inverse`] over a list of blocks. Every block is checked before any is
    /// transformed.
    pub fn inverse_batch<B: AsRef<[i16]>>(&self, blocks: &[B]) -> Result<Vec<PixelBlock>> {
        for block in blocks {
            check_block_len(block.as_ref().len())?;
        }
        let mut out = Vec::try_with_capacity(blocks.len())?;
        for block in blocks {
            out.push(self.inverse(block.as_ref())?);
        }
        Ok(out)
    }

    /// [`Self::inverse_in_place`] over a list of blocks. Every block is checked before any
    /// is modified.
    pub fn inverse_batch_in_place<'a, B: AsMut<[i16]>>(
        &self,
        blocks: &'a mut [B],
    ) -> Result<&'a mut [B]> {
        for block in blocks.iter_mut() {
            check_block_len(block.as_mut().len())?;
        }
        for block in blocks.iter_mut() {
            self.inverse_in_place(block.as_mut())?;
        }
        Ok(blocks)
    }
}
