// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Transforms of many blocks at once, with statistics about the resulting coefficients.

use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::{CoefficientBlock, DctEngine, PixelBlock};
use crate::error::{Error, Result};
use crate::level_shift::check_block_len;
use crate::options::BatchOptions;
use crate::util::TryWithCapacity;
use crate::util::tracing_wrappers::*;
use crate::zigzag::ZIGZAG_TO_NATURAL;
use crate::{BLOCK_DIM, BLOCK_SIZE};

/// Fraction of the energy of `coeffs` held by the first `low_frequency` zigzag positions.
/// An all-zero block is fully concentrated.
pub fn energy_concentration(coeffs: &CoefficientBlock, low_frequency: usize) -> f64 {
    let energy = |c: i16| (c as f64) * (c as f64);
    let total: f64 = coeffs.iter().map(|&c| energy(c)).sum();
    if total == 0.0 {
        return 1.0;
    }
    let low: f64 = ZIGZAG_TO_NATURAL
        .iter()
        .take(low_frequency)
        .map(|&i| energy(coeffs[i]))
        .sum();
    low / total
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchStats {
    pub blocks: usize,
    /// Number of coefficients that are exactly zero.
    pub zero_coefficients: usize,
    pub average_dc: f64,
    pub average_energy_concentration: f64,
    pub elapsed: Duration,
}

impl BatchStats {
    fn compute(coeffs: &[CoefficientBlock], low_frequency: usize, elapsed: Duration) -> Self {
        if coeffs.is_empty() {
            return Self {
                elapsed,
                ..Default::default()
            };
        }
        let blocks = coeffs.len();
        let zero_coefficients = coeffs
            .iter()
            .map(|b| b.iter().filter(|&&c| c == 0).count())
            .sum();
        let dc_sum: f64 = coeffs.iter().map(|b| b[0] as f64).sum();
        let energy_sum: f64 = coeffs
            .iter()
            .map(|b| energy_concentration(b, low_frequency))
            .sum();
        Self {
            blocks,
            zero_coefficients,
            average_dc: dc_sum / blocks as f64,
            average_energy_concentration: energy_sum / blocks as f64,
            elapsed,
        }
    }

    /// Fraction of coefficients that are zero; 0 for an empty batch.
    pub fn sparsity(&self) -> f64 {
        if self.blocks == 0 {
            return 0.0;
        }
        self.zero_coefficients as f64 / (self.blocks * BLOCK_SIZE) as f64
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blocks, {:.1}% zero coefficients, average DC {:.2}, energy concentration {:.4}, {:?}",
            self.blocks,
            100.0 * self.sparsity(),
            self.average_dc,
            self.average_energy_concentration,
            self.elapsed
        )
    }
}

#[derive(Debug, Clone)]
pub struct ForwardBatch {
    pub coefficients: Vec<CoefficientBlock>,
    pub stats: BatchStats,
}

#[derive(Debug, Clone)]
pub struct InverseBatch {
    pub pixels: Vec<PixelBlock>,
    /// Statistics of the input coefficients.
    pub stats: BatchStats,
}

/// Applies `f` to every block, in parallel when the `parallel` feature is enabled. Output
/// order matches input order.
fn map_blocks<B, T, F>(blocks: &[B], f: F) -> Result<Vec<T>>
where
    B: Sync,
    T: Send,
    F: Fn(&B) -> Result<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let result: Result<Vec<T>> = blocks.par_iter().map(f).collect();
    #[cfg(not(feature = "parallel"))]
    let result: Result<Vec<T>> = blocks.iter().map(f).collect();
    result
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchProcessor {
    engine: DctEngine,
    options: BatchOptions,
}

impl BatchProcessor {
    pub fn new(options: BatchOptions) -> Self {
        Self {
            engine: DctEngine::new(options.transform),
            options,
        }
    }

    pub fn engine(&self) -> &DctEngine {
        &self.engine
    }

    /// Forward transforms pixel blocks. All blocks are checked before any is transformed.
    pub fn forward<B: AsRef<[u8]> + Sync>(&self, blocks: &[B]) -> Result<ForwardBatch> {
        for block in blocks {
            check_block_len(block.as_ref().len())?;
        }
        let start = Instant::now();
        let coefficients = map_blocks(blocks, |b| self.engine.forward_pixels(b.as_ref()))?;
        let stats = BatchStats::compute(
            &coefficients,
            self.options.low_frequency_coefficients,
            start.elapsed(),
        );
        debug!(%stats, "forward batch");
        Ok(ForwardBatch {
            coefficients,
            stats,
        })
    }

    /// Inverse transforms coefficient blocks. All blocks are checked before any is
    /// transformed.
    pub fn inverse<B: AsRef<[i16]> + Sync>(&self, blocks: &[B]) -> Result<InverseBatch> {
        let mut coefficients = Vec::try_with_capacity(blocks.len())?;
        for block in blocks {
            let block: CoefficientBlock =
                block
                    .as_ref()
                    .try_into()
                    .map_err(|_| Error::InvalidBlockLength {
                        expected: BLOCK_SIZE,
                        actual: block.as_ref().len(),
                    })?;
            coefficients.push(block);
        }
        let start = Instant::now();
        let pixels = map_blocks(&coefficients, |b| Ok(self.engine.inverse_block(b)))?;
        let stats = BatchStats::compute(
            &coefficients,
            self.options.low_frequency_coefficients,
            start.elapsed(),
        );
        debug!(%stats, "inverse batch");
        Ok(InverseBatch { pixels, stats })
    }

    /// Splits a row-major 8-bit plane into blocks and forward transforms them.
    pub fn forward_plane(&self, plane: &[u8], width: usize, height: usize) -> Result<ForwardBatch> {
        let blocks = tile_plane(plane, width, height)?;
        self.forward(&blocks)
    }
}

/// Number of blocks across and down a plane.
pub fn block_grid(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(BLOCK_DIM), height.div_ceil(BLOCK_DIM))
}

fn check_plane_size(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidPlaneSize(width, height));
    }
    width.checked_mul(height).ok_or(Error::ArithmeticOverflow)
}

/// Splits a row-major plane into 8x8 blocks in row-major block order. Partial blocks at
/// the right and bottom edges repeat the last column and row.
pub fn tile_plane(plane: &[u8], width: usize, height: usize) -> Result<Vec<PixelBlock>> {
    let expected = check_plane_size(width, height)?;
    if plane.len() != expected {
        return Err(Error::PlaneLengthMismatch {
            width,
            height,
            expected,
            actual: plane.len(),
        });
    }
    let (blocks_x, blocks_y) = block_grid(width, height);
    let mut blocks = Vec::try_with_capacity(blocks_x * blocks_y)?;
    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            blocks.push(std::array::from_fn(|i| {
                let y = (by * BLOCK_DIM + i / BLOCK_DIM).min(height - 1);
                let x = (bx * BLOCK_DIM + i % BLOCK_DIM).min(width - 1);
                plane[y * width + x]
            }));
        }
    }
    Ok(blocks)
}

/// Inverse of [`tile_plane`]: places blocks back into a plane, dropping the padding.
pub fn assemble_plane(blocks: &[PixelBlock], width: usize, height: usize) -> Result<Vec<u8>> {
    let size = check_plane_size(width, height)?;
    let (blocks_x, blocks_y) = block_grid(width, height);
    if blocks.len() != blocks_x * blocks_y {
        return Err(Error::BlockCountMismatch {
            width,
            height,
            expected: blocks_x * blocks_y,
            actual: blocks.len(),
        });
    }
    let mut plane = Vec::try_with_capacity(size)?;
    plane.resize(size, 0u8);
    for (y, row) in plane.chunks_exact_mut(width).enumerate() {
        let (by, iy) = (y / BLOCK_DIM, y % BLOCK_DIM);
        for (x, sample) in row.iter_mut().enumerate() {
            let block = &blocks[by * blocks_x + x / BLOCK_DIM];
            *sample = block[iy * BLOCK_DIM + x % BLOCK_DIM];
        }
    }
    Ok(plane)
}
