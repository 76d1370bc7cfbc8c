// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use jdct_transforms::{Precision, Rounding};

/// Number of zigzag positions counted as low frequency by the energy concentration metric.
pub const DEFAULT_LOW_FREQUENCY_COEFFICIENTS: usize = 10;

/// Options shared by every transform entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Fixed-point accuracy of the kernels.
    /// Default: [`Precision::High`]
    pub precision: Precision,
    /// Rounding applied to the final descale of both directions.
    /// Default: [`Rounding::Nearest`]
    pub rounding: Rounding,
}

impl TransformOptions {
    pub fn new(precision: Precision, rounding: Rounding) -> Self {
        Self {
            precision,
            rounding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub transform: TransformOptions,
    /// How many zigzag positions, starting at DC, count as low frequency.
    /// Default: [`DEFAULT_LOW_FREQUENCY_COEFFICIENTS`]
    pub low_frequency_coefficients: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            transform: TransformOptions::default(),
            low_frequency_coefficients: DEFAULT_LOW_FREQUENCY_COEFFICIENTS,
        }
    }
}

impl From<TransformOptions> for BatchOptions {
    fn from(transform: TransformOptions) -> Self {
        Self {
            transform,
            ..Default::default()
        }
    }
}
