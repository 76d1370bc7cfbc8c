// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! JPEG-style 8x8 block transform pipeline.
//!
//! Pixel blocks are level shifted, forward transformed with a fixed-point DCT, and
//! optionally quantized with tables decoded from a DQT segment; the inverse path
//! reverses each step. Zigzag serialization is always an explicit step: the engine works
//! in natural order.

#![deny(unsafe_code)]

pub mod batch;
pub mod engine;
pub mod error;
pub mod level_shift;
pub mod metrics;
pub mod options;
pub mod quant;
pub mod util;
pub mod zigzag;

pub use jdct_transforms::{
    BLOCK_DIM, BLOCK_SIZE, COEFFICIENT_LIMIT, ParseModeError, Precision, Rounding,
};

pub use batch::{
    BatchProcessor, BatchStats, ForwardBatch, InverseBatch, assemble_plane, tile_plane,
};
pub use engine::{CenteredBlock, CoefficientBlock, DctEngine, PixelBlock};
pub use error::{Error, Result};
pub use metrics::FidelityMetrics;
pub use options::{BatchOptions, TransformOptions};
pub use quant::{
    QualityEstimate, QuantPrecision, QuantReference, QuantTable, QuantTableSummary,
    decode_quant_tables, encode_quant_tables, find_table, summarize,
};
