// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Block and matrix shape errors.
    #[error("Invalid block length {actual}, expected {expected}")]
    InvalidBlockLength { expected: usize, actual: usize },
    #[error("Invalid matrix shape: {0} rows, expected 8")]
    InvalidMatrixRows(usize),
    #[error("Invalid matrix shape: row {row} has {len} columns, expected 8")]
    InvalidMatrixRow { row: usize, len: usize },
    #[error("Index {0} out of range 0..64")]
    IndexOutOfRange(usize),
    // Sample and coefficient validation.
    #[error("Centered sample {value} at index {index} is outside -128..=127")]
    CenteredSampleOutOfRange { index: usize, value: i16 },
    #[error("Coefficient {value} at index {index} exceeds the +-8192 range")]
    CoefficientOutOfRange { index: usize, value: i16 },
    // Quantization table segment errors.
    #[error("Empty quantization table segment")]
    EmptyQuantSegment,
    #[error("Quantization table {table} truncated: needs {needed} bytes, {available} available")]
    QuantTableTruncated {
        table: usize,
        needed: usize,
        available: usize,
    },
    #[error("Quantization table {table}: invalid precision {value}")]
    InvalidQuantPrecision { table: usize, value: u8 },
    #[error("Quantization table {table}: invalid table id {value}")]
    InvalidQuantTableId { table: usize, value: u8 },
    #[error("Quantization table {table}: zero value at zigzag index {index}")]
    ZeroQuantValue { table: usize, index: usize },
    #[error("Quantization table {table}: value {value} does not fit {bits}-bit precision")]
    QuantValueTooLarge { table: usize, value: u16, bits: u32 },
    #[error("Invalid quality {0}, expected 1..=100")]
    InvalidQuality(u32),
    // Measurement and plane errors.
    #[error("Length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Invalid plane size: {0}x{1}")]
    InvalidPlaneSize(usize, usize),
    #[error("Plane of {width}x{height} needs {expected} samples, got {actual}")]
    PlaneLengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Plane of {width}x{height} needs {expected} blocks, got {actual}")]
    BlockCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    // Generic arithmetic overflow. Prefer using other errors if possible.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
