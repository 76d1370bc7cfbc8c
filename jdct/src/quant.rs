// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Quantization tables: decoding of table definition segments (the payload of a JPEG DQT
//! marker), quality estimation against the standard tables, and (de)quantization of
//! coefficient blocks.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};
use crate::util::tracing_wrappers::*;
use crate::util::{TryWithCapacity, try_collect};
use crate::zigzag::{NATURAL_TO_ZIGZAG, natural_to_zigzag_order, zigzag_to_natural_order};
use crate::{BLOCK_DIM, BLOCK_SIZE};

/// Largest table id a segment may declare.
pub const MAX_TABLE_ID: u8 = 3;

/// Largest per-entry deviation from a scaled standard table that still counts as a match.
pub const QUALITY_MATCH_TOLERANCE: u32 = 1;

/// Luminance table of ITU-T T.81 Annex K, natural order.
#[rustfmt::skip]
pub const STANDARD_LUMINANCE_TABLE: [u16; BLOCK_SIZE] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Chrominance table of ITU-T T.81 Annex K, natural order.
#[rustfmt::skip]
pub const STANDARD_CHROMINANCE_TABLE: [u16; BLOCK_SIZE] = [
    17, 18, 24, 47, 99, 99, 99, 99,
    18, 21, 26, 66, 99, 99, 99, 99,
    24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
];

#[repr(u8)]
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantPrecision {
    #[default]
    Bits8 = 0,
    Bits16 = 1,
}

impl QuantPrecision {
    /// Bytes per table entry in a segment.
    pub fn element_size(self) -> usize {
        match self {
            QuantPrecision::Bits8 => 1,
            QuantPrecision::Bits16 => 2,
        }
    }

    pub fn bits(self) -> u32 {
        8 * self.element_size() as u32
    }

    /// Largest entry of a scaled standard table of this precision.
    fn standard_max(self) -> u32 {
        match self {
            QuantPrecision::Bits8 => 255,
            QuantPrecision::Bits16 => 32767,
        }
    }
}

impl fmt::Display for QuantPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantReference {
    Luminance,
    Chrominance,
}

impl QuantReference {
    pub const ALL: [QuantReference; 2] = [QuantReference::Luminance, QuantReference::Chrominance];

    pub fn table(self) -> &'static [u16; BLOCK_SIZE] {
        match self {
            QuantReference::Luminance => &STANDARD_LUMINANCE_TABLE,
            QuantReference::Chrominance => &STANDARD_CHROMINANCE_TABLE,
        }
    }
}

impl fmt::Display for QuantReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuantReference::Luminance => "luminance",
            QuantReference::Chrominance => "chrominance",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityEstimate {
    /// The table is a standard table scaled for `quality`.
    Standard {
        quality: u8,
        reference: QuantReference,
    },
    /// No scaling of either standard table reproduces the table.
    NonStandard,
}

impl QualityEstimate {
    pub const NON_STANDARD_SENTINEL: i32 = -1;

    pub fn quality(&self) -> Option<u8> {
        match self {
            QualityEstimate::Standard { quality, .. } => Some(*quality),
            QualityEstimate::NonStandard => None,
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, QualityEstimate::Standard { .. })
    }

    /// The quality as an integer, [`Self::NON_STANDARD_SENTINEL`] for non-standard tables.
    pub fn to_sentinel(&self) -> i32 {
        self.quality()
            .map_or(Self::NON_STANDARD_SENTINEL, i32::from)
    }
}

impl fmt::Display for QualityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityEstimate::Standard { quality, reference } => {
                write!(f, "{quality} ({reference})")
            }
            QualityEstimate::NonStandard => f.write_str("non-standard"),
        }
    }
}

/// IJG scale factor, in percent, of `quality` (1..=100).
fn quality_scale(quality: u32) -> u32 {
    if quality < 50 {
        5000 / quality
    } else {
        200 - 2 * quality
    }
}

/// Scales a natural-order standard table to `quality` the way libjpeg does.
fn scaled_table(reference: &[u16; BLOCK_SIZE], quality: u32, max: u32) -> [u16; BLOCK_SIZE] {
    let scale = quality_scale(quality);
    reference.map(|r| ((r as u32 * scale + 50) / 100).clamp(1, max) as u16)
}

/// Finds the standard table and quality whose scaled table is closest to `natural`,
/// measured as the largest per-entry difference.
pub fn estimate_quality(natural: &[u16; BLOCK_SIZE], precision: QuantPrecision) -> QualityEstimate {
    let mut best: Option<(u32, u8, QuantReference)> = None;
    for reference in QuantReference::ALL {
        for quality in 1..=100u32 {
            let candidate = scaled_table(reference.table(), quality, precision.standard_max());
            let deviation = natural
                .iter()
                .zip(candidate.iter())
                .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
                .max()
                .unwrap_or(0);
            if best.is_none_or(|(d, _, _)| deviation < d) {
                best = Some((deviation, quality as u8, reference));
            }
        }
    }
    match best {
        Some((deviation, quality, reference)) if deviation <= QUALITY_MATCH_TOLERANCE => {
            QualityEstimate::Standard { quality, reference }
        }
        _ => QualityEstimate::NonStandard,
    }
}

/// One decoded quantization table. Immutable once built: every constructor validates the
/// entries, so no divisor is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantTable {
    id: u8,
    precision: QuantPrecision,
    values: [u16; BLOCK_SIZE],
    matrix: [[u16; BLOCK_DIM]; BLOCK_DIM],
    estimated_quality: QualityEstimate,
}

impl QuantTable {
    /// Builds a table from zigzag-ordered entries. Validation errors report the table as
    /// number `table` of its segment.
    fn with_index(
        table: usize,
        id: u8,
        precision: QuantPrecision,
        values: [u16; BLOCK_SIZE],
    ) -> Result<Self> {
        if id > MAX_TABLE_ID {
            return Err(Error::InvalidQuantTableId { table, value: id });
        }
        if let Some(index) = values.iter().position(|&v| v == 0) {
            return Err(Error::ZeroQuantValue { table, index });
        }
        if precision == QuantPrecision::Bits8 {
            if let Some(&value) = values.iter().find(|&&v| v > u8::MAX as u16) {
                return Err(Error::QuantValueTooLarge {
                    table,
                    value,
                    bits: precision.bits(),
                });
            }
        }
        let natural = zigzag_to_natural_order(&values);
        let matrix = std::array::from_fn(|row| {
            std::array::from_fn(|col| natural[row * BLOCK_DIM + col])
        });
        Ok(Self {
            id,
            precision,
            values,
            matrix,
            estimated_quality: estimate_quality(&natural, precision),
        })
    }

    /// Builds a table from zigzag-ordered entries.
    pub fn new(id: u8, precision: QuantPrecision, values: [u16; BLOCK_SIZE]) -> Result<Self> {
        Self::with_index(0, id, precision, values)
    }

    /// Builds a table from natural-order entries.
    pub fn from_natural(
        id: u8,
        precision: QuantPrecision,
        natural: &[u16; BLOCK_SIZE],
    ) -> Result<Self> {
        Self::new(id, precision, natural_to_zigzag_order(natural))
    }

    /// The standard `reference` table scaled for `quality` (1..=100).
    pub fn standard(
        reference: QuantReference,
        quality: u32,
        precision: QuantPrecision,
        id: u8,
    ) -> Result<Self> {
        if !(1..=100).contains(&quality) {
            return Err(Error::InvalidQuality(quality));
        }
        let natural = scaled_table(reference.table(), quality, precision.standard_max());
        Self::from_natural(id, precision, &natural)
    }

    /// Table slot, `0..=3`.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn precision(&self) -> QuantPrecision {
        self.precision
    }

    pub fn element_size(&self) -> usize {
        self.precision.element_size()
    }

    /// Entries in zigzag order, as stored in the segment.
    pub fn values(&self) -> &[u16; BLOCK_SIZE] {
        &self.values
    }

    /// Entries in natural order; `matrix()[row][col]`.
    pub fn matrix(&self) -> &[[u16; BLOCK_DIM]; BLOCK_DIM] {
        &self.matrix
    }

    pub fn estimated_quality(&self) -> QualityEstimate {
        self.estimated_quality
    }

    /// Entries in natural row-major order.
    pub fn natural(&self) -> [u16; BLOCK_SIZE] {
        zigzag_to_natural_order(&self.values)
    }

    /// Divisor applied to the natural-order coefficient at `index`, including the factor 8
    /// of the forward transform scaling.
    #[inline]
    fn divisor(&self, natural_index: usize) -> i32 {
        8 * self.values[NATURAL_TO_ZIGZAG[natural_index]] as i32
    }

    /// Quantizes natural-order coefficients, rounding half away from zero.
    pub fn quantize(&self, coeffs: &[i16; BLOCK_SIZE]) -> [i16; BLOCK_SIZE] {
        std::array::from_fn(|i| {
            let d = self.divisor(i);
            let c = coeffs[i] as i32;
            let q = (c.abs() + d / 2) / d;
            (if c < 0 { -q } else { q }) as i16
        })
    }

    /// Inverse of [`Self::quantize`], saturating to the coefficient storage range.
    pub fn dequantize(&self, quantized: &[i16; BLOCK_SIZE]) -> [i16; BLOCK_SIZE] {
        std::array::from_fn(|i| {
            let c = quantized[i] as i64 * self.divisor(i) as i64;
            c.clamp(i16::MIN as i64, i16::MAX as i64) as i16
        })
    }
}

/// Decodes every table definition of `segment`, in order.
pub fn decode_quant_tables(segment: &[u8]) -> Result<Vec<QuantTable>> {
    if segment.is_empty() {
        return Err(Error::EmptyQuantSegment);
    }
    let mut tables = Vec::new();
    let mut rest = segment;
    while let Some((&header, body)) = rest.split_first() {
        let table = tables.len();
        let precision = QuantPrecision::from_u8(header >> 4).ok_or(Error::InvalidQuantPrecision {
            table,
            value: header >> 4,
        })?;
        let id = header & 0xf;
        if id > MAX_TABLE_ID {
            return Err(Error::InvalidQuantTableId { table, value: id });
        }
        let needed = BLOCK_SIZE * precision.element_size();
        if body.len() < needed {
            return Err(Error::QuantTableTruncated {
                table,
                needed,
                available: body.len(),
            });
        }
        let (data, tail) = body.split_at(needed);
        let values = match precision {
            QuantPrecision::Bits8 => std::array::from_fn(|i| data[i] as u16),
            QuantPrecision::Bits16 => {
                std::array::from_fn(|i| BigEndian::read_u16(&data[2 * i..2 * i + 2]))
            }
        };
        let decoded = QuantTable::with_index(table, id, precision, values)?;
        debug!(
            table,
            id,
            ?precision,
            quality = %decoded.estimated_quality,
            "decoded quantization table"
        );
        tables.try_reserve(1)?;
        tables.push(decoded);
        rest = tail;
    }
    Ok(tables)
}

/// Serializes tables in the format read by [`decode_quant_tables`].
pub fn encode_quant_tables(tables: &[QuantTable]) -> Result<Vec<u8>> {
    let size = tables
        .iter()
        .map(|t| 1 + BLOCK_SIZE * t.element_size())
        .sum();
    let mut segment = Vec::try_with_capacity(size)?;
    for table in tables {
        segment.push(((table.precision as u8) << 4) | table.id);
        match table.precision {
            QuantPrecision::Bits8 => segment.extend(table.values.iter().map(|&v| v as u8)),
            QuantPrecision::Bits16 => {
                let mut buf = [0u8; 2 * BLOCK_SIZE];
                BigEndian::write_u16_into(&table.values, &mut buf);
                segment.extend_from_slice(&buf);
            }
        }
    }
    Ok(segment)
}

pub fn find_table(tables: &[QuantTable], id: u8) -> Option<&QuantTable> {
    tables.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantTableSummary {
    pub count: usize,
    pub ids: Vec<u8>,
    pub precisions: Vec<QuantPrecision>,
    pub qualities: Vec<QualityEstimate>,
    /// Whether any table is a scaled standard table.
    pub any_standard: bool,
}

pub fn summarize(tables: &[QuantTable]) -> Result<QuantTableSummary> {
    Ok(QuantTableSummary {
        count: tables.len(),
        ids: try_collect(tables.iter().map(|t| t.id))?,
        precisions: try_collect(tables.iter().map(|t| t.precision))?,
        qualities: try_collect(tables.iter().map(|t| t.estimated_quality))?,
        any_standard: tables.iter().any(|t| t.estimated_quality.is_standard()),
    })
}

impl fmt::Display for QuantTableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} quantization table(s)", self.count)?;
        for ((id, precision), quality) in self
            .ids
            .iter()
            .zip(self.precisions.iter())
            .zip(self.qualities.iter())
        {
            writeln!(f, "  table {id}: {precision}, quality {quality}")?;
        }
        write!(
            f,
            "standard tables: {}",
            if self.any_standard { "yes" } else { "no" }
        )
    }
}
