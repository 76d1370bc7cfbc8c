// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use jdct::{
    BatchOptions, BatchProcessor, FidelityMetrics, Precision, QuantPrecision, QuantReference,
    QuantTable, Rounding, TransformOptions, assemble_plane, decode_quant_tables,
    encode_quant_tables, summarize,
};

#[derive(Parser)]
#[command(about = "Inspect quantization tables and measure 8x8 DCT round trips")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a quantization table segment (DQT marker payload) and print a summary
    Dqt {
        /// File containing the raw segment
        input: PathBuf,

        /// Also print every table in natural order
        #[arg(short, long)]
        verbose: bool,
    },
    /// Write a standard quantization table scaled for a quality as a DQT segment
    Table {
        /// Output file
        output: PathBuf,

        #[arg(long, default_value_t = 75)]
        quality: u32,

        /// Use the chrominance table instead of the luminance one
        #[arg(long)]
        chroma: bool,

        /// Store 16-bit entries
        #[arg(long)]
        sixteen_bit: bool,

        #[arg(long, default_value_t = 0)]
        id: u8,
    },
    /// Forward and inverse transform a raw 8-bit grayscale plane
    Roundtrip {
        /// File with width * height bytes, row-major
        input: PathBuf,

        #[arg(long)]
        width: usize,

        #[arg(long)]
        height: usize,

        /// high, medium or fast
        #[arg(long, default_value_t = Precision::High)]
        precision: Precision,

        /// nearest, truncate, floor or ceiling
        #[arg(long, default_value_t = Rounding::Nearest)]
        rounding: Rounding,

        /// Quantize with the standard luminance table scaled for this quality
        #[arg(long)]
        quality: Option<u32>,

        /// Quantize with the first table of this DQT segment instead
        #[arg(long, conflicts_with = "quality")]
        tables: Option<PathBuf>,

        /// Writes the reconstructed plane
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).wrap_err_with(|| format!("Cannot read {}", path.display()))
}

fn dqt(input: PathBuf, verbose: bool) -> Result<()> {
    let tables = decode_quant_tables(&read_file(&input)?)?;
    println!("{}", summarize(&tables)?);
    if verbose {
        for table in &tables {
            println!("table {} ({}):", table.id(), table.precision());
            for row in table.matrix() {
                let row: Vec<String> = row.iter().map(|v| format!("{v:5}")).collect();
                println!("{}", row.join(""));
            }
        }
    }
    Ok(())
}

fn load_table(quality: Option<u32>, tables: Option<PathBuf>) -> Result<Option<QuantTable>> {
    if let Some(path) = tables {
        let tables = decode_quant_tables(&read_file(&path)?)?;
        return tables
            .into_iter()
            .next()
            .map(Some)
            .ok_or_else(|| eyre!("No table in {}", path.display()));
    }
    quality
        .map(|q| QuantTable::standard(QuantReference::Luminance, q, QuantPrecision::Bits8, 0))
        .transpose()
        .map_err(Into::into)
}

fn roundtrip(
    input: PathBuf,
    width: usize,
    height: usize,
    options: TransformOptions,
    quality: Option<u32>,
    tables: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let plane = read_file(&input)?;
    let table = load_table(quality, tables)?;
    let processor = BatchProcessor::new(BatchOptions::from(options));

    let forward = processor.forward_plane(&plane, width, height)?;
    println!("forward: {}", forward.stats);

    let coefficients = match &table {
        Some(table) => {
            println!(
                "quantizing with {} table, quality {}",
                table.precision(),
                table.estimated_quality()
            );
            forward
                .coefficients
                .iter()
                .map(|block| table.dequantize(&table.quantize(block)))
                .collect()
        }
        None => forward.coefficients,
    };

    let inverse = processor.inverse(&coefficients)?;
    println!("inverse: {}", inverse.stats);

    let reconstructed = assemble_plane(&inverse.pixels, width, height)?;
    let mut metrics = FidelityMetrics::new();
    metrics.record(&plane, &reconstructed)?;
    println!("{metrics}");

    if let Some(output) = output {
        std::fs::write(&output, &reconstructed)
            .wrap_err_with(|| format!("Cannot write {}", output.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(feature = "tracing-subscriber")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env())
            .init();
    }

    match Opt::parse().command {
        Command::Dqt { input, verbose } => dqt(input, verbose),
        Command::Table {
            output,
            quality,
            chroma,
            sixteen_bit,
            id,
        } => {
            let reference = if chroma {
                QuantReference::Chrominance
            } else {
                QuantReference::Luminance
            };
            let precision = if sixteen_bit {
                QuantPrecision::Bits16
            } else {
                QuantPrecision::Bits8
            };
            let table = QuantTable::standard(reference, quality, precision, id)?;
            let segment = encode_quant_tables(std::slice::from_ref(&table))?;
            std::fs::write(&output, segment)
                .wrap_err_with(|| format!("Cannot write {}", output.display()))
        }
        Command::Roundtrip {
            input,
            width,
            height,
            precision,
            rounding,
            quality,
            tables,
            output,
        } => roundtrip(
            input,
            width,
            height,
            TransformOptions::new(precision, rounding),
            quality,
            tables,
            output,
        ),
    }
}
