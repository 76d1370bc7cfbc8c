// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

use crate::error::{Error, Result};
use crate::util::try_collect;

/// Largest per-sample absolute error a compliant reconstruction may show.
pub const PEAK_ERROR_LIMIT: u32 = 1;
/// Largest overall mean squared error of a compliant reconstruction.
pub const MEAN_SQUARED_ERROR_LIMIT: f64 = 0.02;
/// Largest overall mean error (bias) of a compliant reconstruction.
pub const MEAN_ERROR_LIMIT: f64 = 0.015;

/// Errors of one (expected, actual) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// `|actual[i] - expected[i]|` for every sample.
    pub abs_errors: Vec<u32>,
    pub peak: u32,
    pub squared_error: u64,
    /// Sum of the signed errors `actual[i] - expected[i]`.
    pub error_sum: i64,
}

/// Accumulates reconstruction errors over independent measurements. Single writer: the
/// owner sequences calls to [`FidelityMetrics::record`] and [`FidelityMetrics::reset`].
#[derive(Debug, Clone, Default)]
pub struct FidelityMetrics {
    measurements: Vec<Measurement>,
    samples: usize,
    peak: u32,
    squared_error: u64,
    error_sum: i64,
}

impl FidelityMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the errors of `actual` with respect to `expected`. Both must have the same
    /// length.
    pub fn record<T: Copy + Into<i64>>(
        &mut self,
        expected: &[T],
        actual: &[T],
    ) -> Result<&Measurement> {
        if expected.len() != actual.len() {
            return Err(Error::LengthMismatch {
                expected: expected.len(),
                actual: actual.len(),
            });
        }
        let errors = expected
            .iter()
            .zip(actual.iter())
            .map(|(&e, &a)| Into::<i64>::into(a) - Into::<i64>::into(e));
        let abs_errors = try_collect(errors.clone().map(|d| d.unsigned_abs() as u32))?;
        let measurement = Measurement {
            peak: abs_errors.iter().copied().max().unwrap_or(0),
            squared_error: abs_errors.iter().map(|&d| d as u64 * d as u64).sum(),
            error_sum: errors.sum(),
            abs_errors,
        };
        self.samples += expected.len();
        self.peak = self.peak.max(measurement.peak);
        self.squared_error += measurement.squared_error;
        self.error_sum += measurement.error_sum;
        self.measurements.try_reserve(1)?;
        self.measurements.push(measurement);
        Ok(&self.measurements[self.measurements.len() - 1])
    }

    /// Forgets every recorded measurement.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn peak_error(&self) -> u32 {
        self.peak
    }

    pub fn mean_squared_error(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.squared_error as f64 / self.samples as f64
    }

    pub fn mean_error(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.error_sum as f64 / self.samples as f64
    }

    /// Whether the recorded errors stay within the IEEE 1180 style limits for 8-bit
    /// output. False when nothing has been recorded.
    pub fn is_ieee1180_compliant(&self) -> bool {
        self.samples > 0
            && self.peak <= PEAK_ERROR_LIMIT
            && self.mean_squared_error() <= MEAN_SQUARED_ERROR_LIMIT
            && self.mean_error().abs() <= MEAN_ERROR_LIMIT
    }
}

impl fmt::Display for FidelityMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} measurements, {} samples: peak error {}, mse {:.6}, mean error {:+.6}, ieee1180 {}",
            self.measurements.len(),
            self.samples,
            self.peak,
            self.mean_squared_error(),
            self.mean_error(),
            if self.is_ieee1180_compliant() {
                "pass"
            } else {
                "fail"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::assert_almost_eq;
    use test_log::test;

    #[test]
    fn records_errors() {
        let mut metrics = FidelityMetrics::new();
        let m = metrics.record(&[10u8, 20, 30, 40], &[11u8, 20, 27, 40]).unwrap();
        assert_eq!(m.abs_errors, vec![1, 0, 3, 0]);
        assert_eq!(m.peak, 3);
        assert_eq!(m.squared_error, 10);
        assert_eq!(m.error_sum, -2);
        assert_eq!(metrics.peak_error(), 3);
        assert_almost_eq!(metrics.mean_squared_error(), 2.5, 1e-12);
        assert_almost_eq!(metrics.mean_error(), -0.5, 1e-12);
        assert!(!metrics.is_ieee1180_compliant());
    }

    #[test]
    fn accumulates_and_resets() {
        let mut metrics = FidelityMetrics::new();
        metrics.record(&[0i16; 4], &[0i16, 0, 0, 1]).unwrap();
        metrics.record(&[5i16; 4], &[5i16; 4]).unwrap();
        assert_eq!(metrics.measurement_count(), 2);
        assert_eq!(metrics.sample_count(), 8);
        assert_eq!(metrics.peak_error(), 1);
        assert_almost_eq!(metrics.mean_squared_error(), 0.125, 1e-12);
        metrics.reset();
        assert_eq!(metrics.measurement_count(), 0);
        assert_eq!(metrics.peak_error(), 0);
        assert_eq!(metrics.mean_squared_error(), 0.0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let mut metrics = FidelityMetrics::new();
        assert!(matches!(
            metrics.record(&[1u8, 2, 3], &[1u8, 2]),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert_eq!(metrics.measurement_count(), 0);
    }

    #[test]
    fn compliance() {
        let mut metrics = FidelityMetrics::new();
        assert!(!metrics.is_ieee1180_compliant());
        let expected = [100u8; 64];
        metrics.record(&expected, &expected).unwrap();
        assert!(metrics.is_ieee1180_compliant());
        // One off-by-one sample in 64 is within every limit.
        let mut actual = expected;
        actual[5] = 101;
        actual[6] = 99;
        metrics.record(&expected, &actual).unwrap();
        assert!(metrics.is_ieee1180_compliant());
        // A biased reconstruction is not.
        metrics.record(&expected, &[101u8; 64]).unwrap();
        assert!(!metrics.is_ieee1180_compliant());
    }

    #[test]
    fn peak_above_limit_fails() {
        let mut metrics = FidelityMetrics::new();
        let expected = vec![0u8; 10_000];
        let mut actual = expected.clone();
        actual[0] = 2;
        metrics.record(&expected, &actual).unwrap();
        assert!(metrics.mean_squared_error() < MEAN_SQUARED_ERROR_LIMIT);
        assert!(!metrics.is_ieee1180_compliant());
    }
}
