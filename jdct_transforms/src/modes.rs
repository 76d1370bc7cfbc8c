// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;
use std::str::FromStr;

use crate::consts::{FixedConstants, FAST_CONSTANTS, HIGH_CONSTANTS, MEDIUM_CONSTANTS};

/// Accuracy/speed trade-off of the fixed-point kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// 13-bit constants, extra fractional bits carried between passes.
    #[default]
    High,
    /// 11-bit constants, one extra bit carried by the forward transform.
    Medium,
    /// 8-bit constants, nothing carried between passes.
    Fast,
}

impl Precision {
    pub const ALL: [Precision; 3] = [Precision::High, Precision::Medium, Precision::Fast];

    pub fn constants(self) -> &'static FixedConstants {
        match self {
            Precision::High => &HIGH_CONSTANTS,
            Precision::Medium => &MEDIUM_CONSTANTS,
            Precision::Fast => &FAST_CONSTANTS,
        }
    }

    /// Fractional bits of the cosine constants.
    pub fn const_bits(self) -> u32 {
        self.constants().bits
    }

    /// Extra bits of precision kept between the row and column pass of the forward transform.
    pub const fn forward_pass1_bits(self) -> u32 {
        match self {
            Precision::High => 2,
            Precision::Medium => 1,
            Precision::Fast => 0,
        }
    }

    /// Same as [`Precision::forward_pass1_bits`] for the inverse transform. One bit lower
    /// than the forward pass, since coefficients are 8 times larger than samples.
    pub const fn inverse_pass1_bits(self) -> u32 {
        match self {
            Precision::High => 1,
            Precision::Medium | Precision::Fast => 0,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Precision::High => "high",
            Precision::Medium => "medium",
            Precision::Fast => "fast",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Precision {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Precision::High),
            "medium" => Ok(Precision::Medium),
            "fast" => Ok(Precision::Fast),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// How fixed-point values are brought back to integers at the end of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round half away from zero.
    #[default]
    Nearest,
    /// Round toward zero.
    Truncate,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
}

impl Rounding {
    pub const ALL: [Rounding; 4] = [
        Rounding::Nearest,
        Rounding::Truncate,
        Rounding::Floor,
        Rounding::Ceiling,
    ];

    /// Divides `x` by `2^shift`, rounding according to `self`. `shift` must be below 31.
    ///
    /// ```
    /// # use jdct_transforms::Rounding;
    /// assert_eq!(Rounding::Nearest.descale(-6, 2), -2);
    /// assert_eq!(Rounding::Truncate.descale(-6, 2), -1);
    /// assert_eq!(Rounding::Floor.descale(-6, 2), -2);
    /// assert_eq!(Rounding::Ceiling.descale(-6, 2), -1);
    /// ```
    #[inline(always)]
    pub fn descale(self, x: i32, shift: u32) -> i32 {
        debug_assert!(shift < 31, "descale shift {shift} out of range");
        if shift == 0 {
            return x;
        }
        match self {
            Rounding::Nearest => {
                let half = 1i32 << (shift - 1);
                if x >= 0 {
                    x.wrapping_add(half) >> shift
                } else {
                    -(x.wrapping_neg().wrapping_add(half) >> shift)
                }
            }
            Rounding::Truncate => {
                if x >= 0 {
                    x >> shift
                } else {
                    -(x.wrapping_neg() >> shift)
                }
            }
            Rounding::Floor => x >> shift,
            Rounding::Ceiling => x.wrapping_add((1i32 << shift) - 1) >> shift,
        }
    }
}

/// Rounds half up; used between the two passes, where the rounding mode does not apply.
#[inline(always)]
pub(crate) fn round_shift(x: i32, shift: u32) -> i32 {
    if shift == 0 {
        x
    } else {
        x.wrapping_add(1 << (shift - 1)) >> shift
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rounding::Nearest => "nearest",
            Rounding::Truncate => "truncate",
            Rounding::Floor => "floor",
            Rounding::Ceiling => "ceiling",
        })
    }
}

impl FromStr for Rounding {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Rounding::Nearest),
            "truncate" => Ok(Rounding::Truncate),
            "floor" => Ok(Rounding::Floor),
            "ceiling" => Ok(Rounding::Ceiling),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
