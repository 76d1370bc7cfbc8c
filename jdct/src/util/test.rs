// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_traits::Num;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub fn abs_delta<T: Num + std::cmp::PartialOrd>(left_val: T, right_val: T) -> T {
    if left_val > right_val {
        left_val - right_val
    } else {
        right_val - left_val
    }
}

macro_rules! assert_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        let (left_val, right_val, max_error) = (&$left, &$right, &$max_error);
        match $crate::util::test::abs_delta(*left_val, *right_val).partial_cmp(max_error) {
            Some(std::cmp::Ordering::Greater) | None => panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n max_error: `{:?}`",
                left_val, right_val, max_error
            ),
            _ => {}
        }
    };
}
pub(crate) use assert_almost_eq;

macro_rules! assert_all_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        let (left_val, right_val, max_error) = (&$left, &$right, &$max_error);
        if left_val.len() != right_val.len() {
            panic!("assertion failed: `(left ≈ right)`\n left.len(): `{}`,\n right.len(): `{}`", left_val.len(), right_val.len());
        }
        for index in 0..left_val.len() {
            match $crate::util::test::abs_delta(left_val[index], right_val[index]).partial_cmp(max_error) {
                Some(std::cmp::Ordering::Greater) | None =>  panic!(
                    "assertion failed: `(left ≈ right)`\n left: `{:?}`,\n right: `{:?}`,\n max_error: `{:?}`,\n left[{}]: `{}`,\n right[{}]: `{}`",
                    left_val, right_val, max_error, index, left_val[index], index, right_val[index]
                ),
                _ => {}
            }
        }
    };
}
pub(crate) use assert_all_almost_eq;

/// Deterministic source of pixel blocks for tests.
pub struct BlockGenerator {
    rng: XorShiftRng,
}

impl BlockGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }

    /// Uniform noise over the whole sample range.
    pub fn noise(&mut self) -> [u8; 64] {
        std::array::from_fn(|_| self.rng.random())
    }

    /// A flat block with a little noise, the common case in photographs.
    pub fn smooth(&mut self) -> [u8; 64] {
        let base: i32 = self.rng.random_range(0..=255);
        std::array::from_fn(|_| (base + self.rng.random_range(-12..=12)).clamp(0, 255) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_floats() {
        assert_almost_eq!(1.0000001f64, 1.0000002, 0.000001);
        assert_almost_eq!(1.0, 1.1, 0.2);
    }

    #[test]
    fn test_with_integers() {
        assert_almost_eq!(100, 101, 2);
        assert_almost_eq!(500i64, 498, 3);
    }

    #[test]
    #[should_panic]
    fn test_panic_integer() {
        assert_almost_eq!(100, 105, 2);
    }

    #[test]
    #[should_panic]
    fn test_nan_comparison() {
        assert_almost_eq!(f64::NAN, f64::NAN, 0.1);
    }

    #[test]
    fn test_all_almost_eq() {
        assert_all_almost_eq!([1i32, 2, 3], [2i32, 2, 2], 1);
    }

    #[test]
    #[should_panic]
    fn test_all_almost_eq_length() {
        assert_all_almost_eq!(vec![1i32, 2], vec![1i32], 1);
    }

    #[test]
    fn generator_is_deterministic() {
        let mut a = BlockGenerator::new(5);
        let mut b = BlockGenerator::new(5);
        assert_eq!(a.noise(), b.noise());
        assert_eq!(a.smooth(), b.smooth());
    }
}
