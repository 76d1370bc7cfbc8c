// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Mapping between zigzag (serialization) order and natural row-major order.

use crate::error::{Error, Result};
use crate::{BLOCK_DIM, BLOCK_SIZE};

/// `ZIGZAG_TO_NATURAL[zigzag_index]` is the row-major position of that coefficient.
#[rustfmt::skip]
pub const ZIGZAG_TO_NATURAL: [usize; BLOCK_SIZE] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse of [`ZIGZAG_TO_NATURAL`].
pub const NATURAL_TO_ZIGZAG: [usize; BLOCK_SIZE] = {
    let mut table = [0usize; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        table[ZIGZAG_TO_NATURAL[i]] = i;
        i += 1;
    }
    table
};

pub fn to_natural(zigzag_index: usize) -> Result<usize> {
    ZIGZAG_TO_NATURAL
        .get(zigzag_index)
        .copied()
        .ok_or(Error::IndexOutOfRange(zigzag_index))
}

pub fn to_zigzag(natural_index: usize) -> Result<usize> {
    NATURAL_TO_ZIGZAG
        .get(natural_index)
        .copied()
        .ok_or(Error::IndexOutOfRange(natural_index))
}

/// Reorders a zigzag-ordered block into natural order.
pub fn zigzag_to_natural_order<T: Copy>(zigzag: &[T; BLOCK_SIZE]) -> [T; BLOCK_SIZE] {
    std::array::from_fn(|natural| zigzag[NATURAL_TO_ZIGZAG[natural]])
}

/// Reorders a natural-order block into zigzag order.
pub fn natural_to_zigzag_order<T: Copy>(natural: &[T; BLOCK_SIZE]) -> [T; BLOCK_SIZE] {
    std::array::from_fn(|zigzag| natural[ZIGZAG_TO_NATURAL[zigzag]])
}

/// Serializes an 8x8 matrix, given as rows, in zigzag order. Any shape other than
/// exactly 8 rows of 8 values is rejected.
pub fn matrix_to_zigzag<T: Copy, R: AsRef<[T]>>(matrix: &[R]) -> Result<[T; BLOCK_SIZE]> {
    if matrix.len() != BLOCK_DIM {
        return Err(Error::InvalidMatrixRows(matrix.len()));
    }
    for (row, values) in matrix.iter().enumerate() {
        let len = values.as_ref().len();
        if len != BLOCK_DIM {
            return Err(Error::InvalidMatrixRow { row, len });
        }
    }
    Ok(std::array::from_fn(|zigzag| {
        let natural = ZIGZAG_TO_NATURAL[zigzag];
        matrix[natural / BLOCK_DIM].as_ref()[natural % BLOCK_DIM]
    }))
}

/// Builds the 8x8 natural-order matrix of a zigzag-ordered sequence of exactly 64 values.
pub fn zigzag_to_matrix<T: Copy>(sequence: &[T]) -> Result<[[T; BLOCK_DIM]; BLOCK_DIM]> {
    let sequence: &[T; BLOCK_SIZE] =
        sequence
            .try_into()
            .map_err(|_| Error::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: sequence.len(),
            })?;
    Ok(std::array::from_fn(|row| {
        std::array::from_fn(|col| sequence[NATURAL_TO_ZIGZAG[row * BLOCK_DIM + col]])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn bijection() {
        let mut seen = [false; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            let natural = to_natural(i).unwrap();
            assert!(!seen[natural], "duplicate natural index {natural}");
            seen[natural] = true;
            assert_eq!(to_zigzag(natural).unwrap(), i);
            assert_eq!(to_natural(to_zigzag(i).unwrap()).unwrap(), i);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn known_positions() {
        assert_eq!(to_natural(0).unwrap(), 0);
        assert_eq!(to_natural(1).unwrap(), 1);
        assert_eq!(to_natural(2).unwrap(), 8);
        assert_eq!(to_natural(63).unwrap(), 63);
        assert_eq!(to_zigzag(16).unwrap(), 3);
    }

    #[test]
    fn index_out_of_range() {
        assert!(matches!(to_natural(64), Err(Error::IndexOutOfRange(64))));
        assert!(matches!(to_zigzag(1000), Err(Error::IndexOutOfRange(1000))));
    }

    #[test]
    fn matrix_round_trip() {
        arbtest::arbtest(|u| {
            let mut matrix = [[0i32; BLOCK_DIM]; BLOCK_DIM];
            for row in matrix.iter_mut() {
                for value in row.iter_mut() {
                    *value = u.arbitrary()?;
                }
            }
            let sequence: [i32; BLOCK_SIZE] = matrix_to_zigzag(&matrix).unwrap();
            assert_eq!(zigzag_to_matrix(&sequence).unwrap(), matrix);
            assert_eq!(
                natural_to_zigzag_order(&zigzag_to_natural_order(&sequence)),
                sequence
            );
            Ok(())
        });
    }

    #[test]
    fn matrix_first_row_order() {
        let matrix: Vec<Vec<u16>> = (0..8)
            .map(|row| (0..8).map(|col| row * 8 + col).collect())
            .collect();
        let sequence: [u16; BLOCK_SIZE] = matrix_to_zigzag(&matrix).unwrap();
        assert_eq!(&sequence[..6], &[0, 1, 8, 16, 9, 2]);
    }

    #[test]
    fn rejects_bad_shapes() {
        let short = vec![vec![0u8; 8]; 7];
        assert!(matches!(
            matrix_to_zigzag::<u8, _>(&short),
            Err(Error::InvalidMatrixRows(7))
        ));
        let mut ragged = vec![vec![0u8; 8]; 8];
        ragged[5].push(1);
        assert!(matches!(
            matrix_to_zigzag::<u8, _>(&ragged),
            Err(Error::InvalidMatrixRow { row: 5, len: 9 })
        ));
        assert!(matches!(
            zigzag_to_matrix(&[0u8; 63][..]),
            Err(Error::InvalidBlockLength {
                expected: 64,
                actual: 63
            })
        ));
        assert!(zigzag_to_matrix(&[0u8; 65][..]).is_err());
    }
}
