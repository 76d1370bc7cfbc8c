// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::error::Result;

pub trait TryWithCapacity {
    type Output;
    fn try_with_capacity(capacity: usize) -> Result<Self::Output>;
}

impl<T> TryWithCapacity for Vec<T> {
    type Output = Vec<T>;

    fn try_with_capacity(capacity: usize) -> Result<Self::Output> {
        let mut vec = Vec::new();
        vec.try_reserve(capacity)?;
        Ok(vec)
    }
}

/// Collects an exact-size iterator into a vector without aborting on allocation failure.
pub fn try_collect<T>(iter: impl ExactSizeIterator<Item = T>) -> Result<Vec<T>> {
    let mut vec = Vec::try_with_capacity(iter.len())?;
    vec.extend(iter);
    Ok(vec)
}
