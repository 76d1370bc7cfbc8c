// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#[cfg(test)]
pub mod test;
pub mod tracing_wrappers;
mod vec_helpers;

pub use vec_helpers::*;
