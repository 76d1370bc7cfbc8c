// Copyright (c) the jdct Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! `tracing` macros when the `tracing` feature is enabled, no-ops otherwise.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

// The no-op macros get private names: a plain `warn` re-export would be ambiguous with the
// built-in `#[warn]` attribute.
#[cfg(not(feature = "tracing"))]
macro_rules! __debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! __trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! __warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use {__debug as debug, __trace as trace, __warn as warn};
