// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! k-minimum-values (MinCount) distinct counting.
//!
//! Every element is hashed into `[0, 2^bit_width - 1]` and normalized into `[0, 1]`. The sketch
//! keeps the `k` smallest distinct normalized values. For `n` distinct elements under a uniform
//! hash the `k`-th smallest value is about `k / n`, which gives the estimate
//! `n ≈ (k - 1) / X_(k)`.
//!
//! The sketch has two modes:
//!
//! - *filling*: fewer than `k` distinct values retained; the estimate is their exact count.
//! - *saturated*: all `k` slots filled; the estimate comes from the order statistic above.
//!
//! The transition is one-way. Deduplication compares hash values, so two elements whose hashes
//! normalize to the same value count once.
//!
//! # Example
//!
//! ```
//! use mincount::kmv::MinCountSketch;
//!
//! let mut sketch = MinCountSketch::new(256, 128).unwrap();
//! for i in 0..100_000 {
//!     sketch.observe(i % 50_000);
//! }
//! let estimate = sketch.estimate();
//! assert!((estimate - 50_000.0).abs() < 0.25 * 50_000.0);
//! ```

use std::hash::Hash;

use crate::error::Error;
use crate::hash::HashFunction;

mod retained;
mod sketch;

pub use self::retained::Slot;
pub use self::sketch::MinCountSketch;
pub use self::sketch::MinCountSketchBuilder;

/// Default number of retained values.
pub const DEFAULT_K: usize = 256;

/// Default hash bit width.
pub const DEFAULT_BIT_WIDTH: u32 = 128;

/// Estimate the number of distinct elements of a whole multiset in one call.
///
/// # Errors
///
/// Same as [`MinCountSketch::new`].
///
/// # Examples
///
/// ```
/// use mincount::hash::Murmur3Hash;
/// use mincount::kmv::min_count;
///
/// let words = ["a", "b", "a", "c", "b"];
/// let estimate = min_count(10, Murmur3Hash::default(), words, 128).unwrap();
/// assert_eq!(estimate, 3.0);
/// ```
pub fn min_count<H, I>(k: usize, hash_function: H, elements: I, bit_width: u32) -> Result<f64, Error>
where
    H: HashFunction,
    I: IntoIterator,
    I::Item: Hash,
{
    let mut sketch = MinCountSketch::with_hash_function(k, bit_width, hash_function)?;
    sketch.extend(elements);
    Ok(sketch.estimate())
}
