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

//! Hash functions feeding the MinCount sketch.
//!
//! A [`HashFunction`] maps any hashable element to an integer in `[0, 2^bit_width - 1]`. The
//! sketch trusts the output to be uniformly distributed over that range; a hash that is not
//! uniform only degrades accuracy, it never fails.
//!
//! Four implementations ship with the crate:
//!
//! - [`Sha256Hash`]: SHA-256 reduced to the requested width, the cryptographic reference.
//! - [`Murmur3Hash`]: MurmurHash3 x64 128, the default, with a full 128-bit output.
//! - [`WyHash64`]: wyhash, a fast 64-bit hash.
//! - [`ModulusHash`]: a degenerate baseline that reduces the element's integer value modulo a
//!   power of two. Useful to show how a non-uniform hash skews the estimate.

use std::hash::Hash;

mod modulus;
mod murmur;
mod sha;
mod wy;

pub use modulus::ModulusHash;
pub use murmur::Murmur3Hash;
pub use sha::Sha256Hash;
pub use wy::WyHash64;

/// Smallest supported hash bit width.
pub const MIN_BIT_WIDTH: u32 = 1;

/// Largest supported hash bit width.
pub const MAX_BIT_WIDTH: u32 = 128;

/// Default seed, shared with the Apache DataSketches family.
pub const DEFAULT_SEED: u32 = 9001;

/// A deterministic map from elements to fixed-width unsigned integers.
///
/// Implementations must be pure: the same element and bit width always produce the same value,
/// and the value is always in `[0, 2^bit_width - 1]`.
pub trait HashFunction {
    /// Hash `element` into `[0, 2^bit_width - 1]`.
    ///
    /// Named apart from [`Hash::hash`] so implementors can also derive `Hash`.
    fn hash_bits<T: Hash + ?Sized>(&self, element: &T, bit_width: u32) -> u128;
}

/// Return `2^bit_width - 1`, the largest hash value representable in `bit_width` bits.
///
/// Widths of 128 or more saturate to `u128::MAX`.
///
/// # Examples
///
/// ```
/// use mincount::hash::max_hash;
///
/// assert_eq!(max_hash(8), 255);
/// assert_eq!(max_hash(128), u128::MAX);
/// ```
#[inline]
pub fn max_hash(bit_width: u32) -> u128 {
    if bit_width >= MAX_BIT_WIDTH {
        u128::MAX
    } else {
        (1u128 << bit_width) - 1
    }
}

/// Keep the lowest `bit_width` bits of `hash`.
#[inline]
pub fn truncate(hash: u128, bit_width: u32) -> u128 {
    hash & max_hash(bit_width)
}
