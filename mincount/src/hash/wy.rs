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

use std::hash::Hash;
use std::hash::Hasher;

use crate::hash::HashFunction;
use crate::hash::truncate;

/// wyhash, 64-bit output.
///
/// Bit widths above 64 leave the high bits zero, which shrinks the effective hash range and
/// biases the estimate down. Pair it with `bit_width <= 64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WyHash64 {
    seed: u64,
}

impl WyHash64 {
    /// Create a wyhash with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Return the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl HashFunction for WyHash64 {
    fn hash_bits<T: Hash + ?Sized>(&self, element: &T, bit_width: u32) -> u128 {
        let mut hasher = wyhash::WyHash::with_seed(self.seed);
        element.hash(&mut hasher);
        truncate(hasher.finish() as u128, bit_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_fits_in_64_bits() {
        let hash = WyHash64::default();
        for i in 0..1000u32 {
            assert!(hash.hash_bits(&i, 128) <= u64::MAX as u128);
        }
    }

    #[test]
    fn test_deterministic() {
        let hash = WyHash64::with_seed(7);
        assert_eq!(hash.seed(), 7);
        assert_eq!(hash.hash_bits("apple", 32), hash.hash_bits("apple", 32));
        assert!(hash.hash_bits("apple", 32) <= u32::MAX as u128);
    }
}
