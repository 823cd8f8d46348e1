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

use crate::hash::DEFAULT_SEED;
use crate::hash::HashFunction;
use crate::hash::truncate;

/// MurmurHash3 x64 128.
///
/// The low 64 bits of the result are the first murmur word and the high 64 bits the second, so
/// truncating to a narrower width keeps the first word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Murmur3Hash {
    seed: u32,
}

impl Murmur3Hash {
    /// Create a murmur hash with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Return the seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for Murmur3Hash {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl HashFunction for Murmur3Hash {
    fn hash_bits<T: Hash + ?Sized>(&self, element: &T, bit_width: u32) -> u128 {
        let mut hasher = mur3::Hasher128::with_seed(self.seed);
        element.hash(&mut hasher);
        let (h1, h2) = hasher.finish128();
        truncate(((h2 as u128) << 64) | h1 as u128, bit_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let hash = Murmur3Hash::default();
        assert_eq!(hash.hash_bits("apple", 128), hash.hash_bits("apple", 128));
        assert_ne!(hash.hash_bits("apple", 128), hash.hash_bits("banana", 128));
    }

    #[test]
    fn test_narrow_width_keeps_low_bits() {
        let hash = Murmur3Hash::default();
        let full = hash.hash_bits(&42u64, 128);
        assert_eq!(hash.hash_bits(&42u64, 64), full as u64 as u128);
        assert_eq!(hash.hash_bits(&42u64, 12), full & 0xfff);
    }

    #[test]
    fn test_seed_changes_output() {
        let a = Murmur3Hash::with_seed(1);
        let b = Murmur3Hash::with_seed(2);
        assert_eq!(a.seed(), 1);
        assert_ne!(a.hash_bits("apple", 128), b.hash_bits("apple", 128));
    }
}
