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

use sha2::Digest;
use sha2::Sha256;

use crate::hash::HashFunction;
use crate::hash::truncate;

/// SHA-256 reduced to the requested width.
///
/// The digest is taken over the bytes the element's [`Hash`] implementation writes, read as a
/// big-endian integer, and the lowest `bit_width` bits are kept. Widths above 128 are not
/// supported by the sketch, so only the low half of the digest is ever used.
///
/// # Examples
///
/// ```
/// use mincount::hash::HashFunction;
/// use mincount::hash::Sha256Hash;
///
/// let hash = Sha256Hash;
/// assert!(hash.hash_bits("apple", 16) < 1 << 16);
/// assert_eq!(hash.hash_bits("apple", 64), hash.hash_bits("apple", 64));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn hash_bits<T: Hash + ?Sized>(&self, element: &T, bit_width: u32) -> u128 {
        let mut hasher = DigestHasher::default();
        element.hash(&mut hasher);
        let digest = hasher.digest.finalize();
        let mut low = [0u8; 16];
        low.copy_from_slice(&digest[16..]);
        truncate(u128::from_be_bytes(low), bit_width)
    }
}

/// Feeds every byte written through [`Hasher`] into a SHA-256 digest.
#[derive(Default)]
struct DigestHasher {
    digest: Sha256,
}

impl Hasher for DigestHasher {
    fn finish(&self) -> u64 {
        let digest = self.digest.clone().finalize();
        let mut low = [0u8; 8];
        low.copy_from_slice(&digest[24..]);
        u64::from_be_bytes(low)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.digest.update(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bits_of_digest() {
        // u32 writes its native-endian bytes
        let digest = Sha256::digest(7u32.to_ne_bytes());
        let mut low = [0u8; 16];
        low.copy_from_slice(&digest[16..]);
        let expected = u128::from_be_bytes(low);

        let hash = Sha256Hash;
        assert_eq!(hash.hash_bits(&7u32, 128), expected);
        assert_eq!(hash.hash_bits(&7u32, 20), expected & 0xf_ffff);
    }

    #[test]
    fn test_deterministic_and_in_range() {
        let hash = Sha256Hash;
        for bit_width in [1, 8, 33, 64, 128] {
            for i in 0..500u64 {
                let value = hash.hash_bits(&i, bit_width);
                assert_eq!(value, hash.hash_bits(&i, bit_width));
                assert!(value <= crate::hash::max_hash(bit_width));
            }
        }
        assert_ne!(hash.hash_bits("apple", 128), hash.hash_bits("banana", 128));
    }

    #[test]
    fn test_finish_matches_digest_tail() {
        let mut hasher = DigestHasher::default();
        hasher.write(b"abc");
        let digest = Sha256::digest(b"abc");
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&digest[24..]);
        assert_eq!(hasher.finish(), u64::from_be_bytes(tail));
    }
}
