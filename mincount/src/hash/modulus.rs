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
use crate::hash::MAX_BIT_WIDTH;
use crate::hash::truncate;

/// Reduce the element's integer value modulo `2^modulus_bits`.
///
/// The element is fed through its [`Hash`] implementation and the bytes it writes are read back
/// as a big-endian integer, so integer elements hash to themselves. The result is then reduced
/// and truncated to the requested width. This is far from uniform and exists as a baseline.
///
/// # Examples
///
/// ```
/// use mincount::hash::HashFunction;
/// use mincount::hash::ModulusHash;
///
/// let hash = ModulusHash::new(4);
/// assert_eq!(hash.hash_bits(&3u32, 8), 3);
/// assert_eq!(hash.hash_bits(&19u32, 8), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModulusHash {
    modulus_bits: u32,
}

impl ModulusHash {
    /// Create a modulus hash reducing modulo `2^modulus_bits`.
    ///
    /// `modulus_bits >= 128` disables the reduction.
    pub fn new(modulus_bits: u32) -> Self {
        Self { modulus_bits }
    }

    /// Modulus `2^(bit_width / 2)`: only the lower half of the hash range is ever produced.
    pub fn half_width(bit_width: u32) -> Self {
        Self::new(bit_width / 2)
    }

    /// Return log2 of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }
}

impl HashFunction for ModulusHash {
    fn hash_bits<T: Hash + ?Sized>(&self, element: &T, bit_width: u32) -> u128 {
        let mut folder = IntegerFolder::default();
        element.hash(&mut folder);
        truncate(
            truncate(folder.value, self.modulus_bits.min(MAX_BIT_WIDTH)),
            bit_width,
        )
    }
}

/// A [`Hasher`] that shifts every written integer or byte into a 128-bit accumulator.
#[derive(Debug, Default)]
struct IntegerFolder {
    value: u128,
}

impl IntegerFolder {
    #[inline]
    fn push(&mut self, bits: u32, v: u128) {
        self.value = self.value.checked_shl(bits).unwrap_or(0) | v;
    }
}

impl Hasher for IntegerFolder {
    fn finish(&self) -> u64 {
        self.value as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(8, b as u128);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.push(u8::BITS, i as u128);
    }

    fn write_u16(&mut self, i: u16) {
        self.push(u16::BITS, i as u128);
    }

    fn write_u32(&mut self, i: u32) {
        self.push(u32::BITS, i as u128);
    }

    fn write_u64(&mut self, i: u64) {
        self.push(u64::BITS, i as u128);
    }

    fn write_u128(&mut self, i: u128) {
        self.push(u128::BITS, i);
    }

    fn write_usize(&mut self, i: usize) {
        self.push(usize::BITS, i as u128);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_hash_to_themselves() {
        let hash = ModulusHash::new(128);
        assert_eq!(hash.hash_bits(&0u8, 128), 0);
        assert_eq!(hash.hash_bits(&200u8, 128), 200);
        assert_eq!(hash.hash_bits(&123_456_789u64, 128), 123_456_789);
        assert_eq!(hash.hash_bits(&u128::MAX, 128), u128::MAX);
    }

    #[test]
    fn test_half_width() {
        let hash = ModulusHash::half_width(16);
        assert_eq!(hash.modulus_bits(), 8);
        assert_eq!(hash.hash_bits(&0x1234u32, 16), 0x34);
        // never reaches the upper half of the 16-bit range
        for i in 0..10_000u32 {
            assert!(hash.hash_bits(&i, 16) < 256);
        }
    }

    #[test]
    fn test_truncated_to_bit_width() {
        let hash = ModulusHash::new(64);
        assert_eq!(hash.hash_bits(&0xabcdu32, 8), 0xcd);
    }

    #[test]
    fn test_bytes_are_folded() {
        let mut folder = IntegerFolder::default();
        folder.write(&[0x01, 0x02]);
        assert_eq!(folder.value, 0x0102);
        assert_eq!(folder.finish(), 0x0102);
    }
}
