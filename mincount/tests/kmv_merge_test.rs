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

use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use mincount::error::ErrorKind;
use mincount::hash::Murmur3Hash;
use mincount::kmv::MinCountSketch;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn sketch_of(k: usize, elements: impl IntoIterator<Item = u64>) -> MinCountSketch {
    let mut sketch = MinCountSketch::new(k, 64).unwrap();
    sketch.extend(elements);
    sketch
}

#[test]
fn test_merge_equals_single_pass_over_any_interleaving() {
    let mut rng = StdRng::seed_from_u64(2024);
    for k in [1usize, 3, 64] {
        let left = sketch_of(k, (0..3000).filter(|i| i % 2 == 0));
        let right = sketch_of(k, (0..3000).filter(|i| i % 2 == 1));

        let mut merged = left.clone();
        merged.merge(&right).unwrap();

        let mut stream: Vec<u64> = (0..3000).collect();
        for _ in 0..3 {
            stream.shuffle(&mut rng);
            let single = sketch_of(k, stream.iter().copied());
            assert_eq!(merged.values(), single.values());
            assert_eq!(merged.estimate(), single.estimate());
        }
    }
}

#[test]
fn test_merge_is_commutative_and_associative() {
    let a = sketch_of(32, 0..500);
    let b = sketch_of(32, 500..1200);
    let c = sketch_of(32, 1200..1300);

    let mut ab = a.clone();
    ab.merge(&b).unwrap();
    let mut ba = b.clone();
    ba.merge(&a).unwrap();
    assert_eq!(ab.values(), ba.values());

    let mut ab_c = ab.clone();
    ab_c.merge(&c).unwrap();
    let mut bc = b.clone();
    bc.merge(&c).unwrap();
    let mut a_bc = a.clone();
    a_bc.merge(&bc).unwrap();
    assert_eq!(ab_c.values(), a_bc.values());
}

#[test]
fn test_merge_filling_sketches_counts_union() {
    let mut left = sketch_of(100, 0..30);
    let right = sketch_of(100, 20..50);
    left.merge(&right).unwrap();
    assert!(!left.is_saturated());
    assert_eq!(left.estimate(), 50.0);
}

#[test]
fn test_merge_with_empty() {
    let mut sketch = sketch_of(16, 0..100);
    let before = sketch.values().to_vec();
    sketch.merge(&sketch_of(16, [])).unwrap();
    assert_eq!(sketch.values(), before.as_slice());

    let mut empty = sketch_of(16, []);
    empty.merge(&sketch).unwrap();
    assert_eq!(empty.values(), before.as_slice());
    assert!(empty.is_saturated());
}

#[test]
fn test_merge_rejects_different_k() {
    let mut left = sketch_of(16, 0..100);
    let right = sketch_of(32, 100..200);
    let before = left.values().to_vec();

    let err = left.merge(&right).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IncompatibleSketches));
    assert_that!(err.message(), contains_substring("incompatible k"));
    assert_that!(
        err.to_string(),
        contains_substring("context: { expected: 16, found: 32 }")
    );
    assert_eq!(left.values(), before.as_slice());
}

#[test]
fn test_merge_rejects_different_bit_width() {
    let mut left = MinCountSketch::new(16, 64).unwrap();
    let right = MinCountSketch::new(16, 32).unwrap();
    let err = left.merge(&right).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IncompatibleSketches));
    assert_that!(err.message(), contains_substring("incompatible bit width"));
    assert_that!(
        err.to_string(),
        contains_substring("context: { expected: 64, found: 32 }")
    );
}

#[test]
fn test_merge_rejects_different_seed() {
    let mut left = MinCountSketch::with_hash_function(16, 64, Murmur3Hash::with_seed(1)).unwrap();
    let right = MinCountSketch::with_hash_function(16, 64, Murmur3Hash::with_seed(2)).unwrap();
    let err = left.merge(&right).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IncompatibleSketches));
    assert_that!(err.message(), contains_substring("different hash functions"));
}
