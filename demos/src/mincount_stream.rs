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

//! Example demonstrating MinCount sketch usage

use mincount::common::NumStdDev;
use mincount::error::Error;
use mincount::hash::ModulusHash;
use mincount::kmv::MinCountSketch;

fn main() -> Result<(), Error> {
    println!("=== MinCount Sketch Example ===\n");

    // Example 1: exact counting while filling
    println!("1. Fewer distinct values than k:");
    let mut sketch = MinCountSketch::new(256, 128)?;
    for i in 0..100 {
        sketch.observe(format!("item_{}", i));
    }
    sketch.observe("duplicate_item");
    sketch.observe("duplicate_item");
    println!("   Estimate: {:.2}", sketch.estimate());
    println!("   Saturated: {}", sketch.is_saturated());
    println!();

    // Example 2: estimation once saturated
    println!("2. Add more data to saturate the sketch:");
    for i in 0..50_000 {
        sketch.observe(format!("item_{}", i));
    }
    println!("   Estimate: {:.2}", sketch.estimate());
    println!("   k-th value: {:.8}", sketch.kth_value().unwrap_or(1.0));
    println!(
        "   95% bounds: [{:.2}, {:.2}]",
        sketch.lower_bound(NumStdDev::Two),
        sketch.upper_bound(NumStdDev::Two)
    );
    println!();

    // Example 3: merging partitions
    println!("3. Merge two partitions:");
    let mut left = MinCountSketch::new(256, 128)?;
    let mut right = MinCountSketch::new(256, 128)?;
    left.extend(0..30_000u64);
    right.extend(20_000..60_000u64);
    left.merge(&right)?;
    println!("   Merged estimate: {:.2} (actual 60000)", left.estimate());
    println!();

    // Example 4: a poor hash function
    println!("4. Modulus hash baseline:");
    let mut skewed = MinCountSketch::builder()
        .k(64)
        .bit_width(32)
        .hash_function(ModulusHash::half_width(32))
        .build()?;
    skewed.extend(0..1_000_000u64);
    println!(
        "   Estimate: {:.2} (actual 1000000, hash values crowd the bottom of the range)",
        skewed.estimate()
    );

    Ok(())
}
