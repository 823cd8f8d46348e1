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

//! # MinCount
//!
//! Bounded-memory distinct counting over unbounded streams.
//!
//! The [`kmv::MinCountSketch`] retains the `k` smallest hash values of the elements it observes
//! and estimates the number of distinct elements from the largest of them. Hash functions are
//! pluggable through the [`hash::HashFunction`] trait.
//!
//! ```
//! use mincount::kmv::MinCountSketch;
//!
//! let mut sketch = MinCountSketch::builder().k(128).build().unwrap();
//! for user in ["alice", "bob", "carol", "alice"] {
//!     sketch.observe(user);
//! }
//! assert_eq!(sketch.estimate(), 3.0);
//! ```
//!
//! Sketches built over disjoint partitions of a stream can be merged:
//!
//! ```
//! use mincount::kmv::MinCountSketch;
//!
//! let mut worker1 = MinCountSketch::new(64, 128).unwrap();
//! let mut worker2 = MinCountSketch::new(64, 128).unwrap();
//! worker1.extend(0..1000);
//! worker2.extend(1000..2000);
//! worker1.merge(&worker2).unwrap();
//! assert!(worker1.is_saturated());
//! ```

pub mod common;
pub mod error;
pub mod hash;
pub mod kmv;
