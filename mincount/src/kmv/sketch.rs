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

//! MinCount sketch implementation

use std::hash::Hash;

use crate::common::NumStdDev;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::HashFunction;
use crate::hash::MAX_BIT_WIDTH;
use crate::hash::MIN_BIT_WIDTH;
use crate::hash::Murmur3Hash;
use crate::hash::max_hash;
use crate::hash::truncate;
use crate::kmv::DEFAULT_BIT_WIDTH;
use crate::kmv::DEFAULT_K;
use crate::kmv::retained::RetainedValues;
use crate::kmv::retained::Slot;

/// Mutable k-minimum-values sketch.
///
/// Retains the `k` smallest distinct normalized hash values observed. While fewer than `k`
/// values are retained the sketch counts exactly; once saturated it estimates the number of
/// distinct elements as `(k - 1) / X_(k)` where `X_(k)` is the largest retained value.
#[derive(Debug, Clone)]
pub struct MinCountSketch<H = Murmur3Hash> {
    bit_width: u32,
    max_hash: u128,
    hash_function: H,
    retained: RetainedValues,
}

impl MinCountSketch {
    /// Create a sketch with the default hash function.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity) if `k < 1` and
    /// [`InvalidRange`](crate::error::ErrorKind::InvalidRange) if `bit_width` is not in
    /// `[1, 128]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::error::ErrorKind;
    /// # use mincount::kmv::MinCountSketch;
    /// assert!(MinCountSketch::new(10, 64).is_ok());
    /// assert_eq!(MinCountSketch::new(0, 64).unwrap_err().kind(), ErrorKind::InvalidCapacity);
    /// assert_eq!(MinCountSketch::new(10, 0).unwrap_err().kind(), ErrorKind::InvalidRange);
    /// ```
    pub fn new(k: usize, bit_width: u32) -> Result<Self, Error> {
        Self::with_hash_function(k, bit_width, Murmur3Hash::default())
    }

    /// Create a new builder for MinCountSketch
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::kmv::MinCountSketch;
    /// let sketch = MinCountSketch::builder().k(64).bit_width(32).build().unwrap();
    /// assert_eq!(sketch.k(), 64);
    /// assert_eq!(sketch.bit_width(), 32);
    /// ```
    pub fn builder() -> MinCountSketchBuilder {
        MinCountSketchBuilder::default()
    }
}

impl<H: HashFunction> MinCountSketch<H> {
    /// Create a sketch hashing elements with `hash_function`.
    ///
    /// # Errors
    ///
    /// Same as [`MinCountSketch::new`].
    pub fn with_hash_function(k: usize, bit_width: u32, hash_function: H) -> Result<Self, Error> {
        if k < 1 {
            return Err(Error::invalid_capacity(k));
        }
        if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&bit_width) {
            return Err(Error::invalid_range(bit_width));
        }

        Ok(Self {
            bit_width,
            max_hash: max_hash(bit_width),
            hash_function,
            retained: RetainedValues::new(k),
        })
    }

    /// Observe one element of the stream.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::kmv::MinCountSketch;
    /// let mut sketch = MinCountSketch::new(16, 64).unwrap();
    /// sketch.observe("apple");
    /// sketch.observe("apple");
    /// sketch.observe("banana");
    /// assert_eq!(sketch.estimate(), 2.0);
    /// ```
    pub fn observe<T: Hash>(&mut self, element: T) {
        let hash = self.hash_function.hash_bits(&element, self.bit_width);
        self.observe_hash(hash);
    }

    /// Observe a pre-computed hash. Bits above `bit_width` are ignored.
    pub fn observe_hash(&mut self, hash: u128) {
        let value = self.normalize(truncate(hash, self.bit_width));
        let was_saturated = self.is_saturated();
        if self.retained.try_insert(value) && !was_saturated && self.is_saturated() {
            tracing::debug!(
                k = self.k(),
                kth_value = ?self.kth_value(),
                "MinCount sketch saturated, switching to estimation"
            );
        }
    }

    /// Return cardinality estimate
    ///
    /// While fewer than `k` distinct hash values have been observed this is their exact count.
    /// Once saturated it is `(k - 1) / X_(k)`. A largest retained value of exactly `0` (only
    /// possible for `k == 1`) is treated as the smallest positive hash `1 / (2^bit_width - 1)`,
    /// so the result is always finite.
    pub fn estimate(&self) -> f64 {
        match self.kth_value() {
            None => self.retained.len() as f64,
            Some(kth) => {
                let kth = if kth > 0.0 { kth } else { self.normalize(1) };
                (self.k() - 1) as f64 / kth
            }
        }
    }

    /// Relative standard error of the estimate.
    ///
    /// Zero while the count is exact, `1 / sqrt(k - 2)` once saturated and infinite for
    /// saturated sketches with `k <= 2`.
    pub fn relative_standard_error(&self) -> f64 {
        if !self.is_saturated() {
            0.0
        } else if self.k() <= 2 {
            f64::INFINITY
        } else {
            1.0 / ((self.k() - 2) as f64).sqrt()
        }
    }

    /// Returns the approximate lower error bound given the specified number of Standard Deviations.
    ///
    /// Never below `k - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mincount::common::NumStdDev;
    /// use mincount::kmv::MinCountSketch;
    ///
    /// let mut sketch = MinCountSketch::new(256, 64).unwrap();
    /// for i in 0..10000 {
    ///     sketch.observe(i);
    /// }
    ///
    /// let estimate = sketch.estimate();
    /// assert!(sketch.lower_bound(NumStdDev::Two) <= estimate);
    /// assert!(estimate <= sketch.upper_bound(NumStdDev::Two));
    /// ```
    pub fn lower_bound(&self, num_std_dev: NumStdDev) -> f64 {
        let estimate = self.estimate();
        if !self.is_saturated() {
            return estimate;
        }
        let floor = (self.k() - 1) as f64;
        let rse = self.relative_standard_error();
        if rse.is_infinite() {
            return floor;
        }
        (estimate * (1.0 - num_std_dev.as_f64() * rse)).max(floor)
    }

    /// Returns the approximate upper error bound given the specified number of Standard Deviations.
    pub fn upper_bound(&self, num_std_dev: NumStdDev) -> f64 {
        let estimate = self.estimate();
        if !self.is_saturated() {
            return estimate;
        }
        let rse = self.relative_standard_error();
        if rse.is_infinite() {
            return f64::INFINITY;
        }
        estimate * (1.0 + num_std_dev.as_f64() * rse)
    }

    /// Fold the retained values of `other` into this sketch.
    ///
    /// Afterwards this sketch retains the `k` smallest distinct values of both, exactly as if it
    /// had observed both streams.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleSketches`](crate::error::ErrorKind::IncompatibleSketches) if `k`,
    /// the bit width or the hash function differ. The sketch is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::kmv::MinCountSketch;
    /// let mut left = MinCountSketch::new(16, 64).unwrap();
    /// let mut right = MinCountSketch::new(16, 64).unwrap();
    /// left.observe("apple");
    /// right.observe("apple");
    /// right.observe("banana");
    /// left.merge(&right).unwrap();
    /// assert_eq!(left.estimate(), 2.0);
    /// ```
    pub fn merge(&mut self, other: &Self) -> Result<(), Error>
    where
        H: PartialEq,
    {
        if self.k() != other.k() {
            return Err(Error::incompatible_sketches(
                "k",
                self.k() as u64,
                other.k() as u64,
            ));
        }
        if self.bit_width != other.bit_width {
            return Err(Error::incompatible_sketches(
                "bit width",
                self.bit_width as u64,
                other.bit_width as u64,
            ));
        }
        if self.hash_function != other.hash_function {
            return Err(Error::new(
                ErrorKind::IncompatibleSketches,
                "sketches were built with different hash functions",
            ));
        }

        let was_saturated = self.is_saturated();
        let mut accepted = 0usize;
        for &value in other.retained.values() {
            if self.retained.try_insert(value) {
                accepted += 1;
            } else if self.retained.threshold().is_some_and(|t| value >= t) {
                // other's values are ascending, nothing further can get in
                break;
            }
        }

        tracing::trace!(
            k = self.k(),
            accepted,
            offered = other.num_retained(),
            "merged MinCount sketch"
        );
        if !was_saturated && self.is_saturated() {
            tracing::debug!(k = self.k(), "MinCount sketch saturated by merge");
        }
        Ok(())
    }

    /// Return the nominal capacity k
    pub fn k(&self) -> usize {
        self.retained.capacity()
    }

    /// Return the hash bit width
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Return the hash function
    pub fn hash_function(&self) -> &H {
        &self.hash_function
    }

    /// Return number of filled slots
    pub fn num_retained(&self) -> usize {
        self.retained.len()
    }

    /// Check if no value has been retained
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    /// Check if all `k` slots are filled, i.e. the sketch is estimating rather than counting
    pub fn is_saturated(&self) -> bool {
        self.retained.is_full()
    }

    /// Return the largest retained value once saturated
    pub fn kth_value(&self) -> Option<f64> {
        self.retained.threshold()
    }

    /// Return the `k` logical slots, ascending
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::kmv::MinCountSketch;
    /// # use mincount::kmv::Slot;
    /// let mut sketch = MinCountSketch::new(3, 8).unwrap();
    /// sketch.observe_hash(51);
    /// let slots: Vec<Slot> = sketch.slots().collect();
    /// assert_eq!(slots, vec![Slot::Filled(0.2), Slot::Empty, Slot::Empty]);
    /// ```
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.retained.slots()
    }

    /// Return retained values, ascending
    pub fn values(&self) -> &[f64] {
        self.retained.values()
    }

    fn normalize(&self, hash: u128) -> f64 {
        hash as f64 / self.max_hash as f64
    }
}

impl<T: Hash, H: HashFunction> Extend<T> for MinCountSketch<H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.observe(element);
        }
    }
}

/// Builder for MinCountSketch
#[derive(Debug, Clone)]
pub struct MinCountSketchBuilder<H = Murmur3Hash> {
    k: usize,
    bit_width: u32,
    hash_function: H,
}

impl Default for MinCountSketchBuilder {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            bit_width: DEFAULT_BIT_WIDTH,
            hash_function: Murmur3Hash::default(),
        }
    }
}

impl<H: HashFunction> MinCountSketchBuilder<H> {
    /// Set the number of retained values k.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the hash bit width.
    pub fn bit_width(mut self, bit_width: u32) -> Self {
        self.bit_width = bit_width;
        self
    }

    /// Set the hash function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mincount::hash::WyHash64;
    /// # use mincount::kmv::MinCountSketch;
    /// let sketch = MinCountSketch::builder()
    ///     .hash_function(WyHash64::with_seed(7))
    ///     .bit_width(64)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sketch.hash_function().seed(), 7);
    /// ```
    pub fn hash_function<G: HashFunction>(self, hash_function: G) -> MinCountSketchBuilder<G> {
        MinCountSketchBuilder {
            k: self.k,
            bit_width: self.bit_width,
            hash_function,
        }
    }

    /// Build the MinCountSketch.
    ///
    /// # Errors
    ///
    /// Same as [`MinCountSketch::new`].
    pub fn build(self) -> Result<MinCountSketch<H>, Error> {
        MinCountSketch::with_hash_function(self.k, self.bit_width, self.hash_function)
    }
}
