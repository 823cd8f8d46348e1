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

use std::iter;

/// One logical slot of the retained set.
///
/// Slots are ordered with every `Filled` value before `Empty`, so a sorted slot sequence lists
/// the retained values ascending followed by the unfilled slots.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Slot {
    /// A retained normalized hash value in `[0, 1]`.
    Filled(f64),
    /// No value retained yet.
    Empty,
}

impl Slot {
    /// Return the retained value, or `None` for an empty slot.
    pub fn value(self) -> Option<f64> {
        match self {
            Slot::Filled(v) => Some(v),
            Slot::Empty => None,
        }
    }

    /// Check if the slot holds no value.
    pub fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// The `capacity` smallest distinct values seen so far, sorted ascending.
///
/// Only filled slots are stored; the remaining `capacity - len` slots are implicitly empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RetainedValues {
    capacity: usize,
    values: Vec<f64>,
}

impl RetainedValues {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Value of the last slot, `None` while it is still empty.
    pub fn threshold(&self) -> Option<f64> {
        if self.is_full() {
            self.values.last().copied()
        } else {
            None
        }
    }

    /// Insert `value` unless it is already retained or not smaller than the threshold.
    ///
    /// Returns true if the value was inserted.
    pub fn try_insert(&mut self, value: f64) -> bool {
        if self.threshold().is_some_and(|threshold| value >= threshold) {
            return false;
        }

        let Err(index) = self.values.binary_search_by(|v| v.total_cmp(&value)) else {
            // Already retained
            return false;
        };

        if self.is_full() {
            self.values.pop();
        }
        self.values.insert(index, value);
        true
    }

    /// Filled values, ascending.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// All `capacity` logical slots, ascending.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.values
            .iter()
            .map(|&v| Slot::Filled(v))
            .chain(iter::repeat_n(Slot::Empty, self.capacity - self.values.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        assert!(Slot::Filled(0.2) < Slot::Filled(0.3));
        assert!(Slot::Filled(1.0) < Slot::Empty);
        assert_eq!(Slot::Empty.value(), None);
        assert_eq!(Slot::Filled(0.5).value(), Some(0.5));
        assert!(Slot::Empty.is_empty());
        assert!(!Slot::Filled(0.0).is_empty());
    }

    #[test]
    fn test_fill_then_evict_largest() {
        let mut retained = RetainedValues::new(3);
        assert!(retained.is_empty());
        assert!(retained.try_insert(0.5));
        assert!(retained.try_insert(0.1));
        assert_eq!(retained.threshold(), None);
        assert!(retained.try_insert(0.9));
        assert_eq!(retained.threshold(), Some(0.9));

        assert!(retained.try_insert(0.3));
        assert_eq!(retained.values(), &[0.1, 0.3, 0.5]);
        assert_eq!(retained.len(), 3);
        assert_eq!(retained.capacity(), 3);
    }

    #[test]
    fn test_rejects_duplicates_and_large_values() {
        let mut retained = RetainedValues::new(2);
        assert!(retained.try_insert(0.4));
        assert!(!retained.try_insert(0.4));
        assert!(retained.try_insert(0.2));
        assert!(!retained.try_insert(0.4));
        assert!(!retained.try_insert(0.7));
        assert!(!retained.try_insert(0.2));
        assert_eq!(retained.values(), &[0.2, 0.4]);
    }

    #[test]
    fn test_one_is_a_real_value() {
        let mut retained = RetainedValues::new(2);
        assert!(retained.try_insert(1.0));
        assert_eq!(
            retained.slots().collect::<Vec<_>>(),
            vec![Slot::Filled(1.0), Slot::Empty]
        );
        assert!(retained.try_insert(0.0));
        assert!(retained.is_full());
        assert_eq!(retained.threshold(), Some(1.0));
    }
}
