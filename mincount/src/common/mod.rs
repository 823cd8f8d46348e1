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

//! Common types shared across the crate.

/// Number of standard deviations used for confidence bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumStdDev {
    /// Roughly 68% confidence.
    One = 1,
    /// Roughly 95% confidence.
    Two = 2,
    /// Roughly 99.7% confidence.
    Three = 3,
}

impl NumStdDev {
    /// Return the number of standard deviations as a float multiplier.
    pub fn as_f64(self) -> f64 {
        self as u8 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        assert_eq!(NumStdDev::One.as_f64(), 1.0);
        assert_eq!(NumStdDev::Two.as_f64(), 2.0);
        assert_eq!(NumStdDev::Three.as_f64(), 3.0);
    }
}
