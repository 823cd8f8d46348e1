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

//! Error types for mincount operations

use std::fmt;

/// ErrorKind is all kinds of Error of mincount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The sketch capacity `k` is smaller than one.
    InvalidCapacity,
    /// The hash bit width is outside `[1, 128]`.
    InvalidRange,
    /// Two sketches with different `k`, bit width or hash function cannot be merged.
    IncompatibleSketches,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidCapacity => "InvalidCapacity",
            ErrorKind::InvalidRange => "InvalidRange",
            ErrorKind::IncompatibleSketches => "IncompatibleSketches",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all mincount functions.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::default(),
        }
    }

    /// Add more context in error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mincount::error::Error;
    /// use mincount::error::ErrorKind;
    ///
    /// let error = Error::new(ErrorKind::InvalidCapacity, "k must be at least 1").with_context("k", 0);
    /// assert_eq!(error.to_string(), "InvalidCapacity, context: { k: 0 } => k must be at least 1");
    /// ```
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

// Constructors used across the crate.
impl Error {
    pub(crate) fn invalid_capacity(k: usize) -> Self {
        Self::new(ErrorKind::InvalidCapacity, "k must be at least 1").with_context("k", k)
    }

    pub(crate) fn invalid_range(bit_width: u32) -> Self {
        Self::new(
            ErrorKind::InvalidRange,
            format!(
                "bit width must be in [{}, {}]",
                crate::hash::MIN_BIT_WIDTH,
                crate::hash::MAX_BIT_WIDTH
            ),
        )
        .with_context("bit_width", bit_width)
    }

    pub(crate) fn incompatible_sketches(field: &'static str, expected: u64, found: u64) -> Self {
        Self::new(
            ErrorKind::IncompatibleSketches,
            format!("incompatible {field}: expected {expected}, got {found}"),
        )
        .with_context("expected", expected)
        .with_context("found", found)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
