//! Short-code expansion tables.
//!
//! Drivers accept one- or two-letter codes on the command line ("a" for all
//! key widths, "u" for the uniform generator) and expand them here into
//! concrete parameter lists. Tables preserve insertion order, and aggregate
//! codes are computed from the individual entries rather than written as
//! literals, so they can never drift.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::sizes::{key_counts, size_vector};

/// An order-preserving mapping from short codes to parameter lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable<T> {
    name: String,
    entries: Vec<CodeEntry<T>>,
}

/// One code with the values it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry<T> {
    /// Short alphabetic code.
    pub code: String,
    /// Values the code expands to.
    pub values: Vec<T>,
}

impl<T> CodeTable<T> {
    /// Create an empty table with a name used in error messages.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Add an individual code entry. Keys are expected to be unique; a
    /// duplicate would shadow nothing since lookups take the first match.
    pub fn entry(mut self, code: &str, values: Vec<T>) -> Self {
        debug_assert!(self.entries.iter().all(|e| e.code != code));
        self.entries.push(CodeEntry {
            code: code.to_string(),
            values,
        });
        self
    }

    /// Expand a code into its parameter list.
    pub fn expand(&self, code: &str) -> CatalogResult<&[T]> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.values.as_slice())
            .ok_or_else(|| CatalogError::unknown_code(&self.name, code))
    }

    /// Table name, as used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CodeEntry<T>] {
        &self.entries
    }
}

impl<T: Clone> CodeTable<T> {
    /// Append an aggregate code expanding to the concatenation, in table
    /// order, of every entry added so far.
    pub fn with_aggregate(self, code: &str) -> Self {
        let aggregate: Vec<T> = self
            .entries
            .iter()
            .flat_map(|e| e.values.iter().cloned())
            .collect();
        self.entry(code, aggregate)
    }
}

/// Key width codes: byte widths of the benchmarked key types.
///
/// "s"/"i"/"l" select 16/32/64-bit keys; "a" is all of them.
pub fn key_width_codes() -> CodeTable<u8> {
    CodeTable::new("key width")
        .entry("s", vec![2])
        .entry("i", vec![4])
        .entry("l", vec![8])
        .with_aggregate("a")
}

/// Generator codes: ids into the generator distribution set.
///
/// "u"/"n"/"b" select uniform/normal/bimodal; "a" is all of them. Ids index
/// [`crate::labels::GENERATOR_NAMES`].
pub fn generator_codes() -> CodeTable<u8> {
    CodeTable::new("generator")
        .entry("u", vec![0])
        .entry("n", vec![1])
        .entry("b", vec![2])
        .with_aggregate("a")
}

/// Key-count vector codes: which size sweep a run iterates over.
///
/// No aggregate here; each code is a standalone sweep.
pub fn key_count_codes() -> CodeTable<u64> {
    CodeTable::new("key count")
        .entry("n", key_counts())
        .entry("s", key_counts()[4..10].to_vec())
        .entry("t", size_vector(16, 21))
        .entry("u", size_vector(16, 31))
}
