//! Error types for catalog lookups.
//!
//! The catalog is pure in-memory data, so the taxonomy is small: a lookup
//! either finds its entry or it doesn't, and routine construction either
//! satisfies its length invariant or it doesn't. Nothing here is transient.

use thiserror::Error;

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A short code was not present in the named expansion table.
    #[error("Unknown code '{code}' in {table} table")]
    UnknownCode { table: String, code: String },

    /// A build-version identifier has no tuning preset.
    #[error("Unknown build id '{build_id}'")]
    UnknownBuildId { build_id: String },

    /// Step-related sequences of a routine had mismatched lengths.
    #[error("Invariant violation in routine '{prefix}': {message}")]
    InvariantViolation { prefix: String, message: String },
}

impl CatalogError {
    /// Create an UnknownCode error for a given table.
    pub fn unknown_code(table: &str, code: &str) -> Self {
        Self::UnknownCode {
            table: table.to_string(),
            code: code.to_string(),
        }
    }

    /// Create an InvariantViolation error with context.
    pub fn invariant(prefix: &str, message: String) -> Self {
        Self::InvariantViolation {
            prefix: prefix.to_string(),
            message,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_display() {
        let err = CatalogError::unknown_code("size", "zz");
        assert_eq!(err.to_string(), "Unknown code 'zz' in size table");
    }

    #[test]
    fn test_invariant_display_names_prefix() {
        let err = CatalogError::invariant("mma", "expected 3 flags, got 2".to_string());
        assert!(err.to_string().contains("mma"));
        assert!(err.to_string().contains("expected 3 flags"));
    }
}
