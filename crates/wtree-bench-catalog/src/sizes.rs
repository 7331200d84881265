//! Benchmark input sizing: power-of-two size vectors and absolute size codes.
//!
//! Size vectors parametrize how many keys (or how many bytes) each benchmark
//! iteration works with. Absolute size codes are the shorthand a driver
//! accepts on the command line ("m" for five million keys, and so on).

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Powers of two from `2^range_start` up to `2^(range_end - 1)` inclusive.
///
/// A malformed range (`range_start >= range_end`) yields an empty vector;
/// there is no error path.
pub fn size_vector(range_start: u32, range_end: u32) -> Vec<u64> {
    (range_start..range_end).map(|exp| 1u64 << exp).collect()
}

/// Key counts swept by the standard comparison runs: 8 up to 32768.
pub fn key_counts() -> Vec<u64> {
    size_vector(3, 16)
}

/// Target byte sizes swept by single-version runs: 64 up to 1024.
pub fn single_version_bytes() -> Vec<u64> {
    size_vector(6, 11)
}

/// Size codes in documented order, smallest to largest magnitude.
pub const SIZE_CODE_ORDER: [&str; 7] = ["s", "n", "m", "b", "l", "xs", "xl"];

/// Absolute element count for a size code.
///
/// Codes follow [`SIZE_CODE_ORDER`] and are monotonically increasing in that
/// order. "xl" is the full signed 32-bit key space.
pub fn size_for(code: &str) -> CatalogResult<u64> {
    match code {
        "s" => Ok(100_000),
        "n" => Ok(1_000_000),
        "m" => Ok(5_000_000),
        "b" => Ok(10_000_000),
        "l" => Ok(50_000_000),
        "xs" => Ok(100_000_000),
        "xl" => Ok(2_147_483_647),
        _ => Err(CatalogError::unknown_code("size", code)),
    }
}

/// A size code paired with its absolute count, for report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCode {
    /// Short alphabetic code.
    pub code: String,
    /// Absolute element count the code expands to.
    pub count: u64,
}

/// All size codes with their counts, in documented order.
pub fn size_codes() -> Vec<SizeCode> {
    SIZE_CODE_ORDER
        .iter()
        .map(|&code| SizeCode {
            code: code.to_string(),
            // Codes in SIZE_CODE_ORDER always resolve.
            count: size_for(code).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_vector_powers() {
        let v = size_vector(3, 16);
        assert_eq!(v.len(), 13);
        assert_eq!(v[0], 8);
        assert_eq!(v[12], 32768);
        for (i, &val) in v.iter().enumerate() {
            assert_eq!(val, 1u64 << (3 + i as u32));
        }
    }

    #[test]
    fn test_size_vector_malformed_range_is_empty() {
        assert!(size_vector(5, 5).is_empty());
        assert!(size_vector(8, 3).is_empty());
    }

    #[test]
    fn test_key_counts_span() {
        let kv = key_counts();
        assert_eq!(kv.first(), Some(&8));
        assert_eq!(kv.last(), Some(&32768));
    }

    #[test]
    fn test_single_version_bytes_span() {
        assert_eq!(single_version_bytes(), vec![64, 128, 256, 512, 1024]);
    }

    #[test]
    fn test_size_for_known_codes() {
        assert_eq!(size_for("m").unwrap(), 5_000_000);
        assert_eq!(size_for("xl").unwrap(), 2_147_483_647);
    }

    #[test]
    fn test_size_for_unknown_code() {
        let err = size_for("zz").unwrap_err();
        assert_eq!(err, CatalogError::unknown_code("size", "zz"));
    }

    #[test]
    fn test_size_codes_monotonic_in_documented_order() {
        let codes = size_codes();
        assert_eq!(codes.len(), SIZE_CODE_ORDER.len());
        for pair in codes.windows(2) {
            assert!(pair[0].count < pair[1].count);
        }
    }
}
