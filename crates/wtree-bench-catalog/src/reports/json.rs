//! JSON rendering of the catalog.

use super::CatalogSummary;

/// Serialize the catalog summary as pretty-printed JSON.
pub fn generate_json(summary: &CatalogSummary) -> String {
    // CatalogSummary contains only plain data; serialization cannot fail.
    serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
        tracing::error!("Catalog serialization failed: {}", e);
        String::from("{}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trips() {
        let summary = CatalogSummary::collect();
        let json = generate_json(&summary);
        let parsed: CatalogSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.size_codes, summary.size_codes);
        assert_eq!(parsed.routines, summary.routines);
        assert_eq!(parsed.presets, summary.presets);
    }

    #[test]
    fn test_json_contains_known_values() {
        let json = generate_json(&CatalogSummary::collect());
        assert!(json.contains("WTREE"));
        assert!(json.contains("5000000"));
        assert!(json.contains("TARGETBYTES"));
    }
}
