//! Report generation for the parameter catalog.
//!
//! JSON for tooling that consumes the catalog programmatically, Markdown for
//! documentation.

pub mod json;
pub mod markdown;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::codes::{generator_codes, key_count_codes, key_width_codes, CodeTable};
use crate::labels::{GENERATOR_NAMES, KEY_WIDTH_NAMES, PALETTE, RIVAL_NAMES, STRUCT_NAMES};
use crate::presets::{all_presets, BuildPreset};
use crate::routines::{Routine, RoutineMetadata};
use crate::sizes::{key_counts, size_codes, SizeCode};

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON for programmatic consumption.
    Json,
    /// Markdown tables for documentation.
    Markdown,
    /// Both formats.
    Both,
}

/// Everything in the catalog, gathered for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// All benchmarked structure names, subject first.
    pub struct_names: Vec<String>,
    /// Rival structure names.
    pub rival_names: Vec<String>,
    /// Key width names.
    pub key_width_names: Vec<String>,
    /// Generator distribution names.
    pub generator_names: Vec<String>,
    /// Legend colormap name.
    pub palette: String,
    /// Standard key-count sweep.
    pub key_counts: Vec<u64>,
    /// Size codes with absolute counts, in documented order.
    pub size_codes: Vec<SizeCode>,
    /// Key width expansion table.
    pub key_width_codes: CodeTable<u8>,
    /// Generator expansion table.
    pub generator_codes: CodeTable<u8>,
    /// Key-count-vector expansion table.
    pub key_count_codes: CodeTable<u64>,
    /// Routine metadata, in catalog order.
    pub routines: Vec<RoutineMetadata>,
    /// Build tuning presets, in release order.
    pub presets: Vec<BuildPreset>,
}

impl CatalogSummary {
    /// Gather the whole catalog.
    pub fn collect() -> Self {
        Self {
            struct_names: STRUCT_NAMES.iter().map(|s| s.to_string()).collect(),
            rival_names: RIVAL_NAMES.iter().map(|s| s.to_string()).collect(),
            key_width_names: KEY_WIDTH_NAMES.iter().map(|s| s.to_string()).collect(),
            generator_names: GENERATOR_NAMES.iter().map(|s| s.to_string()).collect(),
            palette: PALETTE.to_string(),
            key_counts: key_counts(),
            size_codes: size_codes(),
            key_width_codes: key_width_codes(),
            generator_codes: generator_codes(),
            key_count_codes: key_count_codes(),
            routines: Routine::all().iter().map(|r| r.metadata()).collect(),
            presets: all_presets(),
        }
    }
}

/// Output of report generation; unrequested formats are `None`.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    /// JSON content, if requested.
    pub json: Option<String>,
    /// Markdown content, if requested.
    pub markdown: Option<String>,
}

/// Catalog report generator.
pub struct CatalogReport {
    summary: CatalogSummary,
}

impl CatalogReport {
    /// Create a report over the full catalog.
    pub fn new() -> Self {
        Self {
            summary: CatalogSummary::collect(),
        }
    }

    /// The gathered catalog data.
    pub fn summary(&self) -> &CatalogSummary {
        &self.summary
    }

    /// Generate report content in the requested format.
    pub fn generate(&self, format: ReportFormat) -> ReportOutput {
        ReportOutput {
            json: matches!(format, ReportFormat::Json | ReportFormat::Both)
                .then(|| json::generate_json(&self.summary)),
            markdown: matches!(format, ReportFormat::Markdown | ReportFormat::Both)
                .then(|| markdown::generate_markdown(&self.summary)),
        }
    }

    /// Write report file(s) next to `base_path`, switching the extension
    /// per format.
    pub fn write_to_file(&self, format: ReportFormat, base_path: &Path) -> std::io::Result<()> {
        let output = self.generate(format);

        if let Some(json_content) = output.json {
            let json_path = base_path.with_extension("json");
            std::fs::write(&json_path, json_content)?;
            tracing::info!("Saved JSON catalog report to {}", json_path.display());
        }

        if let Some(md_content) = output.markdown {
            let md_path = base_path.with_extension("md");
            std::fs::write(&md_path, md_content)?;
            tracing::info!("Saved markdown catalog report to {}", md_path.display());
        }

        Ok(())
    }
}

impl Default for CatalogReport {
    fn default() -> Self {
        Self::new()
    }
}
