//! # WTREE Benchmark Parameter Catalog
//!
//! Static configuration data parametrizing benchmark iteration and plotting
//! for tree structure comparisons: the subject WTREE against BST, Red-Black
//! tree, and B-Tree baselines.
//!
//! The catalog holds size vectors, label sets, routine phase metadata,
//! short-code expansion tables, and build-time tuning presets. Benchmark
//! drivers and plotting tools read it by name; nothing here runs a
//! benchmark or draws a chart.
//!
//! ## Size Codes
//!
//! | Code | Elements |
//! |------|---------------|
//! | s | 100,000 |
//! | n | 1,000,000 |
//! | m | 5,000,000 |
//! | b | 10,000,000 |
//! | l | 50,000,000 |
//! | xs | 100,000,000 |
//! | xl | 2,147,483,647 |
//!
//! ## Routines
//!
//! | Prefix | Steps | Description |
//! |--------|-------|-------------|
//! | full | 6 | Staged inserts, searches, removes |
//! | mma | 3 | Inserts with interspersed pops |
//! | mmc | 4 | Inserts with popmins and popmaxs |
//!
//! ## Usage
//!
//! ```
//! use wtree_bench_catalog::{routine_for, size_for, RunPlan};
//!
//! let plan = RunPlan::expand("a", "u", "m").unwrap();
//! assert_eq!(plan.key_widths, vec![2, 4, 8]);
//! assert_eq!(plan.size, size_for("m").unwrap());
//! assert_eq!(routine_for("full").unwrap().steps(), 6);
//! ```

pub mod codes;
pub mod error;
pub mod keygen;
pub mod labels;
pub mod plan;
pub mod presets;
pub mod reports;
pub mod routines;
pub mod sizes;

// Re-export key types for convenience
pub use codes::{generator_codes, key_count_codes, key_width_codes, CodeTable};
pub use error::{CatalogError, CatalogResult};
pub use keygen::{for_generator_id, KeyGenerator, KeySpace};
pub use plan::RunPlan;
pub use presets::{preset_for, BuildPreset, TuningKnob};
pub use reports::{CatalogReport, CatalogSummary, ReportFormat};
pub use routines::{routine_for, Routine, RoutineMetadata};
pub use sizes::{key_counts, size_for, size_vector, single_version_bytes};
