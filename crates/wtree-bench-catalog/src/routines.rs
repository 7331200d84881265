//! Benchmark routine metadata: phase names, short labels, and axis flags.
//!
//! A routine is a fixed sequence of timed phases (insert, search, remove...).
//! The driver iterates the phases in order; the plotting component uses the
//! short labels for legends and the minmax flags to decide which phases
//! bound the y-axis.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Routine families in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Routine {
    /// Full comparison run: staged inserts, searches, removes.
    Full,
    /// Min-extraction run with interspersed pops.
    Mma,
    /// Min/max-extraction run with popmins and popmaxs.
    Mmc,
}

impl Routine {
    /// All routines in catalog order.
    pub fn all() -> &'static [Routine] {
        &[Routine::Full, Routine::Mma, Routine::Mmc]
    }

    /// Result-file prefix of this routine family.
    pub fn prefix(self) -> &'static str {
        match self {
            Routine::Full => "full",
            Routine::Mma => "mma",
            Routine::Mmc => "mmc",
        }
    }

    /// Build the metadata record for this routine.
    pub fn metadata(self) -> RoutineMetadata {
        match self {
            Routine::Full => RoutineMetadata::from_static(
                "full",
                &[
                    "Insert from 0 to 0.75N",
                    "Insert from 0.75N to N",
                    "Search Existent 0.25N Keys",
                    "Search Inexistent 0.25N Keys",
                    "Remove from 0.25N",
                    "Random Search 0.25N Keys",
                ],
                &[
                    "Insert from empty",
                    "Populated Insert",
                    "Search existent keys",
                    "Search non-existent keys",
                    "Remove",
                    "Random Search",
                ],
                &[true; 6],
            ),
            Routine::Mma => RoutineMetadata::from_static(
                "mma",
                &["Insert N elements", "Interpersed 0.3N Pops", "Insert 0.3N elements"],
                &["Insert N", "0.3N Pops", "Insert 0.3N"],
                &[true, false, true],
            ),
            Routine::Mmc => RoutineMetadata::from_static(
                "mmc",
                &[
                    "Insert N elements",
                    "0.15N Popmins",
                    "0.15N Popmaxs",
                    "Insert 0.3N elements",
                ],
                &["Insert N", "0.15N Popmins", "0.15N Popmaxs", "Insert 0.3N"],
                &[true, false, false, true],
            ),
        }
    }
}

impl std::fmt::Display for Routine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Metadata for one benchmark routine family.
///
/// The three step-related sequences always have equal length; [`new`]
/// enforces this at construction.
///
/// [`new`]: RoutineMetadata::new
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineMetadata {
    /// Identifier of the routine family (result-file prefix).
    pub prefix: String,
    /// Full phase descriptions, in execution order.
    pub step_names: Vec<String>,
    /// Abbreviated phase labels, same length and order as `step_names`.
    pub short_stepnames: Vec<String>,
    /// Whether each phase contributes to the plotted axis min/max range.
    pub minmax_flags: Vec<bool>,
}

impl RoutineMetadata {
    /// Create routine metadata, enforcing the equal-length invariant.
    pub fn new(
        prefix: impl Into<String>,
        step_names: Vec<String>,
        short_stepnames: Vec<String>,
        minmax_flags: Vec<bool>,
    ) -> CatalogResult<Self> {
        let prefix = prefix.into();
        if step_names.len() != short_stepnames.len() || step_names.len() != minmax_flags.len() {
            return Err(CatalogError::invariant(
                &prefix,
                format!(
                    "step sequences have mismatched lengths: {} names, {} short names, {} flags",
                    step_names.len(),
                    short_stepnames.len(),
                    minmax_flags.len()
                ),
            ));
        }
        Ok(Self {
            prefix,
            step_names,
            short_stepnames,
            minmax_flags,
        })
    }

    /// Number of timed phases in this routine.
    pub fn steps(&self) -> usize {
        self.step_names.len()
    }

    /// Indices of the phases that bound the plotted axis range.
    pub fn minmax_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.minmax_flags
            .iter()
            .enumerate()
            .filter(|(_, &flag)| flag)
            .map(|(i, _)| i)
    }

    // Catalog entries are written with visibly equal lengths, so this skips
    // the runtime check that `new` performs on caller-supplied data.
    fn from_static(
        prefix: &str,
        step_names: &[&str],
        short_stepnames: &[&str],
        minmax_flags: &[bool],
    ) -> Self {
        debug_assert_eq!(step_names.len(), short_stepnames.len());
        debug_assert_eq!(step_names.len(), minmax_flags.len());
        Self {
            prefix: prefix.to_string(),
            step_names: step_names.iter().map(|s| s.to_string()).collect(),
            short_stepnames: short_stepnames.iter().map(|s| s.to_string()).collect(),
            minmax_flags: minmax_flags.to_vec(),
        }
    }
}

/// Look up the metadata for a routine prefix.
pub fn routine_for(prefix: &str) -> CatalogResult<RoutineMetadata> {
    Routine::all()
        .iter()
        .find(|r| r.prefix() == prefix)
        .map(|r| r.metadata())
        .ok_or_else(|| CatalogError::unknown_code("routine", prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_routines_are_consistent() {
        for routine in Routine::all() {
            let meta = routine.metadata();
            assert_eq!(meta.prefix, routine.prefix());
            assert_eq!(meta.steps(), meta.short_stepnames.len());
            assert_eq!(meta.steps(), meta.minmax_flags.len());
        }
    }

    #[test]
    fn test_full_routine_shape() {
        let meta = Routine::Full.metadata();
        assert_eq!(meta.steps(), 6);
        assert!(meta.minmax_flags.iter().all(|&f| f));
    }

    #[test]
    fn test_mma_construction_and_flags() {
        let meta = RoutineMetadata::new(
            "mma",
            vec![
                "Insert N elements".to_string(),
                "Interpersed 0.3N Pops".to_string(),
                "Insert 0.3N elements".to_string(),
            ],
            vec![
                "Insert N".to_string(),
                "0.3N Pops".to_string(),
                "Insert 0.3N".to_string(),
            ],
            vec![true, false, true],
        )
        .unwrap();
        assert_eq!(meta.steps(), 3);
        assert_eq!(meta.minmax_steps().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_mismatched_flags_rejected() {
        let err = RoutineMetadata::new(
            "mma",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![true, false],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvariantViolation { .. }));
    }

    #[test]
    fn test_routine_for_lookup() {
        assert_eq!(routine_for("mmc").unwrap().steps(), 4);
        assert!(routine_for("nope").is_err());
    }
}
