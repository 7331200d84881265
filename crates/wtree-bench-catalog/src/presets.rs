//! Build-version tuning presets.
//!
//! Each preset names the compile-time knobs a build-configuration sweeper
//! varies for one build version, with the candidate values to try. Knob
//! order is preserved for report rendering.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::sizes::single_version_bytes;

/// Build versions with tuning presets, in release order.
pub const BUILD_IDS: [&str; 3] = ["010", "011", "020"];

/// One compile-time knob with its candidate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningKnob {
    /// Knob name as passed to the build (a preprocessor define).
    pub name: String,
    /// Candidate values to sweep, in sweep order.
    pub candidates: Vec<u64>,
}

impl TuningKnob {
    fn new(name: &str, candidates: Vec<u64>) -> Self {
        Self {
            name: name.to_string(),
            candidates,
        }
    }
}

/// Tuning preset for one build version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPreset {
    /// Build-version identifier.
    pub build_id: String,
    /// Knobs swept for this version, in declaration order.
    pub knobs: Vec<TuningKnob>,
}

impl BuildPreset {
    /// Candidate values for a knob name, if the preset sweeps it.
    pub fn knob(&self, name: &str) -> Option<&[u64]> {
        self.knobs
            .iter()
            .find(|k| k.name == name)
            .map(|k| k.candidates.as_slice())
    }
}

/// Look up the tuning preset for a build version.
///
/// Versions 010 and 011 sweep a single target byte size; 020 splits the
/// knob into separate node and block byte sizes.
pub fn preset_for(build_id: &str) -> CatalogResult<BuildPreset> {
    let knobs = match build_id {
        "010" | "011" => vec![TuningKnob::new("TARGETBYTES", single_version_bytes())],
        "020" => vec![
            TuningKnob::new("TARGET_NODE_BYTES", vec![128, 192, 256, 320]),
            TuningKnob::new("TARGET_BLOQ_BYTES", target_bloq_bytes()),
        ],
        _ => {
            return Err(CatalogError::UnknownBuildId {
                build_id: build_id.to_string(),
            })
        }
    };
    Ok(BuildPreset {
        build_id: build_id.to_string(),
        knobs,
    })
}

/// All presets in release order.
pub fn all_presets() -> Vec<BuildPreset> {
    BUILD_IDS
        .iter()
        .filter_map(|id| preset_for(id).ok())
        .collect()
}

// Block sizes 1KiB up to 29KiB in 4KiB steps.
fn target_bloq_bytes() -> Vec<u64> {
    (1..32).step_by(4).map(|i| 1024 * i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_010_targetbytes() {
        let preset = preset_for("010").unwrap();
        assert_eq!(
            preset.knob("TARGETBYTES").unwrap(),
            &[64, 128, 256, 512, 1024]
        );
    }

    #[test]
    fn test_preset_011_aliases_010() {
        assert_eq!(preset_for("011").unwrap().knobs, preset_for("010").unwrap().knobs);
    }

    #[test]
    fn test_preset_020_knobs() {
        let preset = preset_for("020").unwrap();
        assert_eq!(
            preset.knob("TARGET_NODE_BYTES").unwrap(),
            &[128, 192, 256, 320]
        );
        let bloq = preset.knob("TARGET_BLOQ_BYTES").unwrap();
        assert_eq!(bloq.len(), 8);
        assert_eq!(bloq[0], 1024);
        assert_eq!(bloq[1], 5120);
        assert_eq!(*bloq.last().unwrap(), 29696);
    }

    #[test]
    fn test_unknown_build_id() {
        let err = preset_for("999").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBuildId { .. }));
    }

    #[test]
    fn test_all_presets_in_release_order() {
        let ids: Vec<String> = all_presets().into_iter().map(|p| p.build_id).collect();
        assert_eq!(ids, vec!["010", "011", "020"]);
    }
}
