//! Expansion of shorthand code triples into concrete run parameters.
//!
//! A driver invocation names one key-width code, one generator code, and one
//! size code; expanding the triple yields everything the driver needs to
//! enumerate its runs.

use serde::{Deserialize, Serialize};

use crate::codes::{generator_codes, key_width_codes};
use crate::error::CatalogResult;
use crate::sizes::size_for;

/// Concrete parameters for one benchmark invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Key byte widths to benchmark.
    pub key_widths: Vec<u8>,
    /// Generator distribution ids to benchmark.
    pub generator_ids: Vec<u8>,
    /// Absolute element count per run.
    pub size: u64,
}

impl RunPlan {
    /// Expand a `(type, generator, size)` code triple.
    pub fn expand(type_code: &str, gen_code: &str, size_code: &str) -> CatalogResult<Self> {
        let key_widths = key_width_codes().expand(type_code)?.to_vec();
        let generator_ids = generator_codes().expand(gen_code)?.to_vec();
        let size = size_for(size_code)?;
        Ok(Self {
            key_widths,
            generator_ids,
            size,
        })
    }

    /// All `(width, generator)` pairs, widths-major, matching the nesting
    /// order of the driver's run loop.
    pub fn runs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.key_widths.iter().flat_map(move |&w| {
            self.generator_ids.iter().map(move |&g| (w, g))
        })
    }
}
