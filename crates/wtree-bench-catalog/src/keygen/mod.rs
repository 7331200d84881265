//! Seeded key generators for benchmark input.
//!
//! Each generator draws keys in `0..=max_value` from one of the catalog's
//! distributions (uniform, normal, bimodal), deterministically per seed so
//! runs are reproducible. [`for_generator_id`] maps the catalog's generator
//! ids (see [`crate::codes::generator_codes`]) to concrete generators.

pub mod keyspace;

pub use keyspace::KeySpace;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

use crate::error::{CatalogError, CatalogResult};

/// Largest key value generators default to: the full signed 32-bit space.
pub const DEFAULT_MAX_KEY: u64 = 2_147_483_647;

/// A deterministic source of benchmark keys in `0..=max_value`.
pub trait KeyGenerator {
    /// Draw the next key.
    fn next_key(&mut self) -> u64;

    /// Rewind to the start of the sequence for this seed.
    fn reset(&mut self);

    /// Upper bound of the key space (inclusive).
    fn max_value(&self) -> u64;
}

/// Uniformly distributed keys.
#[derive(Debug, Clone)]
pub struct UniformKeys {
    seed: u64,
    max_value: u64,
    rng: ChaCha8Rng,
}

impl UniformKeys {
    /// Create a uniform generator over `0..=max_value`.
    pub fn new(seed: u64, max_value: u64) -> Self {
        Self {
            seed,
            max_value,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl KeyGenerator for UniformKeys {
    fn next_key(&mut self) -> u64 {
        self.rng.gen_range(0..=self.max_value)
    }

    fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    fn max_value(&self) -> u64 {
        self.max_value
    }
}

/// Normally distributed keys around one mode.
///
/// Mean and deviation are given as fractions of `max_value`, matching how
/// drivers describe distributions independently of key width. Samples are
/// clamped to the key space.
#[derive(Debug, Clone)]
pub struct GaussKeys {
    seed: u64,
    max_value: u64,
    dist: Normal<f64>,
    rng: ChaCha8Rng,
}

impl GaussKeys {
    /// Create a gaussian generator. `mean_frac` and `std_frac` must be
    /// finite with `std_frac` non-negative.
    pub fn new(mean_frac: f64, std_frac: f64, seed: u64, max_value: u64) -> Self {
        let scale = max_value as f64;
        let dist = Normal::new(mean_frac * scale, std_frac * scale).unwrap();
        Self {
            seed,
            max_value,
            dist,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl KeyGenerator for GaussKeys {
    fn next_key(&mut self) -> u64 {
        let sample = self.dist.sample(&mut self.rng);
        sample.clamp(0.0, self.max_value as f64) as u64
    }

    fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    fn max_value(&self) -> u64 {
        self.max_value
    }
}

/// Keys drawn from two gaussian modes with a fair coin per draw.
///
/// Deviations are scaled by half the key space, keeping the two humps
/// distinguishable across widths. Samples are clamped to the key space.
#[derive(Debug, Clone)]
pub struct BimodalKeys {
    seed: u64,
    max_value: u64,
    dist1: Normal<f64>,
    dist2: Normal<f64>,
    rng: ChaCha8Rng,
}

impl BimodalKeys {
    /// Create a bimodal generator from two `(mean_frac, std_frac)` modes.
    pub fn new(
        mean1_frac: f64,
        std1_frac: f64,
        mean2_frac: f64,
        std2_frac: f64,
        seed: u64,
        max_value: u64,
    ) -> Self {
        let scale = max_value as f64;
        let half = (max_value >> 1) as f64;
        Self {
            seed,
            max_value,
            dist1: Normal::new(mean1_frac * scale, std1_frac * half).unwrap(),
            dist2: Normal::new(mean2_frac * scale, std2_frac * half).unwrap(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl KeyGenerator for BimodalKeys {
    fn next_key(&mut self) -> u64 {
        let sample = if self.rng.gen_bool(0.5) {
            self.dist1.sample(&mut self.rng)
        } else {
            self.dist2.sample(&mut self.rng)
        };
        sample.clamp(0.0, self.max_value as f64) as u64
    }

    fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    fn max_value(&self) -> u64 {
        self.max_value
    }
}

/// Wrapping counter, for ordered-insert scenarios in tests and examples.
///
/// Not reachable through generator ids; the code tables only cover the
/// random distributions.
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    max_value: u64,
    current: u64,
}

impl SequentialKeys {
    /// Create a counter over `1..max_value`, wrapping at the bound.
    pub fn new(max_value: u64) -> Self {
        Self {
            max_value,
            current: 0,
        }
    }
}

impl KeyGenerator for SequentialKeys {
    fn next_key(&mut self) -> u64 {
        self.current = (self.current + 1) % self.max_value;
        self.current
    }

    fn reset(&mut self) {
        self.current = 0;
    }

    fn max_value(&self) -> u64 {
        self.max_value
    }
}

/// Build the generator for a catalog generator id (0 uniform, 1 normal,
/// 2 bimodal), with the catalog's default distribution parameters.
pub fn for_generator_id(
    id: u8,
    seed: u64,
    max_value: u64,
) -> CatalogResult<Box<dyn KeyGenerator>> {
    match id {
        0 => Ok(Box::new(UniformKeys::new(seed, max_value))),
        1 => Ok(Box::new(GaussKeys::new(0.5, 0.15, seed, max_value))),
        2 => Ok(Box::new(BimodalKeys::new(
            0.25, 0.1, 0.75, 0.1, seed, max_value,
        ))),
        _ => Err(CatalogError::unknown_code("generator", &id.to_string())),
    }
}
