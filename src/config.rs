//! Mapper Configuration
//!
//! Construction-time parameters for [`AttractorMapper`](crate::AttractorMapper).
//! Defaults reproduce the reference system: four attractors in a 2-D
//! phase space drawn from seed 42, integrated for at most 100 steps.

use serde::{Deserialize, Serialize};

use crate::dynamics::DEFAULT_MAX_STEPS;
use crate::error::{MapperError, MapperResult};

/// Seed of the reference attractor set.
pub const DEFAULT_SEED: u64 = 42;

/// Runtime configuration for an attractor mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Number of attractors in phase space.
    /// Default: 4.
    pub n_attractors: usize,

    /// Phase space dimensionality.
    /// Default: 2.
    pub dimensions: usize,

    /// MT19937 seed for attractor generation (must fit in 32 bits).
    /// Default: 42.
    pub seed: u64,

    /// Step budget used by `converge` when no override is given.
    /// Default: 100.
    pub max_steps: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            n_attractors: 4,
            dimensions: 2,
            seed: DEFAULT_SEED,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl MapperConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> MapperResult<()> {
        if self.n_attractors == 0 {
            return Err(MapperError::Config(
                "n_attractors must be >= 1".to_string(),
            ));
        }
        if self.dimensions == 0 {
            return Err(MapperError::Config(
                "dimensions must be >= 1".to_string(),
            ));
        }
        if self.seed > u64::from(u32::MAX) {
            return Err(MapperError::Config(format!(
                "seed must fit in 32 bits, got {}",
                self.seed
            )));
        }
        if self.max_steps == 0 {
            return Err(MapperError::Config(
                "max_steps must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MapperResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MapperError::Config(format!("JSON parse error: {e}")))
    }
}
