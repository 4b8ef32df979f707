//! Shared Mapper: Thread-Safe Mapping Session
//!
//! Same pipeline as [`AttractorMapper`](crate::AttractorMapper), but every
//! operation takes `&self`. Integration runs without holding any lock; the
//! cache sits behind a `parking_lot::RwLock` so inserts never interleave
//! with a recovery scan.

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::CurveCache;
use crate::config::MapperConfig;
use crate::dynamics::{Affinity, AttractorSet, BasinAffinity, Curve, DampedIntegrator};
use crate::error::MapperResult;
use crate::mapper::{check_attractors, check_input, check_steps};
use crate::recovery::{self, Candidate};

/// Mapping session safe to share across threads
#[derive(Debug)]
pub struct SharedMapper<A = BasinAffinity> {
    config: MapperConfig,
    attractors: AttractorSet,
    integrator: DampedIntegrator<A>,
    cache: RwLock<CurveCache>,
}

impl SharedMapper<BasinAffinity> {
    pub fn new(config: MapperConfig) -> MapperResult<Self> {
        config.validate()?;
        let attractors =
            AttractorSet::generate(config.n_attractors, config.dimensions, config.seed)?;
        Ok(Self {
            config,
            attractors,
            integrator: DampedIntegrator::new(),
            cache: RwLock::new(CurveCache::new()),
        })
    }
}

impl<A: Affinity> SharedMapper<A> {
    pub fn with_attractors(
        config: MapperConfig,
        attractors: AttractorSet,
        affinity: A,
    ) -> MapperResult<Self> {
        config.validate()?;
        check_attractors(&config, &attractors)?;
        Ok(Self {
            config,
            attractors,
            integrator: DampedIntegrator::with_affinity(affinity),
            cache: RwLock::new(CurveCache::new()),
        })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn attractors(&self) -> &AttractorSet {
        &self.attractors
    }

    pub fn converge(&self, initial_value: f64) -> MapperResult<Curve> {
        self.converge_with_steps(initial_value, self.config.max_steps)
    }

    pub fn converge_with_steps(&self, initial_value: f64, max_steps: usize) -> MapperResult<Curve> {
        check_input(initial_value, self.attractors.dimensions())?;
        check_steps(max_steps)?;

        let curve = self
            .integrator
            .integrate(&self.attractors, initial_value, max_steps);
        self.cache.write().insert(initial_value, curve.clone());
        Ok(curve)
    }

    pub fn curve_of(&self, initial_value: f64) -> Option<Curve> {
        self.cache.read().get(initial_value).cloned()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Rank cached inputs against `curve` under a read lock
    pub fn recover(&self, curve: &Curve) -> Vec<Candidate> {
        let cache = self.cache.read();
        recovery::recover(curve, &cache)
    }

    /// Consume the session, keeping only its cache
    pub fn into_cache(self) -> CurveCache {
        let cache = self.cache.into_inner();
        debug!(entries = cache.len(), "shared mapper torn down");
        cache
    }
}
