//! Attractor Mapper: Converge, Cache, Recover
//!
//! Owns everything a mapping session needs: the immutable attractor set,
//! the integrator and the curve cache. The cache starts empty, grows with
//! every `converge` call and is dropped with the mapper.
//!
//! ```text
//!  v ──► DampedIntegrator ──► Curve ──┬──► CurveCache[v]
//!            ▲                        │
//!       AttractorSet                  └──► Signature ──► recover() ──► [Candidate]
//!                                                           ▲
//!                                                      CurveCache
//! ```

use tracing::debug;

use crate::cache::CurveCache;
use crate::config::MapperConfig;
use crate::dynamics::{initial_point, Affinity, AttractorSet, BasinAffinity, Curve, DampedIntegrator};
use crate::error::{MapperError, MapperResult};
use crate::recovery::{self, Candidate, RecoveryReport, RecoveryTrial};
use crate::signature::{self, Signature};

/// Reject inputs the integrator cannot lift into phase space
///
/// Finite values whose lifted coordinates overflow are rejected too.
pub(crate) fn check_input(initial_value: f64, dimensions: usize) -> MapperResult<()> {
    if !initial_value.is_finite() {
        return Err(MapperError::Validation(format!(
            "initial_value must be finite, got {initial_value}"
        )));
    }
    if initial_point(initial_value, dimensions).iter().any(|x| !x.is_finite()) {
        return Err(MapperError::Validation(format!(
            "initial_value {initial_value} overflows when lifted into {dimensions} dimensions"
        )));
    }
    Ok(())
}

pub(crate) fn check_steps(max_steps: usize) -> MapperResult<()> {
    if max_steps == 0 {
        return Err(MapperError::Validation(
            "max_steps must be >= 1".to_string(),
        ));
    }
    Ok(())
}

/// Check explicit attractors against the configured shape
pub(crate) fn check_attractors(config: &MapperConfig, attractors: &AttractorSet) -> MapperResult<()> {
    if attractors.dimensions() != config.dimensions {
        return Err(MapperError::DimensionMismatch {
            expected: config.dimensions,
            found: attractors.dimensions(),
        });
    }
    if attractors.len() != config.n_attractors {
        return Err(MapperError::Config(format!(
            "config expects {} attractors, got {}",
            config.n_attractors,
            attractors.len()
        )));
    }
    Ok(())
}

/// Single-threaded mapping session
#[derive(Debug, Clone)]
pub struct AttractorMapper<A = BasinAffinity> {
    config: MapperConfig,
    attractors: AttractorSet,
    integrator: DampedIntegrator<A>,
    cache: CurveCache,
}

impl AttractorMapper<BasinAffinity> {
    /// Build a mapper with attractors drawn from `config.seed`
    pub fn new(config: MapperConfig) -> MapperResult<Self> {
        config.validate()?;
        let attractors =
            AttractorSet::generate(config.n_attractors, config.dimensions, config.seed)?;
        Ok(Self {
            config,
            attractors,
            integrator: DampedIntegrator::new(),
            cache: CurveCache::new(),
        })
    }

    /// Four attractors in 2-D from seed 42
    pub fn reference() -> MapperResult<Self> {
        Self::new(MapperConfig::default())
    }
}

impl<A: Affinity> AttractorMapper<A> {
    /// Build a mapper over explicit attractors and a custom affinity model
    ///
    /// `config.seed` is ignored; shape fields must agree with `attractors`.
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
            cache: CurveCache::new(),
        })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn attractors(&self) -> &AttractorSet {
        &self.attractors
    }

    pub fn cache(&self) -> &CurveCache {
        &self.cache
    }

    /// Integrate `initial_value` with the configured step budget
    pub fn converge(&mut self, initial_value: f64) -> MapperResult<Curve> {
        self.converge_with_steps(initial_value, self.config.max_steps)
    }

    /// Integrate `initial_value` for at most `max_steps` steps
    ///
    /// The curve is cached under `initial_value`, replacing any earlier one.
    pub fn converge_with_steps(&mut self, initial_value: f64, max_steps: usize) -> MapperResult<Curve> {
        check_input(initial_value, self.attractors.dimensions())?;
        check_steps(max_steps)?;

        let curve = self
            .integrator
            .integrate(&self.attractors, initial_value, max_steps);
        if self.cache.insert(initial_value, curve.clone()).is_some() {
            debug!(initial_value, "replaced cached curve");
        }
        Ok(curve)
    }

    /// Cached curve for `initial_value`
    pub fn curve_of(&self, initial_value: f64) -> Option<&Curve> {
        self.cache.get(initial_value)
    }

    pub fn signature_of(&self, curve: &Curve) -> Option<Signature> {
        signature::extract_signature(curve)
    }

    /// Rank cached inputs by similarity to `curve`
    pub fn recover(&self, curve: &Curve) -> Vec<Candidate> {
        recovery::recover(curve, &self.cache)
    }

    /// Converge then recover each value in turn
    ///
    /// Every value is cached before it is recovered, so later trials also
    /// compete against earlier inputs.
    pub fn evaluate_recovery(&mut self, values: &[f64]) -> MapperResult<RecoveryReport> {
        let mut report = RecoveryReport::default();
        for &input in values {
            let curve = self.converge(input)?;
            let top = self.recover(&curve).first().copied();
            report.push(RecoveryTrial { input, top });
        }
        debug!(
            trials = report.trials.len(),
            successes = report.successes(),
            "recovery evaluation complete"
        );
        Ok(report)
    }
}
