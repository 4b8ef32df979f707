//! Attractor Set: Fixed Convergence Points in Phase Space
//!
//! Attractors are arbitrary points drawn uniformly from the box
//! [0, 100)^d. Nothing about them is special; the information lives in
//! how a trajectory approaches them, not in where they sit.
//!
//! Each set owns its own seeded generator for the duration of
//! construction, so two sets built from the same seed are identical and
//! building one never perturbs another.
//!
//! The seeded stream is MT19937 with 53-bit doubles built from two
//! consecutive outputs, the classic `genrand_res53` construction:
//!
//!   u = ((a >> 5)·2²⁶ + (b >> 6)) / 2⁵³
//!
//! so seed 42 yields the same reference set as any other MT19937-based
//! uniform sampler seeded with `init_genrand(42)`.

use ndarray::{Array2, ArrayView1, Axis};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use rand_mt::Mt19937GenRand32;
use serde::Serialize;
use tracing::debug;

use crate::error::{MapperError, MapperResult};

/// Side length of the box attractors are drawn from
pub const ATTRACTOR_SPAN: f64 = 100.0;

/// Uniform double in [0, 1) from two MT19937 outputs
fn genrand_res53(mt: &mut Mt19937GenRand32) -> f64 {
    let a = (mt.next_u32() >> 5) as f64;
    let b = (mt.next_u32() >> 6) as f64;
    (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
}

fn check_shape(n_attractors: usize, dimensions: usize) -> MapperResult<()> {
    if n_attractors == 0 || dimensions == 0 {
        return Err(MapperError::Config(format!(
            "attractor set needs at least one attractor and one dimension, got {}x{}",
            n_attractors, dimensions
        )));
    }
    Ok(())
}

/// Attractor 0 gets the first `dimensions` draws
fn fill_row_major(
    n_attractors: usize,
    dimensions: usize,
    mut draw: impl FnMut() -> f64,
) -> MapperResult<Array2<f64>> {
    let draws: Vec<f64> = (0..n_attractors * dimensions).map(|_| draw()).collect();
    Array2::from_shape_vec((n_attractors, dimensions), draws)
        .map_err(|e| MapperError::Config(format!("attractor shape: {e}")))
}

/// Immutable collection of attractor points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractorSet {
    /// Attractor coordinates [n_attractors, dimensions]
    points: Array2<f64>,
}

impl AttractorSet {
    /// Draw `n_attractors` points uniformly from [0, 100)^`dimensions`
    ///
    /// # Arguments
    /// * `n_attractors` - Number of attractors (>= 1)
    /// * `dimensions` - Phase space dimensionality (>= 1)
    /// * `seed` - MT19937 seed (must fit in 32 bits)
    pub fn generate(n_attractors: usize, dimensions: usize, seed: u64) -> MapperResult<Self> {
        check_shape(n_attractors, dimensions)?;
        let seed32 = u32::try_from(seed).map_err(|_| {
            MapperError::Config(format!("seed must fit in 32 bits, got {seed}"))
        })?;

        let mut mt = Mt19937GenRand32::new(seed32);
        let points = fill_row_major(n_attractors, dimensions, || {
            genrand_res53(&mut mt) * ATTRACTOR_SPAN
        })?;

        debug!(n_attractors, dimensions, seed, "generated attractor set");

        Ok(Self { points })
    }

    /// Draw attractors uniformly from [0, 100)^`dimensions` with any `rand` generator
    pub fn generate_with_rng<R: Rng + ?Sized>(
        n_attractors: usize,
        dimensions: usize,
        rng: &mut R,
    ) -> MapperResult<Self> {
        check_shape(n_attractors, dimensions)?;
        let uniform = Uniform::new(0.0, ATTRACTOR_SPAN)
            .map_err(|e| MapperError::Config(format!("attractor distribution: {e}")))?;

        let points = fill_row_major(n_attractors, dimensions, || uniform.sample(&mut *rng))?;
        Ok(Self { points })
    }

    /// Build a set from explicit coordinates, one attractor per row
    pub fn from_points(points: Array2<f64>) -> MapperResult<Self> {
        if points.nrows() == 0 || points.ncols() == 0 {
            return Err(MapperError::Config(
                "attractor set must contain at least one point of dimension >= 1".to_string(),
            ));
        }
        if points.iter().any(|x| !x.is_finite()) {
            return Err(MapperError::Config(
                "attractor coordinates must be finite".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Number of attractors
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Always false for a constructed set
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Phase space dimensionality
    pub fn dimensions(&self) -> usize {
        self.points.ncols()
    }

    /// Attractor `index`, if present
    pub fn get(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.len()).then(|| self.points.index_axis(Axis(0), index))
    }

    /// Iterate attractors in index order
    pub fn iter(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.points.outer_iter()
    }

    /// Raw coordinate matrix
    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }
}
