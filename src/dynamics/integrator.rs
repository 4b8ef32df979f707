//! Damped Integrator: Convergence Curves Toward Attractors
//!
//! A scalar input v is lifted to a phase space point
//!
//!   x₀ = (v, 1.5·v mod 100, 1.5²·v mod 100, ...)
//!
//! and released with zero velocity. Every step, all attractors pull at once:
//!
//!   F = Σₐ 0.1 · A(x, a) · (a - x)
//!
//!   v ← 0.8·v + F
//!
//!   x ← x + v
//!
//! The 0.8 factor bleeds off a fifth of the previous velocity each step;
//! the force is not accumulated raw. Integration stops as soon as
//! ‖v‖ < 0.01 (that step is still recorded) or when the step budget runs out.
//!
//! There is no adaptive step size and no stability guarantee: this is an
//! explicit map, not an ODE solver. For a fixed attractor set and input the
//! recorded curve is bit-for-bit reproducible.

use ndarray::{Array1, Array2, ArrayView1};
use serde::Serialize;
use tracing::{debug, trace};

use super::affinity::BasinAffinity;
use super::traits::Affinity;
use super::AttractorSet;

/// Fraction of velocity kept between steps
pub const DAMPING: f64 = 0.8;

/// Scale applied to each attractor's pull
pub const FORCE_GAIN: f64 = 0.1;

/// Speed below which the particle counts as converged
pub const CONVERGENCE_EPSILON: f64 = 0.01;

/// Default step budget
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Multiplier applied per extra dimension when lifting a scalar
const LIFT_FACTOR: f64 = 1.5;

/// Wrap-around for every lifted coordinate after the first
const LIFT_MODULUS: f64 = 100.0;

/// Lift a scalar into a `dimensions`-dimensional phase space point
///
/// The first coordinate is the value itself; coordinate k ≥ 1 is
/// `v·1.5ᵏ mod 100` with floored modulo. In two dimensions this is
/// `(v, 1.5·v mod 100)`.
pub fn initial_point(initial_value: f64, dimensions: usize) -> Array1<f64> {
    Array1::from_iter((0..dimensions).map(|k| {
        if k == 0 {
            initial_value
        } else {
            (initial_value * LIFT_FACTOR.powi(k as i32)).rem_euclid(LIFT_MODULUS)
        }
    }))
}

/// Index of the first maximum, `None` for an empty slice
///
/// NaN ranks above every number, so the first NaN wins.
pub fn dominant_index(affinities: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &a) in affinities.iter().enumerate() {
        if a.is_nan() {
            return Some(i);
        }
        match best {
            Some((_, b)) if a <= b => {}
            _ => best = Some((i, a)),
        }
    }
    best.map(|(i, _)| i)
}

/// State recorded after one integration step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveStep {
    position: Array1<f64>,
    velocity: Array1<f64>,
    dominant_attractor: usize,
    affinity_distribution: Vec<f64>,
}

impl CurveStep {
    /// Record a step; the dominant attractor is derived from `affinity_distribution`
    ///
    /// An empty distribution yields dominant attractor 0.
    pub fn new(position: Array1<f64>, velocity: Array1<f64>, affinity_distribution: Vec<f64>) -> Self {
        let dominant_attractor = dominant_index(&affinity_distribution).unwrap_or(0);
        Self {
            position,
            velocity,
            dominant_attractor,
            affinity_distribution,
        }
    }

    /// Position after the step
    pub fn position(&self) -> ArrayView1<'_, f64> {
        self.position.view()
    }

    /// Velocity after the step
    pub fn velocity(&self) -> ArrayView1<'_, f64> {
        self.velocity.view()
    }

    /// Index of the attractor with the highest affinity (first on ties)
    pub fn dominant_attractor(&self) -> usize {
        self.dominant_attractor
    }

    /// Affinity to each attractor, measured before the step moved the point
    pub fn affinity_distribution(&self) -> &[f64] {
        &self.affinity_distribution
    }

    /// Velocity magnitude
    pub fn speed(&self) -> f64 {
        self.velocity.dot(&self.velocity).sqrt()
    }
}

/// Ordered, append-only record of one integration run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve {
    steps: Vec<CurveStep>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<CurveStep>) -> Self {
        Self { steps }
    }

    pub fn push(&mut self, step: CurveStep) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[CurveStep] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&CurveStep> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&CurveStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveStep> {
        self.steps.iter()
    }

    /// Trajectory as a [steps, dimensions] matrix
    pub fn positions(&self) -> Array2<f64> {
        let dims = self.steps.first().map_or(0, |s| s.position.len());
        let mut out = Array2::zeros((self.steps.len(), dims));
        for (mut row, step) in out.outer_iter_mut().zip(&self.steps) {
            row.assign(&step.position);
        }
        out
    }

    /// Speed at every step
    pub fn velocity_profile(&self) -> Vec<f64> {
        self.steps.iter().map(CurveStep::speed).collect()
    }

    /// Dominant attractor at every step
    pub fn dominant_sequence(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.dominant_attractor).collect()
    }

    /// Whether the run stopped on the speed threshold rather than the budget
    pub fn converged(&self) -> bool {
        self.last().is_some_and(|s| s.speed() < CONVERGENCE_EPSILON)
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurveStep;
    type IntoIter = std::slice::Iter<'a, CurveStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Damped particle integrator over an attractor set
#[derive(Debug, Clone, Default)]
pub struct DampedIntegrator<A = BasinAffinity> {
    affinity: A,
}

impl DampedIntegrator<BasinAffinity> {
    /// Integrator using the reference basin affinity
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: Affinity> DampedIntegrator<A> {
    /// Integrator driven by a custom affinity model
    pub fn with_affinity(affinity: A) -> Self {
        Self { affinity }
    }

    pub fn affinity_model(&self) -> &A {
        &self.affinity
    }

    /// Advance one step from `position` with `velocity`
    ///
    /// Affinities are evaluated at the pre-step position; the returned
    /// step carries the post-step position and velocity.
    pub fn step(
        &self,
        attractors: &AttractorSet,
        position: &Array1<f64>,
        velocity: &Array1<f64>,
    ) -> CurveStep {
        let affinities = self.affinity.distribution(position.view(), attractors);

        let mut total_force: Array1<f64> = Array1::zeros(position.len());
        for (attractor, &a) in attractors.iter().zip(&affinities) {
            // F = (a - x)·A·gain
            total_force.scaled_add(a * FORCE_GAIN, &(&attractor - position));
        }

        let new_velocity = velocity * DAMPING + total_force;
        let new_position = position + &new_velocity;

        CurveStep::new(new_position, new_velocity, affinities)
    }

    /// Integrate `initial_value` for at most `max_steps` steps
    ///
    /// A budget of zero yields an empty curve.
    pub fn integrate(&self, attractors: &AttractorSet, initial_value: f64, max_steps: usize) -> Curve {
        let mut position = initial_point(initial_value, attractors.dimensions());
        let mut velocity = Array1::zeros(attractors.dimensions());
        let mut curve = Curve::new();

        for step in 0..max_steps {
            let next = self.step(attractors, &position, &velocity);
            position.assign(&next.position);
            velocity.assign(&next.velocity);
            let speed = next.speed();
            curve.push(next);

            if speed < CONVERGENCE_EPSILON {
                trace!(initial_value, step, speed, "speed below epsilon, stopping");
                break;
            }
        }

        debug!(
            initial_value,
            steps = curve.len(),
            converged = curve.converged(),
            "integrated convergence curve"
        );

        curve
    }
}
