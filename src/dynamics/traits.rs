//! Affinity Trait: Pull Strength Between a Point and an Attractor
//!
//! The integrator is generic over this trait so alternative basin models
//! can drive the same damped dynamics.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Affinity Trait                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + affinity(point, attractor) - Scalar pull strength        │
//! │  + distribution(point, set)   - Affinity to every attractor │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use ndarray::ArrayView1;

use super::AttractorSet;

/// Pull-strength model between phase space points and attractors
pub trait Affinity {
    /// Pull strength of `attractor` on `point`
    ///
    /// Implementations must be pure and return a finite, non-negative value.
    fn affinity(&self, point: ArrayView1<f64>, attractor: ArrayView1<f64>) -> f64;

    /// Affinity of `point` to every attractor, in attractor order
    fn distribution(&self, point: ArrayView1<f64>, attractors: &AttractorSet) -> Vec<f64> {
        attractors
            .iter()
            .map(|attractor| self.affinity(point, attractor))
            .collect()
    }
}
