//! Dynamics Module: Attractors, Basin Affinity and Damped Integration
//!
//! Implements the simulation half of the pipeline:
//!
//! - **Attractors**: fixed points in phase space drawn from a seeded source
//! - **Affinity**: pull strength between a point and an attractor
//! - **Integrator**: damped particle pulled by every attractor at once,
//!   recording one [`CurveStep`] per step
//!
//! The recorded [`Curve`] is the input to signature extraction.

mod traits;
mod attractors;
mod affinity;
mod integrator;

pub use traits::Affinity;
pub use attractors::{AttractorSet, ATTRACTOR_SPAN};
pub use affinity::{BasinAffinity, phase_signature, compatibility, SIGNATURE_MODULUS, DISTANCE_SCALE};
pub use integrator::{
    DampedIntegrator,
    Curve,
    CurveStep,
    initial_point,
    dominant_index,
    DAMPING,
    FORCE_GAIN,
    CONVERGENCE_EPSILON,
    DEFAULT_MAX_STEPS,
};
