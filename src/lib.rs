//! # Attractor Curves
//!
//! Information carried by *how* a value converges, not *where*.
//!
//! ## Framework
//!
//! A handful of arbitrary attractors sit in a 2-D phase space. A scalar
//! input is lifted to a point and released; a damped particle is pulled
//! toward every attractor at once, weighted by a basin affinity that mixes
//! distance with a coarse compatibility score. The recorded trajectory is
//! the input's **convergence curve**.
//!
//! ### Pipeline
//!
//! 1. **Attractor set**: seeded, immutable, owned by the mapper
//!
//! 2. **Integration**: damped explicit map
//!
//!      v ← 0.8·v + Σₐ 0.1·A(x, a)·(a - x),   x ← x + v
//!
//!    until ‖v‖ < 0.01 or the step budget runs out
//!
//! 3. **Signature**: dominant attractors at early/mid/final phases,
//!    length, cumulative speed, velocity reversals, sampled pattern
//!
//! 4. **Recovery**: weighted rule-based comparison against every cached
//!    curve, candidates above 50 points ranked best first
//!
//! ## Caveat
//!
//! Recovery is heuristic best-effort matching. It is neither an inversion
//! nor a lossless encoding; the recovery rate is a measured statistic.

pub mod cache;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod mapper;
pub mod recovery;
pub mod shared;
pub mod signature;

// Re-exports from dynamics
pub use dynamics::{
    // Traits
    Affinity,
    // Attractors and affinity
    AttractorSet,
    BasinAffinity,
    // Integration
    DampedIntegrator,
    Curve,
    CurveStep,
};

// Re-exports from signature
pub use signature::{Signature, extract_signature};

// Re-exports from recovery
pub use recovery::{
    Candidate,
    ScoreWeights,
    SCORE_WEIGHTS,
    RecoveryReport,
    RecoveryTrial,
    recover,
};

pub use cache::CurveCache;
pub use config::MapperConfig;
pub use error::{MapperError, MapperResult};
pub use mapper::AttractorMapper;
pub use shared::SharedMapper;
