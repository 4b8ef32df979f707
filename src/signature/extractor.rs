//! Signature Extraction
//!
//! All indices are clamped against the curve length, so any non-empty
//! curve yields a fully populated signature.

use serde::Serialize;

use crate::dynamics::Curve;

/// Step whose dominant attractor counts as "early"
pub const EARLY_STEP: usize = 5;

/// Curves shorter than this keep their full dominant sequence as pattern
pub const FULL_PATTERN_BELOW: usize = 10;

/// Fixed-shape descriptor of a convergence curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signature {
    /// Dominant attractor at step min(5, len - 1)
    pub early_attractor: usize,
    /// Dominant attractor at step len / 2
    pub mid_attractor: usize,
    /// Dominant attractor at the last step
    pub final_attractor: usize,
    /// Number of recorded steps
    pub curve_length: usize,
    /// Sum of per-step speeds.
    ///
    /// This is cumulative speed, not the arclength of the position trace.
    pub total_distance: f64,
    /// Velocity reversals between consecutive steps
    pub direction_changes: usize,
    /// Dominant attractors at sampled steps
    pub affinity_pattern: Vec<usize>,
}

/// Extract the signature of `curve`, `None` when it is empty
pub fn extract_signature(curve: &Curve) -> Option<Signature> {
    let last = curve.last()?;
    let len = curve.len();
    let dominant = |i: usize| curve.steps()[i].dominant_attractor();

    Some(Signature {
        early_attractor: dominant(EARLY_STEP.min(len - 1)),
        mid_attractor: dominant(len / 2),
        final_attractor: last.dominant_attractor(),
        curve_length: len,
        total_distance: curve.iter().map(|s| s.speed()).sum(),
        direction_changes: count_direction_changes(curve),
        affinity_pattern: affinity_pattern(curve),
    })
}

/// Count steps i ≥ 2 whose velocity opposes the previous one
///
/// A reversal is a strictly negative dot product. The pair (0, 1) is
/// never inspected.
pub fn count_direction_changes(curve: &Curve) -> usize {
    let steps = curve.steps();
    (2..steps.len())
        .filter(|&i| steps[i - 1].velocity().dot(&steps[i].velocity()) < 0.0)
        .count()
}

/// Dominant attractor pattern of `curve`
///
/// Short curves contribute every step; longer ones are sampled at
/// 0, ¼, ½, ¾ of the length and the last step.
pub fn affinity_pattern(curve: &Curve) -> Vec<usize> {
    let len = curve.len();
    if len < FULL_PATTERN_BELOW {
        return curve.dominant_sequence();
    }

    [0, len / 4, len / 2, 3 * len / 4, len - 1]
        .into_iter()
        .map(|i| curve.steps()[i.min(len - 1)].dominant_attractor())
        .collect()
}
