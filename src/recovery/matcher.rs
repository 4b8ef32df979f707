//! Signature Matching Against the Curve Cache

use serde::Serialize;
use tracing::debug;

use crate::cache::CurveCache;
use crate::dynamics::Curve;
use crate::signature::{extract_signature, Signature};

/// Points awarded per matching signature field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    pub final_attractor: u32,
    pub early_attractor: u32,
    pub affinity_pattern: u32,
    pub curve_length: u32,
    pub direction_changes: u32,
}

impl ScoreWeights {
    /// Score of a perfect match
    pub const fn total(&self) -> u32 {
        self.final_attractor
            + self.early_attractor
            + self.affinity_pattern
            + self.curve_length
            + self.direction_changes
    }
}

/// Fixed weight table used by [`recover`]
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    final_attractor: 30,
    early_attractor: 20,
    affinity_pattern: 25,
    curve_length: 15,
    direction_changes: 10,
};

/// Curve lengths closer than this count as a match
pub const LENGTH_TOLERANCE: usize = 5;

/// Candidates must score strictly above this
pub const MIN_SCORE: u32 = 50;

/// A cached input that plausibly produced the query curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub input: f64,
    pub score: u32,
}

/// Similarity of two signatures under [`SCORE_WEIGHTS`]
///
/// Every criterion contributes independently. `mid_attractor` and
/// `total_distance` are not scored.
pub fn score_signatures(query: &Signature, stored: &Signature) -> u32 {
    let w = &SCORE_WEIGHTS;
    let mut score = 0;

    if stored.final_attractor == query.final_attractor {
        score += w.final_attractor;
    }
    if stored.early_attractor == query.early_attractor {
        score += w.early_attractor;
    }
    if stored.affinity_pattern == query.affinity_pattern {
        score += w.affinity_pattern;
    }
    if stored.curve_length.abs_diff(query.curve_length) < LENGTH_TOLERANCE {
        score += w.curve_length;
    }
    if stored.direction_changes == query.direction_changes {
        score += w.direction_changes;
    }

    score
}

/// Rank cached inputs by how well their curves match `curve`
///
/// Returns candidates with score > [`MIN_SCORE`], highest first. Ties keep
/// the cache's scan order. An empty query curve yields no candidates, and
/// cached curves without a signature are skipped.
pub fn recover(curve: &Curve, cache: &CurveCache) -> Vec<Candidate> {
    let Some(target) = extract_signature(curve) else {
        return Vec::new();
    };

    let mut candidates: Vec<Candidate> = cache
        .iter()
        .filter_map(|(input, stored_curve)| {
            let stored = extract_signature(stored_curve)?;
            let score = score_signatures(&target, &stored);
            (score > MIN_SCORE).then_some(Candidate { input, score })
        })
        .collect();

    // Stable: equal scores stay in scan order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        cached = cache.len(),
        candidates = candidates.len(),
        top_score = candidates.first().map(|c| c.score),
        "recovery scan complete"
    );

    candidates
}
