//! End-to-end scenarios for the converge → signature → recover pipeline
//!
//! Tests cover:
//! - Determinism of attractor generation and integration
//! - Self-recovery on the reference system
//! - Distinct signatures for neighbouring inputs
//! - Score ordering and the strict threshold

use attractor_curves::recovery::{score_signatures, MIN_SCORE};
use attractor_curves::{
    extract_signature, recover, AttractorMapper, AttractorSet, Candidate, Curve, CurveCache,
    CurveStep, MapperConfig, SCORE_WEIGHTS,
};
use ndarray::array;

/// Curve with a fixed dominant attractor, given length and reversal count
fn shaped_curve(dominant: usize, len: usize, reversals: usize) -> Curve {
    Curve::from_steps(
        (0..len)
            .map(|i| {
                let mut dist = vec![0.2; 4];
                dist[dominant] = 0.8;
                let flips = i.saturating_sub(1).min(reversals);
                let vx = if flips % 2 == 1 { -0.5 } else { 0.5 };
                CurveStep::new(array![i as f64, 0.0], array![vx, 0.0], dist)
            })
            .collect(),
    )
}

/// Same as `shaped_curve` but with attractor `early` dominating steps 0..=5
fn with_early(dominant: usize, early: usize, len: usize, reversals: usize) -> Curve {
    (0..6.min(len)).fold(shaped_curve(dominant, len, reversals), |curve, i| {
        redominate(&curve, i, early)
    })
}

/// Copy of `curve` with step `index` dominated by `dominant`
fn redominate(curve: &Curve, index: usize, dominant: usize) -> Curve {
    let mut steps = curve.steps().to_vec();
    let mut dist = vec![0.2; 4];
    dist[dominant] = 0.8;
    steps[index] = CurveStep::new(
        steps[index].position().to_owned(),
        steps[index].velocity().to_owned(),
        dist,
    );
    Curve::from_steps(steps)
}

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn test_independent_sets_identical() {
        let a = AttractorSet::generate(4, 2, 42).unwrap();
        let b = AttractorSet::generate(4, 2, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_independent_mappers_identical_curves() {
        let mut first = AttractorMapper::reference().unwrap();
        let mut second = AttractorMapper::reference().unwrap();
        for v in [-1000.0, -7.25, 0.0, 10.0, 50.0, 1.0e7] {
            assert_eq!(first.converge(v).unwrap(), second.converge(v).unwrap());
        }
    }

    #[test]
    fn test_signature_recomputation_stable() {
        let mut mapper = AttractorMapper::reference().unwrap();
        let curve = mapper.converge(42.0).unwrap();
        let cached = mapper.curve_of(42.0).unwrap();
        assert_eq!(extract_signature(&curve), extract_signature(cached));
    }
}

#[cfg(test)]
mod reference_system {
    use super::*;

    #[test]
    fn test_self_recovery() {
        let mut mapper = AttractorMapper::reference().unwrap();
        let curve = mapper.converge(50.0).unwrap();
        let candidates = mapper.recover(mapper.curve_of(50.0).unwrap());

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].input, 50.0);
        assert!(candidates[0].score >= 95);
        assert_eq!(candidates, mapper.recover(&curve));
    }

    #[test]
    fn test_neighbouring_inputs_differ() {
        let mut mapper = AttractorMapper::reference().unwrap();
        let ten = mapper.converge(10.0).unwrap();
        let eleven = mapper.converge(11.0).unwrap();
        assert_ne!(extract_signature(&ten), extract_signature(&eleven));
    }

    #[test]
    fn test_every_step_speed_above_epsilon_but_last() {
        let mut mapper = AttractorMapper::reference().unwrap();
        for v in [0.0, 25.0, 75.0, 125.0, 175.0, -60.0] {
            let curve = mapper.converge(v).unwrap();
            let profile = curve.velocity_profile();
            let (last, rest) = profile.split_last().unwrap();
            assert!(rest.iter().all(|&s| s >= 0.01));
            assert!(*last < 0.01 || curve.len() == 100);
        }
    }

    #[test]
    fn test_signature_fields_populated() {
        let mut mapper = AttractorMapper::new(MapperConfig {
            max_steps: 200,
            ..MapperConfig::default()
        })
        .unwrap();
        let curve = mapper.converge(150.0).unwrap();
        let sig = extract_signature(&curve).unwrap();
        assert_eq!(sig.curve_length, curve.len());
        assert!(sig.final_attractor < 4);
        assert!(sig.early_attractor < 4);
        assert!(sig.mid_attractor < 4);
        assert!(sig.total_distance > 0.0);
        assert!(!sig.affinity_pattern.is_empty());
    }
}

#[cfg(test)]
mod scoring {
    use super::*;

    #[test]
    fn test_final_only_versus_final_and_changes() {
        // Query: early 1, final 2, length 30, 3 reversals
        let query = with_early(2, 1, 30, 3);
        // Shares only the final attractor: 30
        let final_only = with_early(2, 0, 60, 0);
        // Shares final attractor and reversal count: 40
        let final_and_changes = with_early(2, 0, 60, 3);

        let q = extract_signature(&query).unwrap();
        let a = extract_signature(&final_only).unwrap();
        let b = extract_signature(&final_and_changes).unwrap();
        assert_ne!(a.affinity_pattern, q.affinity_pattern);
        assert_eq!(score_signatures(&q, &a), SCORE_WEIGHTS.final_attractor);
        assert_eq!(
            score_signatures(&q, &b),
            SCORE_WEIGHTS.final_attractor + SCORE_WEIGHTS.direction_changes
        );

        // Both at or below the threshold: nothing comes back
        let mut cache = CurveCache::new();
        cache.insert(1.0, final_only);
        cache.insert(2.0, final_and_changes);
        assert!(recover(&query, &cache).is_empty());

        // Matching the early phase and pattern as well clears the threshold
        let mut cache = CurveCache::new();
        cache.insert(1.0, with_early(2, 0, 60, 0));
        cache.insert(2.0, with_early(2, 1, 60, 3));
        cache.insert(3.0, with_early(2, 1, 31, 3));
        let found = recover(&query, &cache);
        assert_eq!(
            found,
            vec![
                Candidate { input: 3.0, score: 100 },
                Candidate { input: 2.0, score: 85 },
            ]
        );
    }

    #[test]
    fn test_threshold_strict() {
        assert_eq!(MIN_SCORE, 50);
        let query = with_early(2, 1, 30, 3);

        // final (30) + early (20) = 50: the sampled midpoint breaks the pattern
        let at_fifty = redominate(&with_early(2, 1, 80, 0), 40, 3);
        // final (30) + pattern (25) = 55: step 5 is not a pattern sample
        let above = redominate(&with_early(2, 1, 80, 0), 5, 0);

        let q = extract_signature(&query).unwrap();
        assert_eq!(score_signatures(&q, &extract_signature(&at_fifty).unwrap()), 50);
        assert_eq!(score_signatures(&q, &extract_signature(&above).unwrap()), 55);

        let mut cache = CurveCache::new();
        cache.insert(1.0, at_fifty);
        cache.insert(2.0, above);
        assert_eq!(recover(&query, &cache), vec![Candidate { input: 2.0, score: 55 }]);
    }
}
