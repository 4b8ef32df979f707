//! Recovery Module: Guessing an Input From Its Convergence Curve
//!
//! Recovery compares the signature of a query curve against the signature
//! of every cached curve using a fixed weight table:
//!
//! | criterion                        | weight |
//! |----------------------------------|--------|
//! | final attractor equal            | 30     |
//! | early attractor equal            | 20     |
//! | affinity pattern equal           | 25     |
//! | curve lengths differ by < 5      | 15     |
//! | direction changes equal          | 10     |
//!
//! Candidates scoring strictly above 50 are returned best first.
//!
//! This is a coarse classifier, not an inversion: false positives and
//! misses are expected, and the recovery rate is something to measure.

mod matcher;
mod report;

pub use matcher::{
    Candidate,
    ScoreWeights,
    SCORE_WEIGHTS,
    LENGTH_TOLERANCE,
    MIN_SCORE,
    score_signatures,
    recover,
};
pub use report::{RecoveryTrial, RecoveryReport};
