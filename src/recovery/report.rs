//! Recovery Report: Measured Recovery Rate Over a Batch of Inputs

use serde::Serialize;

use super::matcher::Candidate;

/// Outcome of recovering a single input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoveryTrial {
    /// Input that produced the query curve
    pub input: f64,
    /// Best-ranked candidate, if any cleared the threshold
    pub top: Option<Candidate>,
}

impl RecoveryTrial {
    /// The top candidate is the input itself
    pub fn recovered(&self) -> bool {
        self.top.is_some_and(|c| c.input == self.input)
    }
}

/// Aggregate of recovery trials
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecoveryReport {
    pub trials: Vec<RecoveryTrial>,
}

impl RecoveryReport {
    pub fn push(&mut self, trial: RecoveryTrial) {
        self.trials.push(trial);
    }

    /// Number of trials whose top candidate was the true input
    pub fn successes(&self) -> usize {
        self.trials.iter().filter(|t| t.recovered()).count()
    }

    /// Fraction of successful trials in [0, 1]; 0 when there were none
    pub fn recovery_rate(&self) -> f64 {
        if self.trials.is_empty() {
            0.0
        } else {
            self.successes() as f64 / self.trials.len() as f64
        }
    }
}
