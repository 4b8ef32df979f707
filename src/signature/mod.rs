//! Signature Module: Compact Descriptors of Convergence Curves
//!
//! A curve of arbitrary length is reduced to a fixed-shape record:
//!
//! - dominant attractor early, midway and at the end
//! - curve length and cumulative speed
//! - number of velocity reversals
//! - sampled attractor-preference pattern
//!
//! Signatures are always recomputed from their curve and never stored.

mod extractor;

pub use extractor::{
    Signature,
    extract_signature,
    count_direction_changes,
    affinity_pattern,
    EARLY_STEP,
    FULL_PATTERN_BELOW,
};
