//! Curve Cache: Scalar Inputs and the Curves They Produced
//!
//! Insertion-ordered map from input value to curve. Re-inserting a value
//! replaces its curve but keeps its original slot, so the recovery scan
//! order is the order in which distinct inputs were first seen. Entries
//! are never removed; the cache lives exactly as long as its owner.
//!
//! Keys compare by value with `0.0 == -0.0`.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::dynamics::Curve;

/// Process-lifetime store of computed curves
#[derive(Debug, Clone, Default)]
pub struct CurveCache {
    entries: IndexMap<OrderedFloat<f64>, Curve>,
}

impl CurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `curve` under `input`, returning the curve it replaced
    pub fn insert(&mut self, input: f64, curve: Curve) -> Option<Curve> {
        self.entries.insert(OrderedFloat(input), curve)
    }

    pub fn get(&self, input: f64) -> Option<&Curve> {
        self.entries.get(&OrderedFloat(input))
    }

    pub fn contains(&self, input: f64) -> bool {
        self.entries.contains_key(&OrderedFloat(input))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inputs in scan order
    pub fn inputs(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.keys().map(|k| k.into_inner())
    }

    /// `(input, curve)` pairs in scan order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Curve)> + '_ {
        self.entries.iter().map(|(k, curve)| (k.into_inner(), curve))
    }
}
