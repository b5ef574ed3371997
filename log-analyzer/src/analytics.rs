use std::collections::BTreeMap;

use crate::invariants::{StatusClass, StatusCode};

/// Per-class and per-code tallies for one analysis run. Every code recorded
/// also bumps its class, so both maps always sum to the same total.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusCounters {
    classes: BTreeMap<StatusClass, usize>,
    codes: BTreeMap<StatusCode, usize>,
}

impl StatusCounters {
    pub fn record(&mut self, code: StatusCode) {
        *self.classes.entry(code.class()).or_default() += 1;
        *self.codes.entry(code).or_default() += 1;
    }

    pub fn classes(&self) -> &BTreeMap<StatusClass, usize> {
        &self.classes
    }
    pub fn codes(&self) -> &BTreeMap<StatusCode, usize> {
        &self.codes
    }

    pub fn total(&self) -> usize {
        self.classes.values().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Codes whose text starts with `prefix`, in ascending order.
    pub fn codes_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a StatusCode, usize)> + 'a {
        self.codes
            .iter()
            .filter(move |(code, _)| code.starts_with(prefix))
            .map(|(code, count)| (code, *count))
    }
}
