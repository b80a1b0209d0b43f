//! Solution index: canonical board key to the solutions producing it.

use crate::{
    any_orientation_key, exact_key, CanonicalKey, Collision, ConstraintGrid, Observation, Solution,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Buckets of solutions keyed by both the exact and the any-orientation key
/// of their finished board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionIndex {
    buckets: BTreeMap<CanonicalKey, Vec<Solution>>,
}

impl SolutionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every solution under both of its keys.
    pub fn build(solutions: &[Solution]) -> Result<Self, Collision> {
        let mut index = Self::new();
        for solution in solutions {
            index.insert(solution.clone())?;
        }
        log::info!(
            "indexed {} solutions under {} keys",
            solutions.len(),
            index.key_count()
        );
        Ok(index)
    }

    /// Rebuild the solution's board and append it to its exact bucket and
    /// its any-orientation bucket. Equal keys never merge entries.
    pub fn insert(&mut self, solution: Solution) -> Result<(), Collision> {
        let board = solution.board()?;
        self.buckets
            .entry(exact_key(&board))
            .or_default()
            .push(solution.clone());
        self.buckets
            .entry(any_orientation_key(&board))
            .or_default()
            .push(solution);
        Ok(())
    }

    /// Solutions stored under `key`; empty when the key is unknown.
    pub fn lookup(&self, key: &CanonicalKey) -> &[Solution] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Solutions matching an observed board that also pass `constraints`.
    ///
    /// No match is a normal outcome and yields an empty list.
    pub fn find_matches(
        &self,
        observation: &Observation,
        constraints: Option<&ConstraintGrid>,
    ) -> Vec<&Solution> {
        let bucket = self.lookup(&observation.key());
        log::debug!("found {} solutions for observed board", bucket.len());
        let matches: Vec<&Solution> = bucket
            .iter()
            .filter(|s| constraints.map_or(true, |c| c.allows(s)))
            .collect();
        log::debug!("{} solutions within constraints", matches.len());
        matches
    }

    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total entries across buckets; each solution counts once per key.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &[Solution])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
