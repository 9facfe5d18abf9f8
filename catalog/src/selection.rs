//! Session-local selection state.
//!
//! The selection lives for one exploration session and is never persisted.
//! Adds are idempotent on normalized name, removes of the last entry return
//! the selection to empty, and evaluation recomputes the result from scratch
//! on every call.

use crate::explorer::{MatchResult, find_exact_match, synthesize};
use crate::model::{Combination, Technology};
use crate::normalize::normalize;

/// The user's in-progress set of chosen technologies, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    technologies: Vec<Technology>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a technology. Adding one that is already selected is a no-op,
    /// not a duplicate insert. Returns whether the selection changed.
    pub fn add(&mut self, technology: Technology) -> bool {
        if self.contains(&technology.name) {
            return false;
        }

        self.technologies.push(technology);
        true
    }

    /// Remove a technology by name. Returns whether the selection changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let wanted = normalize(name);
        let before = self.technologies.len();

        self.technologies
            .retain(|tech| normalize(&tech.name) != wanted);

        self.technologies.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        let wanted = normalize(name);
        self.technologies
            .iter()
            .any(|tech| normalize(&tech.name) == wanted)
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    /// Selected technologies in insertion order.
    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    /// Normalized names of the selected technologies, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.technologies
            .iter()
            .map(|tech| normalize(&tech.name).to_string())
            .collect()
    }

    /// Run the explorer pipeline for the current selection: exact match
    /// first, calculated estimate on a miss, no result when empty.
    pub fn evaluate(&self, combinations: &[Combination]) -> Option<MatchResult> {
        if self.is_empty() {
            return None;
        }

        let result = match find_exact_match(&self.names(), combinations) {
            Some(combination) => MatchResult::Exact(combination.clone()),
            None => MatchResult::Calculated(synthesize(&self.technologies)),
        };

        Some(result)
    }
}
