// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of section identifiers currently expanded.
///
/// Identifiers are independent boolean flags, not a single-open
/// accordion: toggling one never affects another. Both queries and the
/// toggle accept arbitrary strings; an identifier with no matching
/// catalog section is ordinary data, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// Empty state: everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given identifiers pre-expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff `id` is currently expanded. Total over all strings;
    /// unknown identifiers are simply collapsed.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip `id`'s membership. The sole mutator: an even number of
    /// toggles of the same identifier restores its prior state, and no
    /// other identifier is affected. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_owned());
            true
        }
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ExpansionState;

    #[test]
    fn starts_collapsed_outside_the_initial_set() {
        let state = ExpansionState::with_expanded(["overview"]);
        assert!(state.is_expanded("overview"));
        assert!(!state.is_expanded("jenkins"));
        assert!(!state.is_expanded("docker"));
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = ExpansionState::with_expanded(["overview"]);

        assert!(state.toggle("jenkins"));
        assert!(state.is_expanded("jenkins"));
        assert!(state.is_expanded("overview"));

        assert!(!state.toggle("jenkins"));
        assert!(!state.is_expanded("jenkins"));
        assert!(state.is_expanded("overview"));
    }

    #[test]
    fn double_toggle_is_an_involution() {
        let mut state = ExpansionState::with_expanded(["overview"]);
        for id in ["overview", "jenkins", "cicd", "stale-id"] {
            let before = state.is_expanded(id);
            state.toggle(id);
            state.toggle(id);
            assert_eq!(state.is_expanded(id), before, "id {id}");
        }
    }

    #[test]
    fn toggles_are_independent_across_identifiers() {
        let mut state = ExpansionState::new();
        state.toggle("docker");
        assert!(!state.is_expanded("kubernetes"));
        state.toggle("kubernetes");
        assert!(state.is_expanded("docker"));
        state.toggle("docker");
        assert!(state.is_expanded("kubernetes"));
    }

    #[test]
    fn unknown_identifier_is_tolerated() {
        let mut state = ExpansionState::with_expanded(["overview"]);
        assert!(!state.is_expanded("nonexistent-id"));
        assert!(state.toggle("nonexistent-id"));
        assert!(state.is_expanded("nonexistent-id"));
    }

    #[test]
    fn multiple_sections_stay_expanded_simultaneously() {
        let mut state = ExpansionState::new();
        for id in ["overview", "jenkins", "cicd", "microservices"] {
            state.toggle(id);
        }
        assert_eq!(state.len(), 4);
        for id in ["overview", "jenkins", "cicd", "microservices"] {
            assert!(state.is_expanded(id));
        }
    }

    #[test]
    fn expanded_ids_iterates_current_members() {
        let state = ExpansionState::with_expanded(["b", "a"]);
        let ids: Vec<&str> = state.expanded_ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn empty_state_reports_empty() {
        let state = ExpansionState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }
}
