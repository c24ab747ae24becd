//! Shared filter state models and helpers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// The active facet selections, owned by the presentation layer and passed
/// by value into the engine on every re-evaluation.
///
/// Boolean fields require the matching metadata flag when set; each set
/// field requires at least one of its selections to match (OR within the
/// category). An empty set places no constraint on its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub remote: bool,
    pub global: bool,
    pub compensation: bool,
    pub technologies: BTreeSet<String>,
    pub positions: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl FilterState {
    /// True when no predicate is active and filtering is the identity.
    pub fn is_empty(&self) -> bool {
        !self.remote
            && !self.global
            && !self.compensation
            && self.technologies.is_empty()
            && self.positions.is_empty()
            && self.locations.is_empty()
    }

    /// Next state with the technology selection toggled on or off.
    pub fn toggle_technology(mut self, value: impl Into<String>) -> Self {
        toggle(&mut self.technologies, value.into());
        self
    }

    /// Next state with the position selection toggled on or off.
    pub fn toggle_position(mut self, value: impl Into<String>) -> Self {
        toggle(&mut self.positions, value.into());
        self
    }

    /// Next state with the location selection toggled on or off.
    pub fn toggle_location(mut self, value: impl Into<String>) -> Self {
        toggle(&mut self.locations, value.into());
        self
    }
}

fn toggle(selections: &mut BTreeSet<String>, value: String) {
    if !selections.remove(&value) {
        selections.insert(value);
    }
}
