//! Attribute scores and the character that carries them.
//!
//! An [`AttributeStore`] starts with all six attributes at zero and is
//! mutated in place while a character is being created. Scores are never
//! clamped and may go negative.

pub mod character;

pub use character::Character;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Mapping from attribute to score, iterated in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    scores: BTreeMap<Attribute, i32>,
}

impl AttributeStore {
    /// Create a store with every attribute present at 0.
    pub fn new() -> Self {
        Self {
            scores: Attribute::ALL.into_iter().map(|a| (a, 0)).collect(),
        }
    }

    /// Current score, or 0 if the attribute is absent.
    pub fn get(&self, attr: Attribute) -> i32 {
        self.scores.get(&attr).copied().unwrap_or(0)
    }

    /// Overwrite a score.
    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.scores.insert(attr, value);
    }

    /// Add `delta` to a score, saturating at the `i32` limits. Returns the
    /// new value.
    pub fn increase(&mut self, attr: Attribute, delta: i32) -> i32 {
        let entry = self.scores.entry(attr).or_insert(0);
        *entry = entry.saturating_add(delta);
        *entry
    }

    /// Subtract `delta` from a score, saturating at the `i32` limits.
    /// Returns the new value.
    pub fn decrease(&mut self, attr: Attribute, delta: i32) -> i32 {
        let entry = self.scores.entry(attr).or_insert(0);
        *entry = entry.saturating_sub(delta);
        *entry
    }

    /// Iterate over `(attribute, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.scores.iter().map(|(a, v)| (*a, *v))
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Attribute, i32)> for AttributeStore {
    /// Start from an all-zero store and apply each pair with `set`.
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (attr, value) in iter {
            store.set(attr, value);
        }
        store
    }
}

impl std::fmt::Display for AttributeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = Attribute::ALL
            .iter()
            .map(|a| format!("{}: {}", a.short_name(), self.get(*a)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Render only the non-zero entries of `values`, in catalog order.
///
/// Returns an empty string when nothing is left to show.
pub fn format_non_zero(values: &BTreeMap<Attribute, i32>) -> String {
    Attribute::ALL
        .iter()
        .filter_map(|a| match values.get(a) {
            Some(v) if *v != 0 => Some(format!("{}: {v}", a.short_name())),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}
