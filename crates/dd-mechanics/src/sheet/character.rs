//! The character record produced by a creation run.

use serde::{Deserialize, Serialize};

use super::AttributeStore;

/// A named character with a job and attribute scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Character job or class, free text.
    pub job: String,
    /// Attribute scores.
    pub attributes: AttributeStore,
}

impl Character {
    /// Create a character whose attributes are all zero.
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self::with_attributes(name, job, AttributeStore::new())
    }

    /// Create a character with the given attribute scores.
    pub fn with_attributes(
        name: impl Into<String>,
        job: impl Into<String>,
        attributes: AttributeStore,
    ) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
            attributes,
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} the {} [{}]", self.name, self.job, self.attributes)
    }
}
