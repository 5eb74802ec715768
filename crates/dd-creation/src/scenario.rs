//! Scenario files: starting attributes and the yearly questions.
//!
//! Attribute keys in the file may be short codes or full names, in any
//! case. Keys that resolve to no attribute are dropped, and so are
//! zero-valued rewards and penalties. A file that cannot be read or parsed
//! is an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dd_mechanics::{Attribute, AttributeStore};

use crate::error::{CreationError, CreationResult};

/// A loaded scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioData {
    /// Raw starting scores keyed by attribute name or short code.
    #[serde(default)]
    pub starting_attributes: BTreeMap<String, i32>,
    /// Questions in play order, one per year.
    pub questions: Vec<Question>,
}

/// One year's question and the answers that may be drawn for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Year number shown to the player.
    pub year: i32,
    /// Prompt text.
    pub question: String,
    /// Candidate answers; one is drawn at random.
    #[serde(rename = "answers_pool")]
    pub answers: Vec<Answer>,
}

/// A possible answer with its attribute check and consequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer identifier, e.g. `"Y1A2"`.
    pub id: String,
    /// What the character did.
    pub description: String,
    /// Raw score increases applied when the check passes.
    #[serde(rename = "attribute_rewards", default)]
    pub rewards: BTreeMap<String, i32>,
    /// Name of the attribute being tested.
    #[serde(rename = "test_attribute")]
    pub test: String,
    /// Difficulty class the roll must meet or beat.
    pub dc: i32,
    /// Raw score decreases applied when the check fails.
    #[serde(rename = "fail_penalty", default)]
    pub penalties: BTreeMap<String, i32>,
}

impl ScenarioData {
    /// Read and parse a scenario file.
    pub fn load(path: impl AsRef<Path>) -> CreationResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CreationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::parse(&text, path)?;
        tracing::info!(
            path = %path.display(),
            questions = data.questions.len(),
            "scenario loaded"
        );
        Ok(data)
    }

    /// Parse a scenario from JSON text.
    pub fn from_json_str(text: &str) -> CreationResult<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> CreationResult<Self> {
        serde_json::from_str(text).map_err(|source| CreationError::Parse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Build the initial attribute store from the starting scores.
    ///
    /// Attributes missing from the file start at 0.
    pub fn starting_attributes(&self) -> AttributeStore {
        resolve_map(&self.starting_attributes, false)
            .into_iter()
            .collect()
    }

    /// Check that every question can be played.
    ///
    /// Collects every problem rather than stopping at the first one.
    pub fn validate(&self) -> CreationResult<()> {
        let mut problems = Vec::new();
        if self.questions.is_empty() {
            problems.push("scenario has no questions".to_string());
        }
        for question in &self.questions {
            if question.answers.is_empty() {
                let err = CreationError::EmptyAnswerPool {
                    year: question.year,
                };
                problems.push(err.to_string());
            }
            for answer in &question.answers {
                if let Err(e) = answer.test_attribute() {
                    problems.push(e.to_string());
                }
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CreationError::Invalid(problems))
        }
    }
}

impl Answer {
    /// The tested attribute. An unknown name is fatal for the run.
    pub fn test_attribute(&self) -> CreationResult<Attribute> {
        Attribute::lookup(&self.test).ok_or_else(|| CreationError::UnknownTestAttribute {
            answer: self.id.clone(),
            name: self.test.clone(),
        })
    }

    /// Rewards keyed by attribute, without unknown keys or zero values.
    pub fn rewards(&self) -> BTreeMap<Attribute, i32> {
        resolve_map(&self.rewards, true)
    }

    /// Penalties keyed by attribute, without unknown keys or zero values.
    pub fn penalties(&self) -> BTreeMap<Attribute, i32> {
        resolve_map(&self.penalties, true)
    }
}

/// Resolve raw attribute keys, dropping the ones that match nothing.
fn resolve_map(raw: &BTreeMap<String, i32>, skip_zero: bool) -> BTreeMap<Attribute, i32> {
    raw.iter()
        .filter(|(_, value)| !(skip_zero && **value == 0))
        .filter_map(|(key, value)| match Attribute::lookup(key) {
            Some(attr) => Some((attr, *value)),
            None => {
                tracing::debug!(key = %key, "ignoring unknown attribute key");
                None
            }
        })
        .collect()
}
