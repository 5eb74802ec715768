//! The creation driver.
//!
//! `CreationSession` walks the scenario's questions in order. Each year it
//! draws one answer at random, resolves the tested attribute, rolls
//! `d20 + ability modifier` against the answer's DC, and applies the
//! rewards on a pass or the penalties on a fail. Ties pass.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use dd_mechanics::{Attribute, AttributeStore, Character, Die, ability_modifier};

use crate::config::CreationConfig;
use crate::error::{CreationError, CreationResult};
use crate::pacing::RollGate;
use crate::scenario::{Answer, ScenarioData};

/// Die rolled for every attribute check.
pub const CHECK_DIE: Die = Die::D20;

/// A drawn answer waiting for its roll.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCheck {
    /// Year of the question.
    pub year: i32,
    /// Question text.
    pub question: String,
    /// The answer that was drawn.
    pub answer: Answer,
    /// Attribute being tested.
    pub attribute: Attribute,
    /// Score of the tested attribute when the answer was drawn.
    pub score: i32,
    /// Difficulty class to meet or beat.
    pub dc: i32,
    /// Increases applied on a pass (zero and unknown entries removed).
    pub rewards: BTreeMap<Attribute, i32>,
    /// Decreases applied on a fail (zero and unknown entries removed).
    pub penalties: BTreeMap<Attribute, i32>,
}

/// Whether a check met its DC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Total was at least the DC; rewards were applied.
    Passed,
    /// Total was below the DC; penalties were applied.
    Failed,
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The result of rolling a pending check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Raw d20 value.
    pub die: u32,
    /// Ability modifier of the tested score.
    pub modifier: i32,
    /// `die + modifier`.
    pub total: i32,
    /// Difficulty class the total was compared against.
    pub dc: i32,
    /// Pass or fail.
    pub outcome: CheckOutcome,
    /// Amounts applied: increases on a pass, decreases on a fail.
    pub applied: BTreeMap<Attribute, i32>,
}

impl CheckReport {
    /// Returns true if the check met its DC.
    pub fn passed(&self) -> bool {
        self.outcome == CheckOutcome::Passed
    }
}

/// One completed year: the drawn check and how it went.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// The check that was drawn.
    pub check: PendingCheck,
    /// Its resolution.
    pub report: CheckReport,
}

/// A character being created, one question at a time.
pub struct CreationSession {
    scenario: ScenarioData,
    character: Character,
    attributes: AttributeStore,
    next_question: usize,
    rng: StdRng,
}

impl CreationSession {
    /// Start a session, seeding the RNG from the config.
    pub fn new(
        scenario: ScenarioData,
        name: impl Into<String>,
        job: impl Into<String>,
        config: &CreationConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(scenario, Character::new(name, job), rng)
    }

    /// Start a session with an explicit RNG.
    ///
    /// The character's own attributes are replaced by the final scores in
    /// [`finish`](Self::finish); play starts from the scenario's
    /// starting attributes.
    pub fn with_rng(scenario: ScenarioData, character: Character, rng: StdRng) -> Self {
        let attributes = scenario.starting_attributes();
        Self {
            scenario,
            character,
            attributes,
            next_question: 0,
            rng,
        }
    }

    /// The character under construction.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Current working attribute scores.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Number of questions not yet drawn.
    pub fn remaining(&self) -> usize {
        self.scenario.questions.len() - self.next_question
    }

    /// Draw an answer for the next question.
    ///
    /// Returns `Ok(None)` once every question has been played. An empty
    /// answer pool or an unknown tested attribute is an error.
    pub fn draw(&mut self) -> CreationResult<Option<PendingCheck>> {
        let Some(question) = self.scenario.questions.get(self.next_question) else {
            return Ok(None);
        };
        let answer = question
            .answers
            .choose(&mut self.rng)
            .ok_or(CreationError::EmptyAnswerPool {
                year: question.year,
            })?;
        let attribute = answer.test_attribute()?;

        let check = PendingCheck {
            year: question.year,
            question: question.question.clone(),
            answer: answer.clone(),
            attribute,
            score: self.attributes.get(attribute),
            dc: answer.dc,
            rewards: answer.rewards(),
            penalties: answer.penalties(),
        };
        self.next_question += 1;

        tracing::debug!(
            year = check.year,
            answer = %check.answer.id,
            attribute = %attribute,
            dc = check.dc,
            "answer drawn"
        );
        Ok(Some(check))
    }

    /// Roll the check die and resolve `check`.
    pub fn roll(&mut self, check: &PendingCheck) -> CreationResult<CheckReport> {
        let die = CHECK_DIE.roll(&mut self.rng)?;
        Ok(self.resolve(check, die))
    }

    /// Resolve `check` with a known die value and apply the consequences.
    pub fn resolve(&mut self, check: &PendingCheck, die: u32) -> CheckReport {
        let modifier = ability_modifier(check.score);
        let total = i32::try_from(die)
            .unwrap_or(i32::MAX)
            .saturating_add(modifier);

        let (outcome, applied) = if total >= check.dc {
            for (attr, amount) in &check.rewards {
                self.attributes.increase(*attr, *amount);
            }
            (CheckOutcome::Passed, check.rewards.clone())
        } else {
            for (attr, amount) in &check.penalties {
                self.attributes.decrease(*attr, *amount);
            }
            (CheckOutcome::Failed, check.penalties.clone())
        };

        tracing::debug!(die, modifier, total, dc = check.dc, %outcome, "check resolved");
        CheckReport {
            die,
            modifier,
            total,
            dc: check.dc,
            outcome,
            applied,
        }
    }

    /// Play every remaining question, waiting on `gate` before each roll.
    ///
    /// `on_turn` sees each resolved turn together with the updated scores.
    pub fn run<F>(
        &mut self,
        gate: &mut dyn RollGate,
        mut on_turn: F,
    ) -> CreationResult<Vec<Turn>>
    where
        F: FnMut(&Turn, &AttributeStore),
    {
        let mut turns = Vec::with_capacity(self.remaining());
        while let Some(check) = self.draw()? {
            gate.await_roll(&check)?;
            let report = self.roll(&check)?;
            let turn = Turn { check, report };
            on_turn(&turn, &self.attributes);
            turns.push(turn);
        }
        Ok(turns)
    }

    /// Hand the final scores to the character and return it.
    pub fn finish(mut self) -> Character {
        self.character.attributes = self.attributes;
        self.character
    }
}
