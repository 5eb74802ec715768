//! The six character attributes and their lookup tables.
//!
//! Attributes have a lowercase full name (`strength`) and an upper-case
//! three-letter short code (`STR`). Both lookups ignore case.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MechError;

/// A character attribute. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and health.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Full lowercase name, e.g. `"strength"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter upper-case code, e.g. `"STR"`.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Look up an attribute by full name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Look up an attribute by short code, ignoring case.
    pub fn from_short_name(short: &str) -> Option<Self> {
        let short = short.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.short_name().eq_ignore_ascii_case(short))
    }

    /// Look up by short code first, then by full name.
    ///
    /// Scenario files use both forms, so this is the lookup everything
    /// reading user data should go through.
    pub fn lookup(text: &str) -> Option<Self> {
        Self::from_short_name(text).or_else(|| Self::from_name(text))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| MechError::UnknownAttribute(s.to_string()))
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so 9 gives -1 and 7 gives -2.
/// Computed in `i64` so no `i32` score can overflow.
pub fn ability_modifier(score: i32) -> i32 {
    // |(i32 - 10) / 2| always fits back into i32.
    (i64::from(score) - 10).div_euclid(2) as i32
}
