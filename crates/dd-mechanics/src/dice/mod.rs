//! Dice types and rolling.
//!
//! Every roll takes the RNG explicitly so callers decide how it is seeded:
//! from OS entropy in play, from a fixed seed in tests.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MechError, MechResult};

/// A die with a fixed number of faces.
///
/// Built only from the constants below, so it always has at least one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die(u32);

impl Die {
    /// Twenty-sided die used for attribute checks.
    pub const D20: Die = Die(20);

    /// Roll this die once.
    pub fn roll(self, rng: &mut StdRng) -> MechResult<u32> {
        roll_die(rng, self.0)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// Roll one die with `sides` faces, uniform in `1..=sides`.
pub fn roll_die(rng: &mut StdRng, sides: u32) -> MechResult<u32> {
    if sides == 0 {
        return Err(MechError::InvalidDie(sides));
    }
    Ok(rng.random_range(1..=sides))
}

/// Roll `count` independent dice, keeping the order they were rolled in.
pub fn roll_dice(rng: &mut StdRng, count: u32, sides: u32) -> MechResult<Vec<u32>> {
    if sides == 0 {
        return Err(MechError::InvalidDie(sides));
    }
    (0..count).map(|_| roll_die(rng, sides)).collect()
}

/// Sum of a sequence of die values; 0 when empty.
pub fn sum(values: &[u32]) -> u32 {
    values.iter().sum()
}

/// Roll `count` dice with `sides` faces and return the total.
pub fn roll(rng: &mut StdRng, count: u32, sides: u32) -> MechResult<u32> {
    let values = roll_dice(rng, count, sides)?;
    Ok(sum(&values))
}
