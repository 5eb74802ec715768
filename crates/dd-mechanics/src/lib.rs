//! Tabletop mechanics for the DandD character creator.
//!
//! Provides dice rolling with an injected RNG, the six-attribute catalog
//! with ability modifiers, the mutable attribute store, and the character
//! record it ends up in.

pub mod attribute;
pub mod dice;
pub mod error;
pub mod sheet;

pub use attribute::{Attribute, ability_modifier};
pub use dice::{Die, roll, roll_dice, roll_die, sum};
pub use error::{MechError, MechResult};
pub use sheet::{AttributeStore, Character, format_non_zero};
