//! Character creation driven by a scenario of yearly questions.
//!
//! A [`ScenarioData`] file supplies starting attributes and an ordered list
//! of questions. A [`CreationSession`] walks those questions one year at a
//! time: it draws a random answer, rolls a d20 check against the answer's
//! difficulty class, and applies the rewards or penalties.

pub mod config;
pub mod error;
pub mod pacing;
pub mod scenario;
pub mod session;

pub use config::CreationConfig;
pub use error::{CreationError, CreationResult};
pub use pacing::{AutoConfirm, RollGate};
pub use scenario::{Answer, Question, ScenarioData};
pub use session::{CheckOutcome, CheckReport, CreationSession, PendingCheck, Turn};
