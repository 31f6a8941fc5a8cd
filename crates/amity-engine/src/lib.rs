//! # amity-engine
//!
//! Drivers for the three game modes. Each driver owns one evaluation
//! session, pulls prompts from the selection crate, records ratings, and
//! hands completed runs to the ranking crate, persisting results through
//! the store collaborator.

pub mod questionnaire;
pub mod themed;
pub mod versus;

pub use questionnaire::{QuestionnaireEngine, RunStatus, StepOutcome};
pub use themed::{ThemedEvaluation, ThemedStep};
pub use versus::{DuelPrompt, DuelStep, VersusDuel};
