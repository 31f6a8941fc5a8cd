//! # amity-core
//!
//! Foundation crate for the Amity friend-evaluation engine.
//! Defines all types, the personality-trait catalog, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{PersonalityTrait, QuestionSet, TraitCatalog};
pub use config::AmityConfig;
pub use errors::{AmityError, AmityResult};
pub use models::{
    Badge, EvaluationMode, Friend, RankingEntry, RankingRecord, RatingRecord, RatingsMatrix,
    Roster, Score,
};
