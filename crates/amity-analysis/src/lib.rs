//! # amity-analysis
//!
//! Turns a friend's rating history into an actionable view: per-trait
//! averages, strengths and weaknesses, recommendations, and suggested
//! improvement activities.

pub mod activities;
pub mod profile;
pub mod recommendations;

pub use activities::{ActivityCatalog, Difficulty, Duration, ImprovementActivity};
pub use profile::{analyze, FriendProfile};
pub use recommendations::{Recommendation, RecommendationCatalog};
