//! # amity-ranking
//!
//! Turns a completed ratings matrix into ordered, badged results:
//! the full ranking for standard runs, head-to-head summaries for versus
//! duels, podium standings for themed evaluations.

pub mod aggregate;
pub mod themed;
pub mod versus;

pub use aggregate::aggregate;
pub use themed::{themed_standings, PodiumTier, ThemedStanding};
pub use versus::{summarize_duel, FriendDuelOutcome, TraitDuel, VersusSummary, VictoryBand};
