//! Data model: friends, scores, the ratings matrix, and ranking output.

mod friend;
mod ranking;
mod rating;

pub use friend::{Friend, Roster};
pub use ranking::{Badge, ParseBadgeError, RankingEntry, RankingRecord};
pub use rating::{
    EvaluationMode, EvaluationSessionRecord, FriendWithRatings, RatingRecord, RatingsMatrix, Score,
};
