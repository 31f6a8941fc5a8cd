use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::errors::SessionError;
use crate::models::Friend;

/// A validated 1-5 score assigned to one friend for one question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = SCORE_MIN;
    pub const MAX: u8 = SCORE_MAX;

    /// Create a new Score, rejecting values outside `[1, 5]`.
    pub fn new(value: u8) -> Result<Self, SessionError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SessionError::InvalidScore { value });
        }
        Ok(Self(value))
    }

    /// Get the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this score earns the perfect badge for its trait.
    pub fn is_perfect(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<u8> for Score {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which game produced a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Standard,
    Versus,
    Themed,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvaluationMode::Standard => "standard",
            EvaluationMode::Versus => "versus",
            EvaluationMode::Themed => "themed",
        };
        f.write_str(s)
    }
}

/// In-memory ratings for one evaluation run, keyed first by trait id and
/// then by friend id. A later write overwrites rather than accumulates.
///
/// Versus mode stores victory counts here, so values are raw `u8`, not
/// [`Score`]; standard and themed ratings are validated before recording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsMatrix {
    scores: BTreeMap<String, BTreeMap<String, u8>>,
}

impl RatingsMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score, overwriting any previous one for the pair.
    pub fn record(&mut self, trait_id: &str, friend_id: &str, score: u8) {
        self.scores
            .entry(trait_id.to_string())
            .or_default()
            .insert(friend_id.to_string(), score);
    }

    pub fn get(&self, trait_id: &str, friend_id: &str) -> Option<u8> {
        self.scores.get(trait_id)?.get(friend_id).copied()
    }

    /// Recorded score, or 0 when the pair was never rated.
    pub fn score_or_zero(&self, trait_id: &str, friend_id: &str) -> u8 {
        self.get(trait_id, friend_id).unwrap_or(0)
    }

    /// Whether a nonzero rating exists for the pair.
    pub fn is_rated(&self, trait_id: &str, friend_id: &str) -> bool {
        self.score_or_zero(trait_id, friend_id) > 0
    }

    /// Number of friends with a recorded score for a trait.
    pub fn rated_count(&self, trait_id: &str) -> usize {
        self.scores.get(trait_id).map(|m| m.len()).unwrap_or(0)
    }

    /// Trait ids with at least one recorded score, in sorted order.
    pub fn trait_ids(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Drop all recorded scores.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// One persisted rating event, as appended to the store.
/// Field names follow the hosted backend's existing `ratings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub id: String,
    pub user_id: String,
    pub trait_id: String,
    pub friend_id: String,
    pub score: u8,
    pub mode: EvaluationMode,
    pub timestamp: DateTime<Utc>,
}

impl RatingRecord {
    pub fn new(
        user_id: &str,
        trait_id: &str,
        friend_id: &str,
        score: u8,
        mode: EvaluationMode,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            trait_id: trait_id.to_string(),
            friend_id: friend_id.to_string(),
            score,
            mode,
            timestamp: Utc::now(),
        }
    }
}

/// A friend together with their full rating history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendWithRatings {
    pub friend: Friend,
    pub ratings: Vec<RatingRecord>,
}

/// One persisted evaluation-session marker.
/// Field names follow the backend's `evaluationSessions` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSessionRecord {
    pub id: String,
    pub user_id: String,
    pub mode: EvaluationMode,
    pub friend_ids: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl EvaluationSessionRecord {
    pub fn new(user_id: &str, mode: EvaluationMode, friend_ids: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            mode,
            friend_ids,
            started_at: Utc::now(),
        }
    }
}
