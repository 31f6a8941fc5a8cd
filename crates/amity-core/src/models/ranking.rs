use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Symbolic award attached to a ranking entry, serialized as its string
/// identifier (`best-<traitId>` or `perfect-<traitId>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Badge {
    /// Highest score on the trait across all friends, first encountered wins.
    Best { trait_id: String },
    /// Maximum possible score on the trait.
    Perfect { trait_id: String },
}

impl Badge {
    pub fn best(trait_id: &str) -> Self {
        Badge::Best {
            trait_id: trait_id.to_string(),
        }
    }

    pub fn perfect(trait_id: &str) -> Self {
        Badge::Perfect {
            trait_id: trait_id.to_string(),
        }
    }

    pub fn trait_id(&self) -> &str {
        match self {
            Badge::Best { trait_id } | Badge::Perfect { trait_id } => trait_id,
        }
    }

    pub fn is_perfect(&self) -> bool {
        matches!(self, Badge::Perfect { .. })
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Best { trait_id } => write!(f, "best-{trait_id}"),
            Badge::Perfect { trait_id } => write!(f, "perfect-{trait_id}"),
        }
    }
}

/// A badge identifier that is neither `best-*` nor `perfect-*`.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized badge identifier: {0}")]
pub struct ParseBadgeError(String);

impl From<Badge> for String {
    fn from(badge: Badge) -> Self {
        badge.to_string()
    }
}

impl TryFrom<String> for Badge {
    type Error = ParseBadgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(trait_id) = value.strip_prefix("perfect-") {
            return Ok(Badge::perfect(trait_id));
        }
        if let Some(trait_id) = value.strip_prefix("best-") {
            return Ok(Badge::best(trait_id));
        }
        Err(ParseBadgeError(value))
    }
}

impl std::str::FromStr for Badge {
    type Err = ParseBadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Badge::try_from(s.to_string())
    }
}

/// Computed, sorted output record for one friend after all traits are
/// rated. Immutable once computed. Field names follow the backend's
/// `finalRankings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// 1-based position in descending average-score order.
    pub rank: usize,
    /// Friend display name.
    pub friend: String,
    pub avatar: Option<String>,
    /// Mean of answered-trait scores, formatted to 2 decimals.
    pub average_score: String,
    /// Full per-trait score map, 0 for traits never rated.
    pub traits: BTreeMap<String, u8>,
    pub badges: Vec<Badge>,
}

impl RankingEntry {
    /// Numeric reading of the formatted average.
    pub fn average(&self) -> f64 {
        self.average_score.parse().unwrap_or(0.0)
    }
}

/// One persisted final-ranking document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    pub id: String,
    pub user_id: String,
    pub final_rankings: Vec<RankingEntry>,
    pub timestamp: DateTime<Utc>,
    pub friend_count: usize,
    /// Mean of all friends' (2-decimal rounded) averages.
    pub average_score: f64,
}

impl RankingRecord {
    /// Build the persisted payload from a computed ranking.
    pub fn new(user_id: &str, final_rankings: Vec<RankingEntry>) -> Self {
        let friend_count = final_rankings.len();
        let average_score = if friend_count == 0 {
            0.0
        } else {
            final_rankings.iter().map(RankingEntry::average).sum::<f64>() / friend_count as f64
        };
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            final_rankings,
            timestamp: Utc::now(),
            friend_count,
            average_score,
        }
    }
}
