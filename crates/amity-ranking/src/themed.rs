//! Standings for a themed (single-trait) evaluation.

use serde::{Deserialize, Serialize};

use amity_core::models::{RatingsMatrix, Roster};

/// Podium tier by final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodiumTier {
    Gold,
    Silver,
    Bronze,
    Contender,
}

impl PodiumTier {
    fn for_position(position: usize) -> Self {
        match position {
            1 => PodiumTier::Gold,
            2 => PodiumTier::Silver,
            3 => PodiumTier::Bronze,
            _ => PodiumTier::Contender,
        }
    }
}

/// One friend's final standing on the evaluated trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedStanding {
    /// 1-based position in descending score order.
    pub position: usize,
    pub friend_id: String,
    pub friend: String,
    pub avatar: Option<String>,
    pub score: u8,
    pub tier: PodiumTier,
}

/// Sort friends descending by their score on the one evaluated trait.
/// Unrated friends score 0; equal scores keep roster order.
pub fn themed_standings(
    roster: &Roster,
    trait_id: &str,
    ratings: &RatingsMatrix,
) -> Vec<ThemedStanding> {
    let mut by_score: Vec<_> = roster
        .iter()
        .map(|f| (f, ratings.score_or_zero(trait_id, &f.id)))
        .collect();
    by_score.sort_by(|a, b| b.1.cmp(&a.1));

    by_score
        .into_iter()
        .enumerate()
        .map(|(index, (friend, score))| ThemedStanding {
            position: index + 1,
            friend_id: friend.id.clone(),
            friend: friend.name.clone(),
            avatar: friend.avatar.clone(),
            score,
            tier: PodiumTier::for_position(index + 1),
        })
        .collect()
}
