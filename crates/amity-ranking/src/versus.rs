//! Head-to-head duel summary: victory bands per trait, overall totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use amity_core::models::{RatingsMatrix, Roster};

/// How decisively a friend took one trait's prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VictoryBand {
    /// Won every prompt for the trait.
    Decisive,
    /// Won the majority of prompts.
    Advantage,
    /// Won at least one prompt.
    Edge,
    /// Won nothing.
    ShutOut,
}

impl VictoryBand {
    /// Band a victory count against the number of prompts asked.
    pub fn from_victories(victories: u8, prompts_per_trait: usize) -> Self {
        let v = usize::from(victories);
        if prompts_per_trait > 0 && v >= prompts_per_trait {
            VictoryBand::Decisive
        } else if v * 2 > prompts_per_trait {
            VictoryBand::Advantage
        } else if v > 0 {
            VictoryBand::Edge
        } else {
            VictoryBand::ShutOut
        }
    }
}

/// One friend's showing on one dueled trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendDuelOutcome {
    pub friend_id: String,
    pub friend: String,
    pub victories: u8,
    pub band: VictoryBand,
}

/// Both friends' showings on one trait, roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDuel {
    pub trait_id: String,
    pub outcomes: Vec<FriendDuelOutcome>,
}

/// Full summary of a completed duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersusSummary {
    /// Per-trait outcomes for every trait that recorded victories.
    pub per_trait: Vec<TraitDuel>,
    /// Total victories per friend id across all dueled traits.
    pub totals: BTreeMap<String, u32>,
    /// Friend id with the strictly highest total; `None` on a tie.
    pub overall_winner: Option<String>,
}

/// Summarize a duel from the victory counts stored in the ratings matrix.
pub fn summarize_duel(
    roster: &Roster,
    ratings: &RatingsMatrix,
    prompts_per_trait: usize,
) -> VersusSummary {
    let mut totals: BTreeMap<String, u32> = roster.iter().map(|f| (f.id.clone(), 0)).collect();

    let per_trait: Vec<TraitDuel> = ratings
        .trait_ids()
        .map(|trait_id| {
            let outcomes = roster
                .iter()
                .map(|f| {
                    let victories = ratings.score_or_zero(trait_id, &f.id);
                    if let Some(total) = totals.get_mut(&f.id) {
                        *total += u32::from(victories);
                    }
                    FriendDuelOutcome {
                        friend_id: f.id.clone(),
                        friend: f.name.clone(),
                        victories,
                        band: VictoryBand::from_victories(victories, prompts_per_trait),
                    }
                })
                .collect();
            TraitDuel {
                trait_id: trait_id.to_string(),
                outcomes,
            }
        })
        .collect();

    let overall_winner = {
        let top = totals.values().max().copied().unwrap_or(0);
        let mut at_top = totals.iter().filter(|(_, v)| **v == top);
        match (at_top.next(), at_top.next()) {
            (Some((id, _)), None) => Some(id.clone()),
            _ => None,
        }
    };

    VersusSummary {
        per_trait,
        totals,
        overall_winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amity_core::models::Friend;

    fn duel_roster() -> (Roster, String, String) {
        let roster: Roster = ["A", "B"].iter().map(|n| Friend::new(n).unwrap()).collect();
        let (a, b) = {
            let mut ids = roster.iter().map(|f| f.id.clone());
            let a = ids.next().unwrap();
            let b = ids.next().unwrap();
            (a, b)
        };
        (roster, a, b)
    }

    #[test]
    fn bands_for_three_prompts() {
        assert_eq!(VictoryBand::from_victories(3, 3), VictoryBand::Decisive);
        assert_eq!(VictoryBand::from_victories(2, 3), VictoryBand::Advantage);
        assert_eq!(VictoryBand::from_victories(1, 3), VictoryBand::Edge);
        assert_eq!(VictoryBand::from_victories(0, 3), VictoryBand::ShutOut);
    }

    #[test]
    fn totals_and_winner() {
        let (roster, a, b) = duel_roster();
        let mut ratings = RatingsMatrix::new();
        ratings.record("loyalty", &a, 2);
        ratings.record("loyalty", &b, 1);
        ratings.record("complicity", &a, 3);
        ratings.record("complicity", &b, 0);

        let summary = summarize_duel(&roster, &ratings, 3);
        assert_eq!(summary.totals[&a], 5);
        assert_eq!(summary.totals[&b], 1);
        assert_eq!(summary.overall_winner.as_deref(), Some(a.as_str()));
        assert_eq!(summary.per_trait.len(), 2);

        let complicity = summary
            .per_trait
            .iter()
            .find(|d| d.trait_id == "complicity")
            .unwrap();
        assert_eq!(complicity.outcomes[0].band, VictoryBand::Decisive);
        assert_eq!(complicity.outcomes[1].band, VictoryBand::ShutOut);
    }

    #[test]
    fn tied_totals_have_no_overall_winner() {
        let (roster, a, b) = duel_roster();
        let mut ratings = RatingsMatrix::new();
        ratings.record("loyalty", &a, 2);
        ratings.record("loyalty", &b, 1);
        ratings.record("complicity", &a, 1);
        ratings.record("complicity", &b, 2);

        let summary = summarize_duel(&roster, &ratings, 3);
        assert_eq!(summary.overall_winner, None);
    }
}
