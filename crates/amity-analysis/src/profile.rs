//! Per-friend profile from the full rating history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use amity_core::catalog::TraitCatalog;
use amity_core::models::RatingRecord;

/// Analysis of one friend across every rating ever recorded for them.
/// Strengths and weaknesses carry trait display names, since that is the
/// key the recommendation and activity content tables use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendProfile {
    pub friend_id: String,
    /// Mean score per trait id over all recorded ratings for it.
    pub trait_averages: BTreeMap<String, f64>,
    /// Traits averaging strictly above the threshold.
    pub strengths: Vec<String>,
    /// Rated traits at or below the threshold.
    pub weaknesses: Vec<String>,
}

/// Analyze a friend's rating history. Only the friend's own records
/// count; traits never rated do not appear at all (they are unknown, not
/// weak). Threshold comes from [`amity_core::AmityConfig`].
pub fn analyze(
    friend_id: &str,
    history: &[RatingRecord],
    catalog: &TraitCatalog,
    strength_threshold: f64,
) -> FriendProfile {
    let mut per_trait: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    for record in history.iter().filter(|r| r.friend_id == friend_id) {
        per_trait
            .entry(record.trait_id.clone())
            .or_default()
            .push(record.score);
    }

    let trait_averages: BTreeMap<String, f64> = per_trait
        .into_iter()
        .map(|(trait_id, scores)| {
            let mean = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;
            (trait_id, mean)
        })
        .collect();

    let display_name = |trait_id: &str| {
        catalog
            .get(trait_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| trait_id.to_string())
    };
    let strengths: Vec<String> = trait_averages
        .iter()
        .filter(|(_, avg)| **avg > strength_threshold)
        .map(|(id, _)| display_name(id))
        .collect();
    let weaknesses: Vec<String> = trait_averages
        .iter()
        .filter(|(_, avg)| **avg <= strength_threshold)
        .map(|(id, _)| display_name(id))
        .collect();

    tracing::debug!(
        "analysis: {friend_id} has {} strengths, {} weaknesses",
        strengths.len(),
        weaknesses.len()
    );

    FriendProfile {
        friend_id: friend_id.to_string(),
        trait_averages,
        strengths,
        weaknesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amity_core::models::EvaluationMode;

    fn record(friend_id: &str, trait_id: &str, score: u8) -> RatingRecord {
        RatingRecord::new("user-1", trait_id, friend_id, score, EvaluationMode::Standard)
    }

    #[test]
    fn averages_over_repeated_ratings() {
        let catalog = TraitCatalog::default();
        let history = vec![
            record("f1", "loyalty", 2),
            record("f1", "loyalty", 4),
            record("f1", "complicity", 2),
            record("f2", "loyalty", 5),
        ];
        let profile = analyze("f1", &history, &catalog, 2.5);
        assert!((profile.trait_averages["loyalty"] - 3.0).abs() < f64::EPSILON);
        assert_eq!(profile.strengths, vec!["Loyalty".to_string()]);
        assert_eq!(profile.weaknesses, vec!["Complicity".to_string()]);
    }

    #[test]
    fn unrated_traits_are_absent_not_weak() {
        let catalog = TraitCatalog::default();
        let history = vec![record("f1", "loyalty", 5)];
        let profile = analyze("f1", &history, &catalog, 2.5);
        assert_eq!(profile.trait_averages.len(), 1);
        assert!(profile.weaknesses.is_empty());
    }

    #[test]
    fn unknown_trait_id_falls_back_to_raw_id() {
        let catalog = TraitCatalog::default();
        let history = vec![record("f1", "punctuality", 1)];
        let profile = analyze("f1", &history, &catalog, 2.5);
        assert_eq!(profile.weaknesses, vec!["punctuality".to_string()]);
    }

    #[test]
    fn empty_history_yields_empty_profile() {
        let catalog = TraitCatalog::default();
        let profile = analyze("f1", &[], &catalog, 2.5);
        assert!(profile.trait_averages.is_empty());
        assert!(profile.strengths.is_empty());
        assert!(profile.weaknesses.is_empty());
    }
}
