//! Ranking Aggregator: per-friend averages, stable descending order,
//! badge assignment in a single pass.

use std::collections::{BTreeMap, HashSet};

use amity_core::catalog::TraitCatalog;
use amity_core::constants::SCORE_MAX;
use amity_core::models::{Badge, Friend, RankingEntry, RatingsMatrix, Roster};

/// Highest recorded score per trait across all friends, 0 when a trait
/// was never rated.
pub fn best_scores_per_trait(
    catalog: &TraitCatalog,
    roster: &Roster,
    ratings: &RatingsMatrix,
) -> BTreeMap<String, u8> {
    catalog
        .traits()
        .iter()
        .map(|t| {
            let highest = roster
                .iter()
                .map(|f| ratings.score_or_zero(&t.id, &f.id))
                .max()
                .unwrap_or(0);
            (t.id.clone(), highest)
        })
        .collect()
}

struct ScoredFriend<'a> {
    friend: &'a Friend,
    average: f64,
    traits: BTreeMap<String, u8>,
}

/// Compute the final ranking for a completed evaluation run.
///
/// Per friend, the average counts only traits with a nonzero recorded
/// score; a friend with no ratings averages 0. The sort is stable, so
/// friends with equal averages keep roster order. Each trait's best badge
/// goes to the first friend (in ranking order) matching the trait
/// maximum; every friend scoring the maximum possible value earns that
/// trait's perfect badge.
///
/// Pure and idempotent; an empty roster yields an empty list.
pub fn aggregate(
    catalog: &TraitCatalog,
    roster: &Roster,
    ratings: &RatingsMatrix,
) -> Vec<RankingEntry> {
    let best_scores = best_scores_per_trait(catalog, roster, ratings);

    let mut scored: Vec<ScoredFriend<'_>> = roster
        .iter()
        .map(|friend| {
            let mut total: u32 = 0;
            let mut rated_traits: u32 = 0;
            let mut traits = BTreeMap::new();
            for t in catalog.traits() {
                let score = ratings.score_or_zero(&t.id, &friend.id);
                traits.insert(t.id.clone(), score);
                if score > 0 {
                    total += u32::from(score);
                    rated_traits += 1;
                }
            }
            let average = if rated_traits > 0 {
                f64::from(total) / f64::from(rated_traits)
            } else {
                0.0
            };
            ScoredFriend {
                friend,
                average,
                traits,
            }
        })
        .collect();

    // Stable sort: equal averages keep insertion order.
    scored.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut best_awarded: HashSet<String> = HashSet::new();
    let entries: Vec<RankingEntry> = scored
        .into_iter()
        .enumerate()
        .map(|(index, s)| {
            let mut badges = Vec::new();
            for t in catalog.traits() {
                let score = s.traits.get(&t.id).copied().unwrap_or(0);
                // First friend in ranking order at the trait maximum wins
                // the best badge; ties and the zero maximum included.
                if score == best_scores.get(&t.id).copied().unwrap_or(0)
                    && best_awarded.insert(t.id.clone())
                {
                    badges.push(Badge::best(&t.id));
                }
                if score == SCORE_MAX {
                    badges.push(Badge::perfect(&t.id));
                }
            }
            RankingEntry {
                rank: index + 1,
                friend: s.friend.name.clone(),
                avatar: s.friend.avatar.clone(),
                average_score: format!("{:.2}", s.average),
                traits: s.traits,
                badges,
            }
        })
        .collect();

    tracing::debug!(
        "ranking: aggregated {} friends across {} traits",
        entries.len(),
        catalog.len()
    );
    entries
}
