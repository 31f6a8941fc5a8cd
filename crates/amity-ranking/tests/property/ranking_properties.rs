use proptest::prelude::*;

use amity_core::catalog::TraitCatalog;
use amity_core::models::{Friend, RatingsMatrix, Roster};
use amity_ranking::aggregate;

fn roster_of(count: usize) -> Roster {
    (0..count)
        .map(|i| Friend::new(&format!("friend-{i}")).unwrap())
        .collect()
}

/// Score assignments: one optional score per (trait, friend) slot, in
/// catalog × roster order. `None` leaves the pair unrated.
fn matrix_from(roster: &Roster, catalog: &TraitCatalog, scores: &[Option<u8>]) -> RatingsMatrix {
    let mut ratings = RatingsMatrix::new();
    let mut slot = scores.iter();
    for t in catalog.traits() {
        for f in roster.iter() {
            if let Some(Some(score)) = slot.next() {
                ratings.record(&t.id, &f.id, *score);
            }
        }
    }
    ratings
}

proptest! {
    #[test]
    fn aggregation_is_idempotent(
        friend_count in 1usize..6,
        scores in prop::collection::vec(prop::option::of(1u8..=5), 30),
    ) {
        let catalog = TraitCatalog::default();
        let roster = roster_of(friend_count);
        let ratings = matrix_from(&roster, &catalog, &scores);

        let first = aggregate(&catalog, &roster, &ratings);
        let second = aggregate(&catalog, &roster, &ratings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ranks_are_sequential_and_averages_non_increasing(
        friend_count in 1usize..6,
        scores in prop::collection::vec(prop::option::of(1u8..=5), 30),
    ) {
        let catalog = TraitCatalog::default();
        let roster = roster_of(friend_count);
        let ratings = matrix_from(&roster, &catalog, &scores);

        let entries = aggregate(&catalog, &roster, &ratings);
        prop_assert_eq!(entries.len(), friend_count);
        for (i, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.rank, i + 1);
            if i > 0 {
                prop_assert!(entries[i - 1].average() >= entry.average());
            }
        }
    }

    #[test]
    fn at_most_one_best_badge_per_trait(
        friend_count in 1usize..6,
        scores in prop::collection::vec(prop::option::of(1u8..=5), 30),
    ) {
        let catalog = TraitCatalog::default();
        let roster = roster_of(friend_count);
        let ratings = matrix_from(&roster, &catalog, &scores);

        let entries = aggregate(&catalog, &roster, &ratings);
        for t in catalog.traits() {
            let best_holders = entries
                .iter()
                .filter(|e| e.badges.iter().any(|b| !b.is_perfect() && b.trait_id() == t.id))
                .count();
            prop_assert!(best_holders <= 1, "trait {} has {} best badges", t.id, best_holders);
        }
    }

    #[test]
    fn every_max_scorer_gets_the_perfect_badge(
        friend_count in 1usize..6,
        scores in prop::collection::vec(prop::option::of(1u8..=5), 30),
    ) {
        let catalog = TraitCatalog::default();
        let roster = roster_of(friend_count);
        let ratings = matrix_from(&roster, &catalog, &scores);

        let entries = aggregate(&catalog, &roster, &ratings);
        for entry in &entries {
            for t in catalog.traits() {
                let has_perfect = entry
                    .badges
                    .iter()
                    .any(|b| b.is_perfect() && b.trait_id() == t.id);
                prop_assert_eq!(entry.traits[&t.id] == 5, has_perfect);
            }
        }
    }

    #[test]
    fn average_never_counts_unrated_traits(
        friend_count in 1usize..4,
        scores in prop::collection::vec(prop::option::of(1u8..=5), 20),
    ) {
        let catalog = TraitCatalog::default();
        let roster = roster_of(friend_count);
        let ratings = matrix_from(&roster, &catalog, &scores);

        let entries = aggregate(&catalog, &roster, &ratings);
        for entry in &entries {
            let rated: Vec<f64> = entry
                .traits
                .values()
                .filter(|s| **s > 0)
                .map(|s| f64::from(*s))
                .collect();
            let expected = if rated.is_empty() {
                0.0
            } else {
                rated.iter().sum::<f64>() / rated.len() as f64
            };
            prop_assert_eq!(entry.average_score.clone(), format!("{expected:.2}"));
        }
    }
}
