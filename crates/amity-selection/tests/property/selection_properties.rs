use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use amity_core::catalog::TraitCatalog;
use amity_core::models::{EvaluationMode, Friend};
use amity_selection::select_next;
use amity_session::EvaluationSession;

fn session_with_friends(count: usize) -> EvaluationSession {
    let mut session = EvaluationSession::new("user-1", EvaluationMode::Standard);
    for i in 0..count {
        session
            .add_friend(Friend::new(&format!("friend-{i}")).unwrap())
            .unwrap();
    }
    session
}

proptest! {
    #[test]
    fn selected_friend_is_always_unrated(
        friend_count in 1usize..8,
        rated_mask in any::<u8>(),
        seed in any::<u64>(),
    ) {
        let catalog = TraitCatalog::default();
        let loyalty = catalog.get("loyalty").unwrap();
        let mut session = session_with_friends(friend_count);
        let ids: Vec<String> = session.roster.iter().map(|f| f.id.clone()).collect();

        let mut rated = HashSet::new();
        for (i, id) in ids.iter().enumerate() {
            if rated_mask & (1 << i) != 0 {
                session.record_rating(&loyalty.id, id, 3);
                rated.insert(id.clone());
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        match select_next(&mut session, loyalty, &mut rng) {
            Some(picked) => prop_assert!(!rated.contains(&picked.friend_id)),
            None => prop_assert_eq!(rated.len(), friend_count),
        }
    }

    #[test]
    fn fully_rated_trait_always_signals_none(
        friend_count in 1usize..8,
        seed in any::<u64>(),
    ) {
        let catalog = TraitCatalog::default();
        let loyalty = catalog.get("loyalty").unwrap();
        let mut session = session_with_friends(friend_count);
        let ids: Vec<String> = session.roster.iter().map(|f| f.id.clone()).collect();
        for id in &ids {
            session.record_rating(&loyalty.id, id, 5);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(select_next(&mut session, loyalty, &mut rng).is_none());
    }

    #[test]
    fn no_template_repeats_before_exhaustion(seed in any::<u64>()) {
        let catalog = TraitCatalog::default();
        let loyalty = catalog.get("loyalty").unwrap();
        let template_count = loyalty.questions.standard.len();
        let mut session = session_with_friends(1);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut seen = HashSet::new();
        for _ in 0..template_count {
            let picked = select_next(&mut session, loyalty, &mut rng).unwrap();
            prop_assert!(seen.insert(picked.question_index));
        }
        prop_assert_eq!(seen.len(), template_count);

        // One more pick: the pool has reset, any index is fair again.
        let picked = select_next(&mut session, loyalty, &mut rng).unwrap();
        prop_assert!(picked.question_index < template_count);
    }
}
