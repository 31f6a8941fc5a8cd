//! End-to-end flows for the three game-mode drivers against the
//! in-memory store.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use amity_core::catalog::TraitCatalog;
use amity_core::errors::{AmityError, StorageError};
use amity_core::models::{
    EvaluationSessionRecord, Friend, FriendWithRatings, RankingRecord, RatingRecord, Score,
};
use amity_core::traits::IQuizStore;
use amity_core::{AmityConfig, AmityResult};
use amity_engine::{
    DuelStep, QuestionnaireEngine, RunStatus, StepOutcome, ThemedEvaluation, ThemedStep,
    VersusDuel,
};
use amity_storage::MemoryStore;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("amity=debug")
        .try_init();
}

#[test]
fn standard_run_produces_ranking_and_persists() {
    init_tracing();
    let catalog = TraitCatalog::default();
    let store = MemoryStore::new();
    let mut engine = QuestionnaireEngine::new(&catalog, &store, "user-1");

    let ana = engine.add_friend("Ana", None).unwrap();
    let bea = engine.add_friend("Bea", Some("avatars/bea.png")).unwrap();
    let caro = engine.add_friend("Caro", None).unwrap();
    assert_eq!(engine.status(), RunStatus::CollectingFriends);

    // Ana and Bea tie at 5 on every trait, Caro scores 3.
    let score_for: HashMap<String, u8> =
        HashMap::from([(ana.clone(), 5), (bea.clone(), 5), (caro.clone(), 3)]);

    let mut rng = StdRng::seed_from_u64(11);
    let mut prompt = engine.start(&mut rng).unwrap();
    assert_eq!(engine.status(), RunStatus::Rating);

    let mut answered = 0;
    loop {
        let score = Score::new(score_for[&prompt.friend_id]).unwrap();
        answered += 1;
        match engine.rate(score, &mut rng).unwrap() {
            StepOutcome::Prompt(next) => prompt = next,
            StepOutcome::Finished => break,
        }
    }

    // 3 friends × 5 traits.
    assert_eq!(answered, 15);
    assert_eq!(engine.status(), RunStatus::Finished);
    assert!(engine.progress().is_complete());

    let rankings = engine.final_rankings().unwrap();
    let order: Vec<_> = rankings.iter().map(|e| e.friend.as_str()).collect();
    assert_eq!(order, ["Ana", "Bea", "Caro"]);
    assert_eq!(rankings[0].average_score, "5.00");
    assert_eq!(rankings[1].rank, 2);

    // Ana takes best + perfect on all five traits; Bea perfect only.
    assert_eq!(rankings[0].badges.len(), 10);
    assert_eq!(rankings[1].badges.len(), 5);
    assert!(rankings[1].badges.iter().all(|b| b.is_perfect()));
    assert!(rankings[2].badges.is_empty());

    let history = store.ranking_history("user-1").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].friend_count, 3);
    assert!((history[0].average_score - (5.0 + 5.0 + 3.0) / 3.0).abs() < 1e-9);
    assert_eq!(store.ratings_for_friend("user-1", &ana).unwrap().len(), 5);
}

/// Store whose final-ranking save always fails, everything else delegated.
struct OfflineRankingStore {
    inner: MemoryStore,
}

impl IQuizStore for OfflineRankingStore {
    fn add_friend(&self, user_id: &str, friend: &Friend) -> AmityResult<String> {
        self.inner.add_friend(user_id, friend)
    }
    fn friend_by_name(&self, user_id: &str, name: &str) -> AmityResult<Option<Friend>> {
        self.inner.friend_by_name(user_id, name)
    }
    fn friends(&self, user_id: &str) -> AmityResult<Vec<Friend>> {
        self.inner.friends(user_id)
    }
    fn friends_with_ratings(&self, user_id: &str) -> AmityResult<Vec<FriendWithRatings>> {
        self.inner.friends_with_ratings(user_id)
    }
    fn add_rating(&self, rating: &RatingRecord) -> AmityResult<()> {
        self.inner.add_rating(rating)
    }
    fn ratings_for_friend(&self, user_id: &str, friend_id: &str) -> AmityResult<Vec<RatingRecord>> {
        self.inner.ratings_for_friend(user_id, friend_id)
    }
    fn add_evaluation_session(&self, session: &EvaluationSessionRecord) -> AmityResult<String> {
        self.inner.add_evaluation_session(session)
    }
    fn save_final_ranking(&self, _record: &RankingRecord) -> AmityResult<String> {
        Err(StorageError::Backend {
            reason: "backend unavailable".to_string(),
        }
        .into())
    }
    fn ranking_history(&self, user_id: &str) -> AmityResult<Vec<RankingRecord>> {
        self.inner.ranking_history(user_id)
    }
}

#[test]
fn failed_save_surfaces_but_ranking_stays_readable() {
    init_tracing();
    let catalog = TraitCatalog::default();
    let store = OfflineRankingStore {
        inner: MemoryStore::new(),
    };
    let mut engine = QuestionnaireEngine::new(&catalog, &store, "user-1");
    engine.add_friend("Ana", None).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    engine.start(&mut rng).unwrap();

    let error = loop {
        match engine.rate(Score::new(4).unwrap(), &mut rng) {
            Ok(StepOutcome::Prompt(_)) => continue,
            Ok(StepOutcome::Finished) => panic!("save should have failed"),
            Err(e) => break e,
        }
    };
    assert!(matches!(
        error,
        AmityError::Storage(StorageError::Backend { .. })
    ));

    // The computed ranking survives the failed save.
    let rankings = engine.final_rankings().unwrap();
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].average_score, "4.00");
}

#[test]
fn rate_without_active_prompt_is_an_error() {
    let catalog = TraitCatalog::default();
    let store = MemoryStore::new();
    let mut engine = QuestionnaireEngine::new(&catalog, &store, "user-1");
    engine.add_friend("Ana", None).unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    assert!(engine.rate(Score::new(3).unwrap(), &mut rng).is_err());
}

#[test]
fn start_requires_friends() {
    let catalog = TraitCatalog::default();
    let store = MemoryStore::new();
    let mut engine = QuestionnaireEngine::new(&catalog, &store, "user-1");
    let mut rng = StdRng::seed_from_u64(5);
    assert!(engine.start(&mut rng).is_err());
}

#[test]
fn versus_duel_counts_victories_and_crowns_a_winner() {
    init_tracing();
    let catalog = TraitCatalog::default();
    let store = MemoryStore::new();
    let config = AmityConfig::default();
    let mut duel = VersusDuel::new(&catalog, &store, "user-1", &config);

    let ana = duel.enroll("Ana", None).unwrap();
    let bea = duel.enroll("Bea", None).unwrap();
    assert!(duel.enroll("Caro", None).is_err());

    let first = duel.start().unwrap();
    assert!(!first.prompt.is_empty());

    // Ana wins every prompt: 3 per trait across 5 traits.
    let mut picks = 0;
    loop {
        picks += 1;
        match duel.pick_winner(&ana).unwrap() {
            DuelStep::Prompt(_) => continue,
            DuelStep::Finished => break,
        }
    }
    assert_eq!(picks, 15);

    let summary = duel.summary().unwrap();
    assert_eq!(summary.overall_winner.as_deref(), Some(ana.as_str()));
    assert_eq!(summary.totals[&ana], 15);
    assert_eq!(summary.totals[&bea], 0);
    assert_eq!(summary.per_trait.len(), 5);

    // One victory-count record per friend per trait.
    assert_eq!(store.ratings_for_friend("user-1", &ana).unwrap().len(), 5);
    assert_eq!(store.ratings_for_friend("user-1", &bea).unwrap().len(), 5);
}

#[test]
fn versus_enroll_reuses_known_friends() {
    let catalog = TraitCatalog::default();
    let store = MemoryStore::new();
    let existing = Friend::new("Ana").unwrap();
    store.add_friend("user-1", &existing).unwrap();

    let config = AmityConfig::default();
    let mut duel = VersusDuel::new(&catalog, &store, "user-1", &config);
    let id = duel.enroll("  ana ", None).unwrap();
    assert_eq!(id, existing.id);
    // No second copy was persisted.
    assert_eq!(store.friends("user-1").unwrap().len(), 1);
}

#[test]
fn themed_round_advances_only_when_all_friends_rated() {
    init_tracing();
    let catalog = TraitCatalog::default();
    let loyalty = catalog.get("loyalty").unwrap();
    let store = MemoryStore::new();
    let mut eval = ThemedEvaluation::new(loyalty, &store, "user-1");

    let ana = eval.add_friend("Ana", None).unwrap();
    let bea = eval.add_friend("Bea", None).unwrap();

    let first = eval.start().unwrap();
    assert!(!first.contains("{friend}"));

    let total = eval.total_questions();
    assert_eq!(total, 3);
    for question in 0..total {
        let step = eval.rate_friend(&ana, Score::new(5).unwrap()).unwrap();
        assert_eq!(step, ThemedStep::AwaitingRatings);

        let bea_score = if question + 1 == total { 2 } else { 4 };
        let step = eval
            .rate_friend(&bea, Score::new(bea_score).unwrap())
            .unwrap();
        if question + 1 < total {
            assert!(matches!(step, ThemedStep::NextQuestion(_)));
        } else {
            assert_eq!(step, ThemedStep::Finished);
        }
    }

    let standings = eval.standings().unwrap();
    assert_eq!(standings[0].friend, "Ana");
    assert_eq!(standings[0].score, 5);
    // Bea's final score is the last one recorded.
    assert_eq!(standings[1].score, 2);
}
