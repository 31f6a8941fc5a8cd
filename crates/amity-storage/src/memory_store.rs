//! DashMap-backed store, collections keyed by user id.

use dashmap::DashMap;

use amity_core::errors::AmityResult;
use amity_core::models::{
    EvaluationSessionRecord, Friend, FriendWithRatings, RankingRecord, RatingRecord,
};
use amity_core::traits::IQuizStore;

/// In-memory store. Every collection is scoped per user; nothing crosses
/// user boundaries. Operations cannot fail here, but callers must treat
/// the trait as fallible since hosted backends do fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    friends: DashMap<String, Vec<Friend>>,
    ratings: DashMap<String, Vec<RatingRecord>>,
    sessions: DashMap<String, Vec<EvaluationSessionRecord>>,
    rankings: DashMap<String, Vec<RankingRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total persisted rankings across all users.
    pub fn ranking_count(&self) -> usize {
        self.rankings.iter().map(|r| r.value().len()).sum()
    }
}

impl IQuizStore for MemoryStore {
    fn add_friend(&self, user_id: &str, friend: &Friend) -> AmityResult<String> {
        self.friends
            .entry(user_id.to_string())
            .or_default()
            .push(friend.clone());
        tracing::debug!("storage: added friend {} for {user_id}", friend.id);
        Ok(friend.id.clone())
    }

    fn friend_by_name(&self, user_id: &str, name: &str) -> AmityResult<Option<Friend>> {
        let needle = name.trim().to_lowercase();
        Ok(self.friends.get(user_id).and_then(|list| {
            list.iter()
                .find(|f| f.name.to_lowercase() == needle)
                .cloned()
        }))
    }

    fn friends(&self, user_id: &str) -> AmityResult<Vec<Friend>> {
        Ok(self
            .friends
            .get(user_id)
            .map(|list| list.clone())
            .unwrap_or_default())
    }

    fn friends_with_ratings(&self, user_id: &str) -> AmityResult<Vec<FriendWithRatings>> {
        let ratings = self
            .ratings
            .get(user_id)
            .map(|list| list.clone())
            .unwrap_or_default();
        let joined = self
            .friends(user_id)?
            .into_iter()
            .map(|friend| {
                let history = ratings
                    .iter()
                    .filter(|r| r.friend_id == friend.id)
                    .cloned()
                    .collect();
                FriendWithRatings {
                    friend,
                    ratings: history,
                }
            })
            .collect();
        Ok(joined)
    }

    fn add_rating(&self, rating: &RatingRecord) -> AmityResult<()> {
        self.ratings
            .entry(rating.user_id.clone())
            .or_default()
            .push(rating.clone());
        Ok(())
    }

    fn ratings_for_friend(&self, user_id: &str, friend_id: &str) -> AmityResult<Vec<RatingRecord>> {
        Ok(self
            .ratings
            .get(user_id)
            .map(|list| {
                list.iter()
                    .filter(|r| r.friend_id == friend_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn add_evaluation_session(&self, session: &EvaluationSessionRecord) -> AmityResult<String> {
        self.sessions
            .entry(session.user_id.clone())
            .or_default()
            .push(session.clone());
        Ok(session.id.clone())
    }

    fn save_final_ranking(&self, record: &RankingRecord) -> AmityResult<String> {
        self.rankings
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        tracing::info!(
            "storage: saved ranking {} ({} friends) for {}",
            record.id,
            record.friend_count,
            record.user_id
        );
        Ok(record.id.clone())
    }

    fn ranking_history(&self, user_id: &str) -> AmityResult<Vec<RankingRecord>> {
        let mut history = self
            .rankings
            .get(user_id)
            .map(|list| list.clone())
            .unwrap_or_default();
        // Newest first, matching the history view.
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }
}
