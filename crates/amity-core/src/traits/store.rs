use crate::errors::AmityResult;
use crate::models::{
    EvaluationSessionRecord, Friend, FriendWithRatings, RankingRecord, RatingRecord,
};

/// Persistence collaborator: friends + ratings + sessions + final rankings,
/// all scoped per user. Failures surface to the caller and are not retried.
pub trait IQuizStore: Send + Sync {
    // --- Friends ---
    /// Persist a friend and return its stored id.
    fn add_friend(&self, user_id: &str, friend: &Friend) -> AmityResult<String>;
    /// Case-insensitive lookup by display name.
    fn friend_by_name(&self, user_id: &str, name: &str) -> AmityResult<Option<Friend>>;
    fn friends(&self, user_id: &str) -> AmityResult<Vec<Friend>>;
    /// Friends joined with their full rating history.
    fn friends_with_ratings(&self, user_id: &str) -> AmityResult<Vec<FriendWithRatings>>;

    // --- Ratings ---
    fn add_rating(&self, rating: &RatingRecord) -> AmityResult<()>;
    fn ratings_for_friend(&self, user_id: &str, friend_id: &str) -> AmityResult<Vec<RatingRecord>>;

    // --- Sessions ---
    /// Record the start of an evaluation run; returns the session record id.
    fn add_evaluation_session(&self, session: &EvaluationSessionRecord) -> AmityResult<String>;

    // --- Rankings ---
    /// Persist a computed final ranking; returns the record id.
    fn save_final_ranking(&self, record: &RankingRecord) -> AmityResult<String>;
    /// Past rankings for a user, newest first.
    fn ranking_history(&self, user_id: &str) -> AmityResult<Vec<RankingRecord>>;
}
