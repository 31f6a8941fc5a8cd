//! EvaluationSession: roster, ratings matrix, and used-question sets for
//! one evaluation run.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use amity_core::errors::SessionError;
use amity_core::models::{EvaluationMode, Friend, RatingsMatrix, Roster};

/// The prompt currently shown to the user: which friend is being rated
/// and which question template produced the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPrompt {
    pub friend_id: String,
    pub trait_id: String,
    pub question_index: usize,
    pub prompt: String,
}

/// All mutable state of one evaluation run. Discarded wholesale when the
/// user abandons the run; only final rankings are ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSession {
    /// Unique session identifier.
    pub session_id: String,
    /// Owning user.
    pub user_id: String,
    /// Which game produced this session.
    pub mode: EvaluationMode,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
    /// Friends under evaluation, insertion-ordered.
    pub roster: Roster,
    /// Scores recorded so far.
    pub ratings: RatingsMatrix,
    /// Per-trait set of consumed question-template indices.
    /// Reset on exhaustion; never persisted across sessions.
    used_questions: HashMap<String, HashSet<usize>>,
    /// Questions answered so far, for progress display.
    pub questions_answered: usize,
    /// Prompt currently presented, if any.
    pub current: Option<CurrentPrompt>,
}

impl EvaluationSession {
    /// Create a fresh session for a user and mode.
    pub fn new(user_id: &str, mode: EvaluationMode) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            mode,
            created_at: now,
            last_activity: now,
            roster: Roster::new(),
            ratings: RatingsMatrix::new(),
            used_questions: HashMap::new(),
            questions_answered: 0,
            current: None,
        }
    }

    /// Add a friend to the roster before the run starts.
    pub fn add_friend(&mut self, friend: Friend) -> Result<(), SessionError> {
        self.roster.add(friend)?;
        self.touch();
        Ok(())
    }

    /// Record a score for a (trait, friend) pair and bump progress.
    pub fn record_rating(&mut self, trait_id: &str, friend_id: &str, score: u8) {
        self.ratings.record(trait_id, friend_id, score);
        self.questions_answered += 1;
        self.touch();
    }

    /// Question indices already consumed for a trait.
    pub fn used_questions(&self, trait_id: &str) -> Option<&HashSet<usize>> {
        self.used_questions.get(trait_id)
    }

    /// Whether a question template has been shown for a trait.
    pub fn is_question_used(&self, trait_id: &str, index: usize) -> bool {
        self.used_questions
            .get(trait_id)
            .is_some_and(|set| set.contains(&index))
    }

    /// Mark a question template as shown for a trait.
    pub fn mark_question_used(&mut self, trait_id: &str, index: usize) {
        self.used_questions
            .entry(trait_id.to_string())
            .or_default()
            .insert(index);
        self.touch();
    }

    /// Clear a trait's used-question set once every template has been shown.
    pub fn reset_used_questions(&mut self, trait_id: &str) {
        if let Some(set) = self.used_questions.get_mut(trait_id) {
            set.clear();
        }
    }

    /// Restart the run keeping the same roster: ratings, used-question
    /// sets, and progress are dropped.
    pub fn restart(&mut self) {
        self.ratings.clear();
        self.used_questions.clear();
        self.questions_answered = 0;
        self.current = None;
        self.touch();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}
