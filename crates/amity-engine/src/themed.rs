//! Themed-mode driver: one trait, every friend rated on each question,
//! question rounds advancing only once all friends are rated.

use std::collections::HashSet;

use amity_core::catalog::PersonalityTrait;
use amity_core::errors::SessionError;
use amity_core::models::{
    EvaluationMode, EvaluationSessionRecord, Friend, RatingRecord, Score,
};
use amity_core::traits::IQuizStore;
use amity_core::AmityResult;
use amity_ranking::{themed_standings, ThemedStanding};
use amity_selection::prompt;
use amity_session::EvaluationSession;

/// What the caller should show after rating one friend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemedStep {
    /// Same question, other friends still unrated this round.
    AwaitingRatings,
    /// All friends rated; the next question's rendered prompt.
    NextQuestion(String),
    /// Last question done; standings are available on the driver.
    Finished,
}

/// Drives one themed evaluation of a single trait.
///
/// Each question round collects a 1-5 score for every friend; a friend
/// re-rated within a round keeps the later score, and the trait's final
/// score per friend is the last one recorded.
pub struct ThemedEvaluation<'a, S: IQuizStore> {
    personality: &'a PersonalityTrait,
    store: &'a S,
    session: EvaluationSession,
    question_index: Option<usize>,
    rated_this_round: HashSet<String>,
    standings: Option<Vec<ThemedStanding>>,
}

impl<'a, S: IQuizStore> ThemedEvaluation<'a, S> {
    pub fn new(personality: &'a PersonalityTrait, store: &'a S, user_id: &str) -> Self {
        Self {
            personality,
            store,
            session: EvaluationSession::new(user_id, EvaluationMode::Themed),
            question_index: None,
            rated_this_round: HashSet::new(),
            standings: None,
        }
    }

    pub fn add_friend(&mut self, name: &str, avatar: Option<&str>) -> AmityResult<String> {
        let friend = match avatar {
            Some(avatar) => Friend::with_avatar(name, avatar)?,
            None => Friend::new(name)?,
        };
        let id = friend.id.clone();
        self.session.add_friend(friend)?;
        Ok(id)
    }

    /// Number of questions in this trait's themed list.
    pub fn total_questions(&self) -> usize {
        self.personality.questions.themed.len()
    }

    /// Begin the evaluation and return the first question's prompt.
    pub fn start(&mut self) -> AmityResult<String> {
        if self.session.roster.is_empty() {
            return Err(SessionError::EmptyRoster.into());
        }
        self.session.restart();
        self.standings = None;
        self.question_index = Some(0);
        self.rated_this_round.clear();

        let marker = EvaluationSessionRecord::new(
            &self.session.user_id,
            EvaluationMode::Themed,
            self.session.roster.iter().map(|f| f.id.clone()).collect(),
        );
        self.store.add_evaluation_session(&marker)?;
        tracing::info!(
            "engine: themed evaluation of {} started",
            self.personality.id
        );

        self.current_prompt().ok_or_else(|| {
            SessionError::NotFinished.into()
        })
    }

    /// The rendered prompt for the active question.
    pub fn current_prompt(&self) -> Option<String> {
        let index = self.question_index?;
        self.personality
            .questions
            .themed
            .get(index)
            .map(|t| prompt::render(t, None))
    }

    /// Rate one friend on the active question. The round advances once
    /// every friend has a rating for it.
    pub fn rate_friend(&mut self, friend_id: &str, score: Score) -> AmityResult<ThemedStep> {
        let index = self.question_index.ok_or(SessionError::NoActivePrompt)?;
        if self.session.roster.get(friend_id).is_none() {
            return Err(SessionError::UnknownFriend {
                friend_id: friend_id.to_string(),
            }
            .into());
        }

        self.session
            .record_rating(&self.personality.id, friend_id, score.get());
        self.store.add_rating(&RatingRecord::new(
            &self.session.user_id,
            &self.personality.id,
            friend_id,
            score.get(),
            EvaluationMode::Themed,
        ))?;
        self.rated_this_round.insert(friend_id.to_string());

        if self.rated_this_round.len() < self.session.roster.len() {
            return Ok(ThemedStep::AwaitingRatings);
        }

        // Round complete.
        self.rated_this_round.clear();
        if index + 1 < self.total_questions() {
            self.question_index = Some(index + 1);
            let next = self.current_prompt().ok_or(SessionError::NoActivePrompt)?;
            Ok(ThemedStep::NextQuestion(next))
        } else {
            self.question_index = None;
            self.standings = Some(themed_standings(
                &self.session.roster,
                &self.personality.id,
                &self.session.ratings,
            ));
            tracing::info!("engine: themed evaluation finished");
            Ok(ThemedStep::Finished)
        }
    }

    /// Final standings, once the last question round completed.
    pub fn standings(&self) -> Option<&[ThemedStanding]> {
        self.standings.as_deref()
    }
}
