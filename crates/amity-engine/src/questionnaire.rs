//! Standard-mode driver: every friend rated on every trait, one random
//! (friend, question) prompt at a time.

use rand::Rng;

use amity_core::catalog::{PersonalityTrait, TraitCatalog};
use amity_core::errors::SessionError;
use amity_core::models::{
    EvaluationMode, EvaluationSessionRecord, Friend, RankingEntry, RankingRecord, RatingRecord,
    Score,
};
use amity_core::traits::IQuizStore;
use amity_core::AmityResult;
use amity_ranking::aggregate;
use amity_selection::select_next;
use amity_session::{CurrentPrompt, EvaluationSession, Progress};

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Friends can still be added or removed.
    CollectingFriends,
    /// Prompts are being answered.
    Rating,
    /// The final ranking has been computed.
    Finished,
}

/// What the caller should show after answering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Another prompt, possibly for the next trait.
    Prompt(CurrentPrompt),
    /// All traits rated; the final ranking is available on the engine.
    Finished,
}

/// Drives one standard evaluation run.
///
/// Control flow: select within the current trait until the selector
/// signals exhaustion, advance to the next trait, and after the last
/// trait aggregate, retain the ranking for display, then persist it.
/// A failed save surfaces its error while the ranking stays readable.
pub struct QuestionnaireEngine<'a, S: IQuizStore> {
    catalog: &'a TraitCatalog,
    store: &'a S,
    session: EvaluationSession,
    current_trait_index: Option<usize>,
    final_rankings: Option<Vec<RankingEntry>>,
}

impl<'a, S: IQuizStore> QuestionnaireEngine<'a, S> {
    pub fn new(catalog: &'a TraitCatalog, store: &'a S, user_id: &str) -> Self {
        Self {
            catalog,
            store,
            session: EvaluationSession::new(user_id, EvaluationMode::Standard),
            current_trait_index: None,
            final_rankings: None,
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.final_rankings.is_some() {
            RunStatus::Finished
        } else if self.current_trait_index.is_some() {
            RunStatus::Rating
        } else {
            RunStatus::CollectingFriends
        }
    }

    /// Add a friend before the run starts. Names are deduplicated
    /// case-insensitively; returns the new friend's id.
    pub fn add_friend(&mut self, name: &str, avatar: Option<&str>) -> AmityResult<String> {
        let friend = match avatar {
            Some(avatar) => Friend::with_avatar(name, avatar)?,
            None => Friend::new(name)?,
        };
        let id = friend.id.clone();
        self.session.add_friend(friend)?;
        Ok(id)
    }

    pub fn remove_friend(&mut self, friend_id: &str) -> Option<Friend> {
        self.session.roster.remove(friend_id)
    }

    pub fn roster_len(&self) -> usize {
        self.session.roster.len()
    }

    /// Begin the run: reset per-run state, record a session marker, and
    /// return the first prompt.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> AmityResult<CurrentPrompt> {
        if self.session.roster.is_empty() {
            return Err(SessionError::EmptyRoster.into());
        }
        self.session.restart();
        self.final_rankings = None;
        self.current_trait_index = Some(0);

        let marker = EvaluationSessionRecord::new(
            &self.session.user_id,
            EvaluationMode::Standard,
            self.session.roster.iter().map(|f| f.id.clone()).collect(),
        );
        self.store.add_evaluation_session(&marker)?;
        tracing::info!(
            "engine: standard run started with {} friends",
            self.session.roster.len()
        );

        match self.advance(rng)? {
            Some(prompt) => Ok(prompt),
            // Unreachable with a non-empty roster and a fresh matrix.
            None => Err(SessionError::EmptyRoster.into()),
        }
    }

    /// Answer the active prompt, persist the rating, and move on.
    pub fn rate<R: Rng>(&mut self, score: Score, rng: &mut R) -> AmityResult<StepOutcome> {
        let current = self
            .session
            .current
            .take()
            .ok_or(SessionError::NoActivePrompt)?;
        self.session
            .record_rating(&current.trait_id, &current.friend_id, score.get());
        self.store.add_rating(&RatingRecord::new(
            &self.session.user_id,
            &current.trait_id,
            &current.friend_id,
            score.get(),
            EvaluationMode::Standard,
        ))?;

        match self.advance(rng)? {
            Some(prompt) => Ok(StepOutcome::Prompt(prompt)),
            None => Ok(StepOutcome::Finished),
        }
    }

    /// The computed ranking, available once the run has finished, even
    /// when persisting it failed.
    pub fn final_rankings(&self) -> Option<&[RankingEntry]> {
        self.final_rankings.as_deref()
    }

    pub fn progress(&self) -> Progress {
        Progress::of_session(&self.session, self.catalog.len())
    }

    /// The trait currently being rated.
    pub fn current_trait(&self) -> Option<&'a PersonalityTrait> {
        self.current_trait_index.map(|i| &self.catalog.traits()[i])
    }

    /// Drop ratings and rankings, keep the roster, ready for a new run.
    pub fn restart_with_same_friends(&mut self) {
        self.session.restart();
        self.current_trait_index = None;
        self.final_rankings = None;
    }

    fn advance<R: Rng>(&mut self, rng: &mut R) -> AmityResult<Option<CurrentPrompt>> {
        while let Some(index) = self.current_trait_index {
            let personality = &self.catalog.traits()[index];
            if let Some(prompt) = select_next(&mut self.session, personality, rng) {
                return Ok(Some(prompt));
            }
            if index + 1 < self.catalog.len() {
                self.current_trait_index = Some(index + 1);
            } else {
                self.current_trait_index = None;
                self.finish()?;
            }
        }
        Ok(None)
    }

    fn finish(&mut self) -> AmityResult<()> {
        let entries = aggregate(self.catalog, &self.session.roster, &self.session.ratings);
        // Retain for display before attempting the save.
        self.final_rankings = Some(entries.clone());

        let record = RankingRecord::new(&self.session.user_id, entries);
        match self.store.save_final_ranking(&record) {
            Ok(id) => {
                tracing::info!("engine: run finished, ranking {id} saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("engine: ranking computed but save failed: {e}");
                Err(e)
            }
        }
    }
}
