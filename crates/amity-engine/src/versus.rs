//! Versus-mode driver: two friends, a fixed number of head-to-head
//! prompts per trait, victory counts written back as ratings.

use std::collections::HashMap;

use amity_core::catalog::TraitCatalog;
use amity_core::constants::VERSUS_ROSTER_SIZE;
use amity_core::errors::SessionError;
use amity_core::models::{
    EvaluationMode, EvaluationSessionRecord, Friend, RatingRecord,
};
use amity_core::traits::IQuizStore;
use amity_core::{AmityConfig, AmityResult};
use amity_ranking::{summarize_duel, VersusSummary};
use amity_selection::prompt;
use amity_session::EvaluationSession;

/// A head-to-head prompt. Friend-agnostic: the question asks the user to
/// pick whichever of the two friends fits best.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelPrompt {
    pub trait_id: String,
    pub question_index: usize,
    pub prompt: String,
}

/// What the caller should show after a winner is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelStep {
    /// The next prompt, same trait or the next one.
    Prompt(DuelPrompt),
    /// Every trait dueled; the summary is available on the driver.
    Finished,
}

/// Drives one versus duel between exactly two friends.
///
/// Versus questions are walked in catalog order, the first
/// `versus_prompts_per_trait` per trait; each pick awards the winner one
/// victory. When a trait's prompts run out, both friends' victory counts
/// are recorded as that trait's ratings and persisted, and the duel moves
/// to the next trait.
pub struct VersusDuel<'a, S: IQuizStore> {
    catalog: &'a TraitCatalog,
    store: &'a S,
    prompts_per_trait: usize,
    session: EvaluationSession,
    trait_index: Option<usize>,
    prompt_index: usize,
    round_victories: HashMap<String, u8>,
    summary: Option<VersusSummary>,
}

impl<'a, S: IQuizStore> VersusDuel<'a, S> {
    pub fn new(catalog: &'a TraitCatalog, store: &'a S, user_id: &str, config: &AmityConfig) -> Self {
        Self {
            catalog,
            store,
            prompts_per_trait: config.versus_prompts_per_trait,
            session: EvaluationSession::new(user_id, EvaluationMode::Versus),
            trait_index: None,
            prompt_index: 0,
            round_victories: HashMap::new(),
            summary: None,
        }
    }

    /// Enroll a contender, reusing the stored friend when the user has
    /// rated someone by that name before. At most two friends.
    pub fn enroll(&mut self, name: &str, avatar: Option<&str>) -> AmityResult<String> {
        if self.session.roster.len() >= VERSUS_ROSTER_SIZE {
            return Err(SessionError::RosterFull {
                capacity: VERSUS_ROSTER_SIZE,
            }
            .into());
        }
        if self.session.roster.contains_name(name) {
            return Err(SessionError::DuplicateFriend {
                name: name.trim().to_string(),
            }
            .into());
        }

        let friend = match self.store.friend_by_name(&self.session.user_id, name)? {
            Some(existing) => existing,
            None => {
                let friend = match avatar {
                    Some(avatar) => Friend::with_avatar(name, avatar)?,
                    None => Friend::new(name)?,
                };
                self.store.add_friend(&self.session.user_id, &friend)?;
                friend
            }
        };
        let id = friend.id.clone();
        self.session.add_friend(friend)?;
        Ok(id)
    }

    /// Begin the duel and return the first prompt.
    pub fn start(&mut self) -> AmityResult<DuelPrompt> {
        if self.session.roster.len() != VERSUS_ROSTER_SIZE {
            return Err(SessionError::WrongRosterSize {
                required: VERSUS_ROSTER_SIZE,
                actual: self.session.roster.len(),
            }
            .into());
        }
        self.session.restart();
        self.summary = None;
        self.trait_index = Some(0);
        self.prompt_index = 0;
        self.round_victories.clear();

        let marker = EvaluationSessionRecord::new(
            &self.session.user_id,
            EvaluationMode::Versus,
            self.session.roster.iter().map(|f| f.id.clone()).collect(),
        );
        self.store.add_evaluation_session(&marker)?;
        tracing::info!("engine: versus duel started");

        self.current_prompt()
            .ok_or_else(|| SessionError::NotFinished.into())
    }

    /// Award the current prompt to one of the two friends.
    pub fn pick_winner(&mut self, friend_id: &str) -> AmityResult<DuelStep> {
        let trait_index = self.trait_index.ok_or(SessionError::NoActivePrompt)?;
        if self.session.roster.get(friend_id).is_none() {
            return Err(SessionError::UnknownFriend {
                friend_id: friend_id.to_string(),
            }
            .into());
        }
        *self.round_victories.entry(friend_id.to_string()).or_insert(0) += 1;

        self.prompt_index += 1;
        if self.prompt_index < self.trait_prompt_count(trait_index) {
            let next = self
                .current_prompt()
                .ok_or(SessionError::NoActivePrompt)?;
            return Ok(DuelStep::Prompt(next));
        }

        // Trait round over: record both victory counts as ratings.
        let trait_id = self.catalog.traits()[trait_index].id.clone();
        let friend_ids: Vec<String> = self.session.roster.iter().map(|f| f.id.clone()).collect();
        for id in &friend_ids {
            let victories = self.round_victories.get(id).copied().unwrap_or(0);
            self.session.record_rating(&trait_id, id, victories);
            self.store.add_rating(&RatingRecord::new(
                &self.session.user_id,
                &trait_id,
                id,
                victories,
                EvaluationMode::Versus,
            ))?;
        }
        self.round_victories.clear();
        self.prompt_index = 0;

        if trait_index + 1 < self.catalog.len() {
            self.trait_index = Some(trait_index + 1);
            let next = self
                .current_prompt()
                .ok_or(SessionError::NoActivePrompt)?;
            Ok(DuelStep::Prompt(next))
        } else {
            self.trait_index = None;
            self.summary = Some(summarize_duel(
                &self.session.roster,
                &self.session.ratings,
                self.prompts_per_trait,
            ));
            tracing::info!("engine: versus duel finished");
            Ok(DuelStep::Finished)
        }
    }

    /// The duel summary, once every trait has been played.
    pub fn summary(&self) -> Option<&VersusSummary> {
        self.summary.as_ref()
    }

    /// Prompts actually asked for a trait: the configured count, bounded
    /// by how many versus templates the trait has.
    fn trait_prompt_count(&self, trait_index: usize) -> usize {
        let templates = &self.catalog.traits()[trait_index].questions.versus;
        self.prompts_per_trait.min(templates.len())
    }

    fn current_prompt(&self) -> Option<DuelPrompt> {
        let trait_index = self.trait_index?;
        let personality = &self.catalog.traits()[trait_index];
        let template = personality.questions.versus.get(self.prompt_index)?;
        Some(DuelPrompt {
            trait_id: personality.id.clone(),
            question_index: self.prompt_index,
            prompt: prompt::render(template, None),
        })
    }
}
