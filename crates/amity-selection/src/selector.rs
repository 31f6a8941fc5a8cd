//! Next-Rateable-Selector.

use rand::Rng;

use amity_core::catalog::PersonalityTrait;
use amity_core::models::EvaluationMode;
use amity_session::{CurrentPrompt, EvaluationSession};

use crate::prompt;

/// Pick the next friend to rate for a trait, together with a question
/// prompt, and record both into the session.
///
/// Returns `None` when every friend already has a rating for the trait
/// (the normal terminal signal telling the caller to advance) or when the
/// trait carries no templates for the session's mode. Friend and question
/// are chosen uniformly through the injected RNG; question templates do
/// not repeat until every index for the trait has been shown, after which
/// the used-set resets.
pub fn select_next<R: Rng>(
    session: &mut EvaluationSession,
    personality: &PersonalityTrait,
    rng: &mut R,
) -> Option<CurrentPrompt> {
    let unrated: Vec<(String, String)> = session
        .roster
        .iter()
        .filter(|f| !session.ratings.is_rated(&personality.id, &f.id))
        .map(|f| (f.id.clone(), f.name.clone()))
        .collect();
    if unrated.is_empty() {
        return None;
    }
    let (friend_id, friend_name) = unrated[rng.gen_range(0..unrated.len())].clone();

    let templates = personality.questions.for_mode(session.mode);
    if templates.is_empty() {
        return None;
    }

    let mut available: Vec<usize> = (0..templates.len())
        .filter(|i| !session.is_question_used(&personality.id, *i))
        .collect();
    if available.is_empty() {
        // Every template has been shown: reset and cycle again.
        session.reset_used_questions(&personality.id);
        available = (0..templates.len()).collect();
    }
    let question_index = available[rng.gen_range(0..available.len())];
    session.mark_question_used(&personality.id, question_index);

    let substitute = match session.mode {
        EvaluationMode::Standard => Some(friend_name.as_str()),
        EvaluationMode::Versus | EvaluationMode::Themed => None,
    };
    let current = CurrentPrompt {
        friend_id,
        trait_id: personality.id.clone(),
        question_index,
        prompt: prompt::render(&templates[question_index], substitute),
    };
    session.current = Some(current.clone());
    Some(current)
}
