//! Personality-trait catalog: static, immutable, loaded from configuration.

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::models::EvaluationMode;

/// Question templates for one trait, one list per game mode.
/// Templates reference the rated friend with the `{friend}` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub standard: Vec<String>,
    pub versus: Vec<String>,
    pub themed: Vec<String>,
}

impl QuestionSet {
    pub fn for_mode(&self, mode: EvaluationMode) -> &[String] {
        match mode {
            EvaluationMode::Standard => &self.standard,
            EvaluationMode::Versus => &self.versus,
            EvaluationMode::Themed => &self.themed,
        }
    }
}

/// A named personality dimension being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: QuestionSet,
}

/// The immutable trait catalog. Not user-editable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct TraitCatalog {
    traits: Vec<PersonalityTrait>,
}

/// On-disk TOML shape: a list of `[[traits]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    traits: Vec<PersonalityTrait>,
}

impl TryFrom<CatalogFile> for TraitCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        TraitCatalog::new(file.traits)
    }
}

impl From<TraitCatalog> for CatalogFile {
    fn from(catalog: TraitCatalog) -> Self {
        CatalogFile {
            traits: catalog.traits,
        }
    }
}

impl TraitCatalog {
    /// Build a catalog, validating that it is non-empty and that every
    /// trait has questions for every game mode.
    pub fn new(traits: Vec<PersonalityTrait>) -> Result<Self, CatalogError> {
        if traits.is_empty() {
            return Err(CatalogError::Empty);
        }
        for t in &traits {
            for mode in [
                EvaluationMode::Standard,
                EvaluationMode::Versus,
                EvaluationMode::Themed,
            ] {
                if t.questions.for_mode(mode).is_empty() {
                    return Err(CatalogError::NoQuestions {
                        trait_id: t.id.clone(),
                        mode: mode.to_string(),
                    });
                }
            }
        }
        Ok(Self { traits })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })?;
        Self::new(file.traits)
    }

    pub fn get(&self, trait_id: &str) -> Option<&PersonalityTrait> {
        self.traits.iter().find(|t| t.id == trait_id)
    }

    /// Lookup by display name, used by the analysis content tables.
    pub fn by_name(&self, name: &str) -> Option<&PersonalityTrait> {
        self.traits.iter().find(|t| t.name == name)
    }

    /// Traits in catalog (questionnaire) order.
    pub fn traits(&self) -> &[PersonalityTrait] {
        &self.traits
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

impl Default for TraitCatalog {
    /// The built-in five-trait catalog with a compact question set.
    /// Deployments with fuller localized content load their own TOML.
    fn default() -> Self {
        let t = |id: &str, name: &str, description: &str, qs: QuestionSet| PersonalityTrait {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            questions: qs,
        };
        let qs = |standard: &[&str], versus: &[&str], themed: &[&str]| QuestionSet {
            standard: standard.iter().map(|s| s.to_string()).collect(),
            versus: versus.iter().map(|s| s.to_string()).collect(),
            themed: themed.iter().map(|s| s.to_string()).collect(),
        };
        let traits = vec![
            t(
                "emotional-support",
                "Emotional Support",
                "Being present and comforting through hard times",
                qs(
                    &[
                        "How much does {friend} support you emotionally?",
                        "Is {friend} there for you when things get difficult?",
                        "How well does {friend} listen when you share your feelings?",
                        "How would you rate {friend}'s ability to comfort you?",
                    ],
                    &[
                        "Who would you call first after terrible news?",
                        "Who notices when something is wrong before you say it?",
                        "Who is better at cheering you up?",
                    ],
                    &[
                        "How supported do you feel by {friend} during a rough week?",
                        "How well does {friend} recognize your emotional needs?",
                        "How comfortable are you crying in front of {friend}?",
                    ],
                ),
            ),
            t(
                "fun-adventure",
                "Fun & Adventure",
                "Making time together exciting and memorable",
                qs(
                    &[
                        "How much fun and adventure does {friend} bring to your time together?",
                        "Does {friend} enjoy trying new things with you?",
                        "How spontaneous is {friend} about activity ideas?",
                        "How memorable does {friend} make ordinary moments?",
                    ],
                    &[
                        "Who would you pick for a last-minute road trip?",
                        "Who makes a boring afternoon fun?",
                        "Who pushes you further out of your comfort zone?",
                    ],
                    &[
                        "How exciting are outings with {friend}?",
                        "How often does {friend} suggest something new to try?",
                        "How relaxed and amused are you around {friend}?",
                    ],
                ),
            ),
            t(
                "confidentiality",
                "Confidentiality",
                "Keeping secrets and being worthy of trust",
                qs(
                    &[
                        "How trustworthy is {friend} with your secrets?",
                        "Does {friend} respect the privacy of what you share?",
                        "How comfortable are you sharing personal matters with {friend}?",
                        "How discreet is {friend} with sensitive information?",
                    ],
                    &[
                        "Who would you trust with your most embarrassing secret?",
                        "Who is less likely to gossip about you?",
                        "Who would keep a surprise hidden the longest?",
                    ],
                    &[
                        "How safe do your confidences feel with {friend}?",
                        "How well does {friend} respect your privacy boundaries?",
                        "How freely can you tell {friend} anything?",
                    ],
                ),
            ),
            t(
                "complicity",
                "Complicity",
                "Deep connection and mutual understanding",
                qs(
                    &[
                        "How strong is the connection between you and {friend}?",
                        "How well does {friend} understand you without words?",
                        "How many interests do you share with {friend}?",
                        "How well does {friend} anticipate what you need?",
                    ],
                    &[
                        "Who finishes your sentences more often?",
                        "Who gets your sense of humor better?",
                        "Who knows what you want before you ask?",
                    ],
                    &[
                        "How understood do you feel by {friend}?",
                        "How aligned are you and {friend} on what matters?",
                        "How naturally do conversations flow with {friend}?",
                    ],
                ),
            ),
            t(
                "loyalty",
                "Loyalty",
                "Faithfulness and commitment to the friendship",
                qs(
                    &[
                        "How loyal is {friend} to you?",
                        "Is {friend} there for you no matter the situation?",
                        "How well does {friend} keep promises made to you?",
                        "How strongly would {friend} defend you in your absence?",
                    ],
                    &[
                        "Who would stand by you when everyone else walks away?",
                        "Who would defend you in a room you are not in?",
                        "Who keeps their word more reliably?",
                    ],
                    &[
                        "How safe does the friendship with {friend} feel?",
                        "How consistent is {friend}'s behavior toward you?",
                        "How much does {friend} prioritize your friendship in a conflict?",
                    ],
                ),
            ),
        ];
        // The built-in catalog is well-formed; validation cannot fail here.
        Self { traits }
    }
}
