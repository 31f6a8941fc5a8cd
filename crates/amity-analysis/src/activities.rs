//! Improvement-activity catalog and relevance scoring.

use rand::Rng;
use serde::{Deserialize, Serialize};

use amity_core::errors::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Short,
    Medium,
    Long,
}

/// One suggested activity for strengthening a friendship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementActivity {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: Duration,
    pub category: String,
    /// What the activity improves.
    pub impact: Vec<String>,
    /// Concrete steps to run it.
    pub steps: Vec<String>,
    /// Trait display names the activity touches.
    pub traits: Vec<String>,
}

/// Activity content table. A compact built-in default ships with the
/// engine; richer localized tables load from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCatalog {
    activities: Vec<ImprovementActivity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<ImprovementActivity>) -> Self {
        Self { activities }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        toml::from_str(text).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })
    }

    pub fn activities(&self) -> &[ImprovementActivity] {
        &self.activities
    }

    /// Pick the activities most relevant to a friend's profile.
    ///
    /// Weakness matches weigh 3, strength matches 1 (build on what
    /// works), an activity touching both gets a 2-point bonus, and an
    /// injected-RNG jitter in `[0, 0.5)` varies suggestions between
    /// calls. Top `limit` by descending score.
    pub fn relevant<R: Rng>(
        &self,
        weaknesses: &[String],
        strengths: &[String],
        limit: usize,
        rng: &mut R,
    ) -> Vec<ImprovementActivity> {
        let mut scored: Vec<(f64, &ImprovementActivity)> = self
            .activities
            .iter()
            .map(|activity| {
                let weakness_matches = activity
                    .traits
                    .iter()
                    .filter(|t| weaknesses.contains(t))
                    .count();
                let strength_matches = activity
                    .traits
                    .iter()
                    .filter(|t| strengths.contains(t))
                    .count();
                let mut score = (weakness_matches * 3 + strength_matches) as f64;
                if weakness_matches > 0 && strength_matches > 0 {
                    score += 2.0;
                }
                score += rng.gen::<f64>() * 0.5;
                (score, activity)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, activity)| activity.clone())
            .collect()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        let strs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let activities = vec![
            ImprovementActivity {
                title: "Shared Gratitude Journal".to_string(),
                description: "Keep a joint journal of the friendship's best moments".to_string(),
                difficulty: Difficulty::Easy,
                duration: Duration::Short,
                category: "Emotional".to_string(),
                impact: strs(&[
                    "Builds mutual recognition",
                    "Creates lasting shared memories",
                ]),
                steps: strs(&[
                    "Pick a journal format, paper or digital",
                    "Write down one positive moment each week",
                    "Read the entries together once a month",
                ]),
                traits: strs(&["Emotional Support", "Complicity"]),
            },
            ImprovementActivity {
                title: "30-Day Conversation Challenge".to_string(),
                description: "One meaningful conversation every day for a month".to_string(),
                difficulty: Difficulty::Medium,
                duration: Duration::Long,
                category: "Communication".to_string(),
                impact: strs(&[
                    "Deepens mutual understanding",
                    "Strengthens trust",
                ]),
                steps: strs(&[
                    "Agree on a daily moment to talk",
                    "Prepare a few deep questions in advance",
                    "Review how the exchanges evolved at the end",
                ]),
                traits: strs(&["Confidentiality", "Complicity", "Emotional Support"]),
            },
            ImprovementActivity {
                title: "Joint Creative Project".to_string(),
                description: "Build something creative together".to_string(),
                difficulty: Difficulty::Medium,
                duration: Duration::Medium,
                category: "Creative".to_string(),
                impact: strs(&[
                    "Develops collaboration",
                    "Bonds through shared accomplishment",
                ]),
                steps: strs(&[
                    "Choose a project you are both excited about",
                    "Set a realistic schedule",
                    "Celebrate every finished step",
                ]),
                traits: strs(&["Fun & Adventure", "Complicity"]),
            },
            ImprovementActivity {
                title: "Shared Bucket List".to_string(),
                description: "Write and chase a list of shared goals".to_string(),
                difficulty: Difficulty::Hard,
                duration: Duration::Long,
                category: "Adventure".to_string(),
                impact: strs(&[
                    "Creates common goals",
                    "Generates memorable experiences",
                ]),
                steps: strs(&[
                    "List ten experiences you want to share",
                    "Plan one goal per month",
                    "Document what you pull off",
                ]),
                traits: strs(&["Fun & Adventure", "Loyalty"]),
            },
            ImprovementActivity {
                title: "Community Project".to_string(),
                description: "Commit together to a cause you both care about".to_string(),
                difficulty: Difficulty::Hard,
                duration: Duration::Long,
                category: "Social".to_string(),
                impact: strs(&[
                    "Reinforces shared values",
                    "Builds mutual pride",
                ]),
                steps: strs(&[
                    "Find a cause that moves you both",
                    "Volunteer together regularly",
                    "Celebrate the impact you make",
                ]),
                traits: strs(&["Loyalty", "Emotional Support"]),
            },
        ];
        Self { activities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weakness_matches_outrank_strength_matches() {
        let catalog = ActivityCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        let picks = catalog.relevant(
            &["Loyalty".to_string()],
            &[],
            2,
            &mut rng,
        );
        // Jitter is at most 0.5, so any loyalty-matching activity (3+)
        // outranks every non-matching one (< 0.5).
        assert_eq!(picks.len(), 2);
        assert!(picks
            .iter()
            .all(|a| a.traits.contains(&"Loyalty".to_string())));
    }

    #[test]
    fn combo_bonus_prefers_activities_touching_both() {
        let catalog = ActivityCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        let picks = catalog.relevant(
            &["Loyalty".to_string()],
            &["Emotional Support".to_string()],
            1,
            &mut rng,
        );
        // "Community Project" touches both: 3 + 1 + 2 beats plain 3.
        assert_eq!(picks[0].title, "Community Project");
    }

    #[test]
    fn limit_bounds_the_suggestions() {
        let catalog = ActivityCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.relevant(&[], &[], 3, &mut rng).len(), 3);
        assert_eq!(
            catalog.relevant(&[], &[], 100, &mut rng).len(),
            catalog.activities().len()
        );
    }
}
