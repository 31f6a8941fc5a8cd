//! Relationship-improvement recommendations keyed by trait name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use amity_core::errors::CatalogError;

/// One recommendation with concrete examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: String,
    pub examples: Vec<String>,
}

/// Recommendation content table, keyed by trait display name.
/// Deployments load their localized table from TOML; a compact built-in
/// default covers the five standard traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCatalog {
    entries: BTreeMap<String, Vec<Recommendation>>,
}

impl RecommendationCatalog {
    pub fn new(entries: BTreeMap<String, Vec<Recommendation>>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        toml::from_str(text).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })
    }

    pub fn for_trait(&self, trait_name: &str) -> &[Recommendation] {
        self.entries
            .get(trait_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recommendations for a set of weaknesses, in the given order.
    ///
    /// With no weaknesses, falls back to a single "keep it up"
    /// recommendation; recent improvement appends an encouragement.
    pub fn generate(&self, weaknesses: &[String], improved: &[String]) -> Vec<Recommendation> {
        let mut out: Vec<Recommendation> = weaknesses
            .iter()
            .flat_map(|w| self.for_trait(w).to_vec())
            .collect();

        if weaknesses.is_empty() {
            out = vec![Recommendation {
                recommendation: "Keep strengthening an already excellent relationship!".to_string(),
                examples: vec![
                    "Maintain the habits that already work".to_string(),
                    "Keep communicating openly".to_string(),
                    "Spend quality time together".to_string(),
                ],
            }];
        }

        if !improved.is_empty() {
            out.push(Recommendation {
                recommendation: "Keep the momentum going, the progress shows!".to_string(),
                examples: vec![
                    "Keep doing what works and build on your strengths.".to_string()
                ],
            });
        }

        out
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        let rec = |recommendation: &str, examples: &[&str]| Recommendation {
            recommendation: recommendation.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        };
        let mut entries = BTreeMap::new();
        entries.insert(
            "Emotional Support".to_string(),
            vec![
                rec(
                    "Share more emotionally meaningful moments together.",
                    &[
                        "Set aside time to talk through a hard day.",
                        "Swap childhood memories over an evening together.",
                    ],
                ),
                rec(
                    "Practice active listening and visible empathy.",
                    &[
                        "Let your friend finish before responding, then ask questions.",
                        "Reflect back what you heard in your own words.",
                    ],
                ),
            ],
        );
        entries.insert(
            "Fun & Adventure".to_string(),
            vec![
                rec(
                    "Plan newer, more exciting activities together.",
                    &[
                        "Try a sport or outdoor activity neither of you knows.",
                        "Plan a surprise weekend in a town you have never visited.",
                    ],
                ),
                rec(
                    "Leave room for spontaneous outings.",
                    &[
                        "Turn a free afternoon into an improvised picnic or hike.",
                        "Surprise your friend with tickets to a show.",
                    ],
                ),
            ],
        );
        entries.insert(
            "Confidentiality".to_string(),
            vec![
                rec(
                    "Show that confidences are safe with you.",
                    &[
                        "Never pass on personal details without consent.",
                        "Change the subject when others press for private matters.",
                    ],
                ),
            ],
        );
        entries.insert(
            "Complicity".to_string(),
            vec![
                rec(
                    "Spend more time on shared interests.",
                    &[
                        "Host a game night or a film marathon.",
                        "Trade books or articles about things you both love.",
                    ],
                ),
                rec(
                    "Stay attentive to what your friend needs.",
                    &[
                        "Surprise them with small gestures that show you were thinking of them.",
                        "Ask how they are doing and what they need right now.",
                    ],
                ),
            ],
        );
        entries.insert(
            "Loyalty".to_string(),
            vec![
                rec(
                    "Show support even when it costs something.",
                    &[
                        "Be present in their difficult moments.",
                        "Offer help without expecting anything back.",
                    ],
                ),
                rec(
                    "Defend your friend in their absence.",
                    &[
                        "Do not let others talk them down around you.",
                        "Keep the promises you make.",
                    ],
                ),
            ],
        );
        Self { entries }
    }
}
