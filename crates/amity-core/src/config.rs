//! Runtime configuration with serde defaults.

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

mod defaults {
    use crate::constants;

    pub const DEFAULT_VERSUS_PROMPTS_PER_TRAIT: usize = constants::VERSUS_PROMPTS_PER_TRAIT;
    pub const DEFAULT_STRENGTH_THRESHOLD: f64 = constants::STRENGTH_THRESHOLD;
    pub const DEFAULT_SUGGESTION_LIMIT: usize = constants::ACTIVITY_SUGGESTION_LIMIT;
}

/// Engine configuration. Every field falls back to its default when
/// absent from the loaded TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmityConfig {
    /// Head-to-head prompts asked per trait in versus mode.
    pub versus_prompts_per_trait: usize,
    /// Trait average strictly above this counts as a strength.
    pub strength_threshold: f64,
    /// Improvement activities suggested per analysis.
    pub suggestion_limit: usize,
}

impl Default for AmityConfig {
    fn default() -> Self {
        Self {
            versus_prompts_per_trait: defaults::DEFAULT_VERSUS_PROMPTS_PER_TRAIT,
            strength_threshold: defaults::DEFAULT_STRENGTH_THRESHOLD,
            suggestion_limit: defaults::DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl AmityConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        toml::from_str(text).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })
    }
}
