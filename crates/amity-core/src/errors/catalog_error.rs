/// Trait-catalog and configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {reason}")]
    Parse { reason: String },

    #[error("unknown trait: {trait_id}")]
    UnknownTrait { trait_id: String },

    #[error("trait {trait_id} has no {mode} questions")]
    NoQuestions { trait_id: String, mode: String },

    #[error("catalog contains no traits")]
    Empty,
}
