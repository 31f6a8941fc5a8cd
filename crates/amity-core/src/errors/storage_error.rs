/// Store collaborator errors. Failures are surfaced, never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    #[error("backend unavailable: {reason}")]
    Backend { reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}
