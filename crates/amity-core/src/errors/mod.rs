//! Error types, one enum per subsystem, aggregated into [`AmityError`].

mod catalog_error;
mod session_error;
mod storage_error;

pub use catalog_error::CatalogError;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Top-level error for the Amity workspace.
#[derive(Debug, thiserror::Error)]
pub enum AmityError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience result alias used across the workspace.
pub type AmityResult<T> = Result<T, AmityError>;
