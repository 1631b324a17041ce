use blogpad_core::types::DbId;

/// Failure of a repository operation.
///
/// `NotFound` means the store answered and no row matched; `Store` covers
/// everything else (connectivity, constraint violations, decode failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

