use thiserror::Error;

/// Errors surfaced by the data-access layer.
///
/// `Conflict` and `NotFound` are contract errors the caller is expected to
/// branch on; `Database` is transport failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("unique constraint violated")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RepoError {
    /// Fold a sqlx error into the taxonomy, turning unique-key violations
    /// into `Conflict`.
    pub fn from_insert(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(dbe) if dbe.is_unique_violation() => RepoError::Conflict,
            other => RepoError::Database(other),
        }
    }
}
