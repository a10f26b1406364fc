use duas_core::error::CoreError;

/// Error returned by store operations that enforce content rules.
///
/// Plain lookups return `sqlx::Error` directly; writes that validate input or
/// check parent rows return this type so callers can tell a rejected write
/// apart from a storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
