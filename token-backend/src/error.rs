//! Error type shared by the token stores, the registry and the migration engine

/// Errors surfaced by token storage and migration.
///
/// Absence of a token is never an error: getters return empty strings.
/// These variants signal that a backend could not be reached or that the
/// stored data is unusable.
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    /// Candidate selection for a migration run failed
    #[error("Candidate query failed: {0}")]
    Query(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// User or protected-settings fragment does not exist
    #[error("{0} not found")]
    NotFound(String),

    #[error("Malformed document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by an external token store
    #[error("Token store backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token store registry is not installed")]
    RegistryNotInstalled,

    #[error("Token store registry is already installed")]
    RegistryAlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, TokenStoreError>;
