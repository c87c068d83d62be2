use std::env;

use crate::db::validate_service_name;
use crate::error::{Result, TokenStoreError};
use crate::migration::DEFAULT_PROGRESS_EVERY;

#[derive(Debug, Clone)]
pub struct Config {
    /// Database holding the user documents
    pub database_url: String,
    /// Service whose tokens are migrated
    pub service_name: String,
    /// Database of the external SQLite token store
    pub external_store_url: String,
    pub progress_every: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "./.db/tokens.db".to_string());

        let service_name = env::var("SERVICE_NAME")
            .map_err(|_| TokenStoreError::Config("SERVICE_NAME must be set".to_string()))?;
        validate_service_name(&service_name)?;

        let external_store_url = env::var("EXTERNAL_STORE_URL").unwrap_or_else(|_| database_url.clone());

        let progress_every = match env::var("MIGRATION_PROGRESS_EVERY") {
            Ok(value) => value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    TokenStoreError::Config(format!(
                        "MIGRATION_PROGRESS_EVERY must be a positive number, got '{}'",
                        value
                    ))
                })?,
            Err(_) => DEFAULT_PROGRESS_EVERY,
        };

        Ok(Self {
            database_url,
            service_name,
            external_store_url,
            progress_every,
        })
    }
}
