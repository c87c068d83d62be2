use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::TokenStore;
use crate::db::Database;
use crate::error::Result;
use crate::models::User;

/// External token store keeping one `oauth_tokens` row per user and service
pub struct SqliteTokenStore {
    db: Arc<Database>,
    service: String,
}

impl SqliteTokenStore {
    pub fn new(db: Arc<Database>, service: impl Into<String>) -> Self {
        Self {
            db,
            service: service.into(),
        }
    }
}

impl TokenStore for SqliteTokenStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)> {
        Ok(self
            .db
            .get_external_token(&user.id, &self.service)?
            .map(|t| (t.access_token, t.access_token_expiry))
            .unwrap_or_default())
    }

    fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()> {
        self.db
            .upsert_external_access_token(&user.id, &self.service, token, expiry)?;
        Ok(())
    }

    fn get_oauth_refresh_token(&self, user: &User) -> Result<String> {
        Ok(self
            .db
            .get_external_token(&user.id, &self.service)?
            .map(|t| t.refresh_token)
            .unwrap_or_default())
    }

    fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()> {
        self.db
            .upsert_external_refresh_token(&user.id, &self.service, token)?;
        Ok(())
    }
}
