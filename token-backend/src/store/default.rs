use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

use super::TokenStore;
use crate::db::{
    Database, OAUTH_EXPIRE_DATE_FIELD, OAUTH_REFRESH_TOKEN_FIELD, OAUTH_TOKEN_FIELD, OAUTH_VALID_FIELD,
    validate_service_name,
};
use crate::error::{Result, TokenStoreError};
use crate::models::{TokenAuthority, TokenRecord, User};

/// Token store backed by the protected settings embedded in user documents.
///
/// Writing through this store makes the document authoritative again, so
/// every setter also flags the fragment as `Default`.
pub struct DefaultTokenStore {
    db: Arc<Database>,
    service: String,
}

impl DefaultTokenStore {
    pub fn new(db: Arc<Database>, service: impl Into<String>) -> Result<Self> {
        let service = service.into();
        validate_service_name(&service)?;
        Ok(Self { db, service })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Fresh copy of the user's fragment for this service
    fn protected_settings(&self, user: &User) -> Result<TokenRecord> {
        let stored = self
            .db
            .get_user(&user.id)?
            .ok_or_else(|| TokenStoreError::NotFound(format!("User '{}'", user.id)))?;
        stored.protected_settings(&self.service).cloned()
    }
}

impl TokenStore for DefaultTokenStore {
    fn name(&self) -> &str {
        "default"
    }

    fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)> {
        let ps = self.protected_settings(user)?;
        Ok((ps.access_token, ps.access_token_expiry))
    }

    fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()> {
        self.db.set_protected_fields(
            &user.id,
            &self.service,
            &[
                (OAUTH_TOKEN_FIELD, json!(token)),
                (OAUTH_EXPIRE_DATE_FIELD, json!(expiry)),
                (OAUTH_VALID_FIELD, json!(TokenAuthority::Default.as_flag())),
            ],
        )
    }

    fn get_oauth_refresh_token(&self, user: &User) -> Result<String> {
        Ok(self.protected_settings(user)?.refresh_token)
    }

    fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()> {
        self.db.set_protected_fields(
            &user.id,
            &self.service,
            &[
                (OAUTH_REFRESH_TOKEN_FIELD, json!(token)),
                (OAUTH_VALID_FIELD, json!(TokenAuthority::Default.as_flag())),
            ],
        )
    }
}
