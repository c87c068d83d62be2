use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `oauth_tokens` table used by the SQLite token store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalToken {
    pub user_id: String,
    pub service: String,
    pub access_token: String,
    pub access_token_expiry: Option<DateTime<Utc>>,
    pub refresh_token: String,
    pub updated_at: DateTime<Utc>,
}
