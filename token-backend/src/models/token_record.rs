use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display};

/// Which store holds the live copy of a user's tokens for a service.
///
/// Persisted as the boolean `oauthvalid`: `true` means the tokens live in an
/// external store and the embedded fields are cleared, `false` (or missing)
/// means the embedded fields are the live copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TokenAuthority {
    #[default]
    Default,
    External,
}

impl TokenAuthority {
    /// Value stored under `oauthvalid`
    pub fn as_flag(self) -> bool {
        matches!(self, TokenAuthority::External)
    }

    pub fn from_flag(flag: bool) -> Self {
        if flag {
            TokenAuthority::External
        } else {
            TokenAuthority::Default
        }
    }
}

mod authority_flag {
    use super::TokenAuthority;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(authority: &TokenAuthority, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(authority.as_flag())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TokenAuthority, D::Error> {
        // Older documents carry null here
        let flag = Option::<bool>::deserialize(d)?;
        Ok(TokenAuthority::from_flag(flag.unwrap_or(false)))
    }
}

/// OAuth token state embedded in a user's protected settings for one service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Empty when absent
    #[serde(rename = "oauthtoken", default)]
    pub access_token: String,
    #[serde(rename = "oauthexpiredate", default)]
    pub access_token_expiry: Option<DateTime<Utc>>,
    /// Empty when absent
    #[serde(rename = "oauthrefreshtoken", default)]
    pub refresh_token: String,
    #[serde(rename = "oauthvalid", default, with = "authority_flag")]
    pub authority: TokenAuthority,
    /// Other protected settings of the service, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenRecord {
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// A record without an expiry never expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expiry.is_some_and(|expiry| expiry < now)
    }

    /// Expired and nothing to renew it with, so not worth migrating
    pub fn is_unrecoverable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_expired_at(now) && !self.has_refresh_token()
    }
}
