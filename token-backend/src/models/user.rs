use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TokenRecord;
use crate::error::{Result, TokenStoreError};

/// In-memory copy of a user document: the identifier plus the per-service
/// protected settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub protected: HashMap<String, TokenRecord>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            protected: HashMap::new(),
        }
    }

    /// Resolve the protected settings fragment for a service
    pub fn protected_settings(&self, service: &str) -> Result<&TokenRecord> {
        self.protected.get(service).ok_or_else(|| {
            TokenStoreError::NotFound(format!(
                "Protected settings for service '{}' of user '{}'",
                service, self.id
            ))
        })
    }
}

/// Candidate row of a migration query: the user id and the service's
/// fragment as stored, not yet parsed
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateUser {
    pub id: String,
    pub fragment: Option<String>,
}

impl CandidateUser {
    /// Parse the fragment into a user holding only that service's settings
    pub fn to_user(&self, service: &str) -> Result<User> {
        let mut user = User::new(self.id.clone());
        if let Some(fragment) = &self.fragment {
            let record: TokenRecord = serde_json::from_str(fragment)?;
            user.protected.insert(service.to_string(), record);
        }
        Ok(user)
    }
}
