use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use super::TokenStore;
use crate::error::Result;
use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq)]
struct MemoryEntry {
    access_token: String,
    expiry: Option<DateTime<Utc>>,
    refresh_token: String,
}

/// Token store held in process memory, keyed by user id
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)> {
        Ok(self
            .entries
            .read()
            .get(&user.id)
            .map(|e| (e.access_token.clone(), e.expiry))
            .unwrap_or_default())
    }

    fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()> {
        let mut entries = self.entries.write();
        let entry = entries.entry(user.id.clone()).or_default();
        entry.access_token = token.to_string();
        entry.expiry = expiry;
        Ok(())
    }

    fn get_oauth_refresh_token(&self, user: &User) -> Result<String> {
        Ok(self
            .entries
            .read()
            .get(&user.id)
            .map(|e| e.refresh_token.clone())
            .unwrap_or_default())
    }

    fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()> {
        self.entries
            .write()
            .entry(user.id.clone())
            .or_default()
            .refresh_token = token.to_string();
        Ok(())
    }
}
