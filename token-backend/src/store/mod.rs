//! Token stores - the capability every OAuth token backend implements
//!
//! - `DefaultTokenStore`: fields embedded in the user document
//! - `SqliteTokenStore`: the `oauth_tokens` table, usually in another database
//! - `MemoryTokenStore`: process memory, for tests and dry runs
//! - `StoreRegistry`: holder of whichever store is active

mod default;
mod memory;
pub mod registry;
mod sqlite;

pub use default::DefaultTokenStore;
pub use memory::MemoryTokenStore;
pub use registry::StoreRegistry;
pub use sqlite::SqliteTokenStore;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::User;

/// Get/set OAuth access and refresh tokens for a user.
///
/// Getters return an empty string (and no expiry) when nothing is stored;
/// an `Err` means the backend could not answer. Setters are durable once
/// they return `Ok`.
pub trait TokenStore: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)>;

    fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()>;

    fn get_oauth_refresh_token(&self, user: &User) -> Result<String>;

    fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()>;
}
