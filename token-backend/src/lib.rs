pub mod config;
pub mod db;
pub mod error;
pub mod migration;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{Result, TokenStoreError};
pub use migration::{MigrationDirection, MigrationResult, Migrator};
pub use store::{DefaultTokenStore, StoreRegistry, TokenStore};
