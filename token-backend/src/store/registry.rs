//! Active token store holder
//!
//! A `StoreRegistry` is normally passed around explicitly. Code paths that
//! cannot take it as a parameter may use the process-wide instance, which
//! must be installed once at startup with [`install`].

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use super::TokenStore;
use crate::error::{Result, TokenStoreError};

/// Holds the token store the rest of the platform reads and writes through
pub struct StoreRegistry {
    active: RwLock<Arc<dyn TokenStore>>,
}

impl StoreRegistry {
    pub fn new(initial: Arc<dyn TokenStore>) -> Self {
        Self {
            active: RwLock::new(initial),
        }
    }

    /// Currently active store. Callers keep using the returned handle even
    /// if the store is replaced meanwhile.
    pub fn active(&self) -> Arc<dyn TokenStore> {
        self.active.read().clone()
    }

    /// Swap the active store, returning the previous one
    pub fn replace(&self, store: Arc<dyn TokenStore>) -> Arc<dyn TokenStore> {
        log::info!("Switching active token store to '{}'", store.name());
        std::mem::replace(&mut *self.active.write(), store)
    }
}

static GLOBAL: OnceCell<StoreRegistry> = OnceCell::new();

/// Install the process-wide registry. Can only be done once.
pub fn install(registry: StoreRegistry) -> Result<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| TokenStoreError::RegistryAlreadyInstalled)
}

/// The process-wide registry, if installed
pub fn global() -> Option<&'static StoreRegistry> {
    GLOBAL.get()
}

/// Replace the active store of the process-wide registry
pub fn set_token_store(store: Arc<dyn TokenStore>) -> Result<()> {
    let registry = global().ok_or(TokenStoreError::RegistryNotInstalled)?;
    registry.replace(store);
    Ok(())
}

/// Active store of the process-wide registry
pub fn token_store() -> Result<Arc<dyn TokenStore>> {
    global()
        .map(StoreRegistry::active)
        .ok_or(TokenStoreError::RegistryNotInstalled)
}
