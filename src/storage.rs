//! `FlagStore` backed by `window.localStorage`.
//!
//! Storage can be missing or throw (private browsing, disabled cookies); the
//! flag then lives in memory for the rest of the page and is simply not
//! remembered on the next visit.

use festive_core::{FlagStore, MemoryFlagStore};
use web_sys as web;

pub struct LocalFlagStore {
    storage: Option<web::Storage>,
    fallback: MemoryFlagStore,
}

impl LocalFlagStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("[bootstrap] localStorage unavailable; toggle state will not persist");
                None
            }
            Err(e) => {
                log::warn!("[bootstrap] localStorage blocked: {:?}", e);
                None
            }
        };
        Self {
            storage,
            fallback: MemoryFlagStore::default(),
        }
    }
}

impl FlagStore for LocalFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match &self.storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("[toggle] could not persist {}: {:?}", key, e);
                }
            }
            None => self.fallback.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) {
        match &self.storage {
            Some(storage) => {
                _ = storage.remove_item(key);
            }
            None => self.fallback.remove(key),
        }
    }
}
