//! Page-load activation rules and the toggle switch.
//!
//! `EffectSwitch` is the one handle the page bootstrap and the toggle button
//! share: it owns the current controller (if any) and the persisted flag.

use crate::constants::{
    DECEMBER_MONTH_INDEX, FLAG_ON, GLYPH_ACTIVE, GLYPH_INACTIVE, QUERY_KEY, STORAGE_KEY,
};
use crate::controller::EffectController;
use crate::surface::Surface;
use fnv::FnvHashMap;

/// Inputs to the auto-activation decision, gathered once at page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivationSignals {
    /// Current month, 0-based (January = 0).
    pub month0: u32,
    /// Value of the `christmas` query parameter, if present.
    pub query: Option<String>,
    /// Persisted flag value, if present.
    pub stored: Option<String>,
}

impl ActivationSignals {
    /// Signals from an already-decoded query value. Hosts with a real URL
    /// parser use this.
    pub fn new(month0: u32, query: Option<String>, store: &impl FlagStore) -> Self {
        Self {
            month0,
            query,
            stored: store.get(STORAGE_KEY),
        }
    }

    /// Signals from a raw `location.search` string, split with `query_flag`.
    pub fn from_page(month0: u32, search: &str, store: &impl FlagStore) -> Self {
        Self::new(
            month0,
            query_flag(search, QUERY_KEY).map(str::to_string),
            store,
        )
    }

    pub fn is_december(&self) -> bool {
        self.month0 == DECEMBER_MONTH_INDEX
    }

    pub fn is_forced(&self) -> bool {
        is_flag_on(self.query.as_deref()) || is_flag_on(self.stored.as_deref())
    }

    pub fn should_activate(&self) -> bool {
        self.is_december() || self.is_forced()
    }
}

/// Only the literal `"true"` counts.
#[inline]
pub fn is_flag_on(value: Option<&str>) -> bool {
    value == Some(FLAG_ON)
}

/// Value of `key` in a `location.search` string such as `?a=1&christmas=true`.
/// The first occurrence wins; a bare key yields an empty value.
pub fn query_flag<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Persistent key/value storage for the activation flag.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Non-persistent store, used when the host has no local storage and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryFlagStore {
    items: FnvHashMap<String, String>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[inline]
pub fn glyph_for(active: bool) -> &'static str {
    if active {
        GLYPH_ACTIVE
    } else {
        GLYPH_INACTIVE
    }
}

/// Owns the page's controller and the persisted flag.
pub struct EffectSwitch<S: Surface, F: FlagStore> {
    effect: Option<EffectController<S>>,
    store: F,
}

impl<S: Surface, F: FlagStore> EffectSwitch<S, F> {
    pub fn new(store: F) -> Self {
        Self {
            effect: None,
            store,
        }
    }

    /// Adopt a controller created by the bootstrap. Does not touch the flag.
    pub fn install(&mut self, effect: EffectController<S>) {
        self.effect = Some(effect);
    }

    /// Turn the effect off if a controller exists, otherwise create one with
    /// `spawn`. Updates the persisted flag and returns the new state.
    pub fn flip(&mut self, spawn: impl FnOnce() -> EffectController<S>) -> bool {
        match self.effect.take() {
            Some(mut effect) => {
                effect.toggle(false);
                self.store.remove(STORAGE_KEY);
                log::info!("[toggle] off");
                false
            }
            None => {
                self.effect = Some(spawn());
                self.store.set(STORAGE_KEY, FLAG_ON);
                log::info!("[toggle] on");
                true
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.effect.is_some()
    }

    pub fn glyph(&self) -> &'static str {
        glyph_for(self.is_active())
    }

    pub fn effect(&self) -> Option<&EffectController<S>> {
        self.effect.as_ref()
    }

    pub fn effect_mut(&mut self) -> Option<&mut EffectController<S>> {
        self.effect.as_mut()
    }

    pub fn store(&self) -> &F {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parsing() {
        assert_eq!(query_flag("?christmas=true", "christmas"), Some("true"));
        assert_eq!(query_flag("?a=1&christmas=false&b", "christmas"), Some("false"));
        assert_eq!(query_flag("christmas", "christmas"), Some(""));
        assert_eq!(query_flag("?xchristmas=true", "christmas"), None);
        assert_eq!(query_flag("", "christmas"), None);
        assert_eq!(query_flag("?&&", "christmas"), None);
        assert_eq!(
            query_flag("?christmas=true&christmas=false", "christmas"),
            Some("true")
        );
    }

    #[test]
    fn only_literal_true_is_on() {
        assert!(is_flag_on(Some("true")));
        assert!(!is_flag_on(Some("TRUE")));
        assert!(!is_flag_on(Some("1")));
        assert!(!is_flag_on(None));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryFlagStore::default();
        assert_eq!(store.get(STORAGE_KEY), None);
        store.set(STORAGE_KEY, "true");
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("true"));
        store.remove(STORAGE_KEY);
        assert_eq!(store.get(STORAGE_KEY), None);
    }

    #[test]
    fn glyphs() {
        assert_eq!(glyph_for(true), "🎄");
        assert_eq!(glyph_for(false), "❄️");
    }
}
