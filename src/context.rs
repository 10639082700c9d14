//! Wishlist Service
//!
//! Reactive handle over the wishlist store, constructed by the entry point
//! and passed to every card and panel that reads or mutates the wishlist.

use leptos::prelude::*;

use crate::models::{WishlistEntry, WishlistKey, WishlistPayload};
use crate::storage::{BrowserStorage, StorageBackend};
use crate::wishlist::{ToggleOutcome, WishlistStore, WishlistSummary};

pub struct WishlistService<S: StorageBackend + Send + Sync + 'static = BrowserStorage> {
    store: StoredValue<WishlistStore<S>>,
    /// Bumped after every mutation, so readers re-derive from storage
    version: RwSignal<u32>,
    currency: StoredValue<String>,
}

impl<S: StorageBackend + Send + Sync + 'static> Clone for WishlistService<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: StorageBackend + Send + Sync + 'static> Copy for WishlistService<S> {}

impl WishlistService<BrowserStorage> {
    pub fn new(storage_key: &str, currency: &str) -> Self {
        Self::with_storage(BrowserStorage, storage_key, currency)
    }
}

impl<S: StorageBackend + Send + Sync + 'static> WishlistService<S> {
    pub fn with_storage(storage: S, storage_key: &str, currency: &str) -> Self {
        Self {
            store: StoredValue::new(WishlistStore::new(storage, storage_key)),
            version: RwSignal::new(0),
            currency: StoredValue::new(currency.to_string()),
        }
    }

    pub fn currency(&self) -> String {
        self.currency.get_value()
    }

    pub fn entries(&self) -> Vec<WishlistEntry> {
        let _ = self.version.get();
        self.store.with_value(|store| store.read())
    }

    pub fn contains(&self, key: &WishlistKey) -> bool {
        let _ = self.version.get();
        self.store.with_value(|store| store.contains(key))
    }

    pub fn summary(&self) -> WishlistSummary {
        let currency = self.currency();
        WishlistSummary::from_entries(&self.entries(), &currency)
    }

    /// Membership of one key, re-derived after every mutation
    pub fn membership(&self, key: WishlistKey) -> Memo<bool> {
        let service = *self;
        Memo::new(move |_| service.contains(&key))
    }

    pub fn summary_memo(&self) -> Memo<WishlistSummary> {
        let service = *self;
        Memo::new(move |_| service.summary())
    }

    pub fn toggle(&self, payload: WishlistPayload) -> ToggleOutcome {
        let outcome = self.store.with_value(|store| store.toggle(payload));
        self.refresh();
        outcome
    }

    pub fn remove_at(&self, index: usize) {
        if self.store.with_value(|store| store.remove_at(index)).is_some() {
            self.refresh();
        }
    }

    pub fn clear(&self) {
        self.store.with_value(|store| store.clear());
        self.refresh();
    }

    /// Re-read persisted state into every view
    pub fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }
}
