//! Wishlist Store
//!
//! Owns the persisted wishlist collection. Every mutation is a full
//! read-modify-write of the single storage key before returning.

use std::collections::HashSet;

use crate::format::{format_cost, format_date_millis, format_total, parse_amount};
use crate::models::{WishlistEntry, WishlistKey, WishlistPayload};
use crate::storage::StorageBackend;

/// Storage key used by the original site
pub const DEFAULT_STORAGE_KEY: &str = "hs_wishlist";

/// Which half of a toggle happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Persistence-backed wishlist.
///
/// Operations take `&self` and run to completion; callers on more than one
/// thread must serialize access (the backend alone does not make a
/// read-modify-write atomic).
#[derive(Debug)]
pub struct WishlistStore<S: StorageBackend> {
    storage: S,
    key: String,
}

impl<S: StorageBackend> WishlistStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Current collection; missing or non-array state reads as empty, and
    /// individual malformed entries are skipped
    pub fn read(&self) -> Vec<WishlistEntry> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("[WISHLIST] read failed: {}", e);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("[WISHLIST] discarding unparseable state under {}: {}", self.key, e);
                return Vec::new();
            }
        };

        // A malformed entry is skipped on its own; its neighbours survive
        let entries: Vec<WishlistEntry> = values
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("[WISHLIST] skipping malformed entry {}: {}", i, e);
                    None
                }
            })
            .collect();

        let mut seen = HashSet::new();
        let before = entries.len();
        let entries: Vec<WishlistEntry> = entries.into_iter().filter(|e| seen.insert(e.key.clone())).collect();
        if entries.len() != before {
            log::warn!("[WISHLIST] dropped {} duplicate entries", before - entries.len());
        }
        entries
    }

    pub fn contains(&self, key: &WishlistKey) -> bool {
        self.read().iter().any(|e| e.key == *key)
    }

    /// Remove the payload's entry if present, otherwise append it stamped now
    pub fn toggle(&self, payload: WishlistPayload) -> ToggleOutcome {
        self.toggle_at(payload, chrono::Utc::now().timestamp_millis())
    }

    pub fn toggle_at(&self, payload: WishlistPayload, ts: i64) -> ToggleOutcome {
        let mut entries = self.read();
        let outcome = match entries.iter().position(|e| e.key == payload.key) {
            Some(idx) => {
                entries.remove(idx);
                ToggleOutcome::Removed
            }
            None => {
                entries.push(WishlistEntry::from_payload(payload.clone(), ts));
                ToggleOutcome::Added
            }
        };
        self.write(&entries);
        log::debug!("[WISHLIST] toggle {} -> {:?} ({} entries)", payload.key, outcome, entries.len());
        outcome
    }

    /// Delete the entry at `index`; out of range is a no-op
    pub fn remove_at(&self, index: usize) -> Option<WishlistEntry> {
        let mut entries = self.read();
        if index >= entries.len() {
            return None;
        }
        let removed = entries.remove(index);
        self.write(&entries);
        log::debug!("[WISHLIST] removed {} at {}", removed.key, index);
        Some(removed)
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::error!("[WISHLIST] clear failed: {}", e);
        }
        log::debug!("[WISHLIST] cleared");
    }

    fn write(&self, entries: &[WishlistEntry]) {
        let result = serde_json::to_string(entries)
            .map_err(|e| e.to_string())
            .and_then(|json| self.storage.set(&self.key, &json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            log::error!("[WISHLIST] write failed: {}", e);
        }
    }
}

// ========================
// Summary
// ========================

/// One rendered wishlist row
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Position in the collection at render time, bound to the remove control
    pub index: usize,
    pub entry: WishlistEntry,
    pub title: String,
    pub category: String,
    /// Formatted cost, empty when absent
    pub cost: String,
    pub added_on: String,
}

/// Rows plus aggregates, computed in full before anything is displayed
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistSummary {
    pub rows: Vec<SummaryRow>,
    pub count: usize,
    pub total: f64,
}

impl WishlistSummary {
    pub fn from_entries(entries: &[WishlistEntry], currency: &str) -> Self {
        let mut total = 0.0;
        let rows: Vec<SummaryRow> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                total += entry.cost.as_ref().map(parse_amount).unwrap_or(0.0);
                SummaryRow {
                    index,
                    entry: entry.clone(),
                    title: if entry.title.is_empty() { "Untitled".to_string() } else { entry.title.clone() },
                    category: entry.key.item_type.as_str().to_string(),
                    cost: format_cost(entry.cost.as_ref(), currency),
                    added_on: format_date_millis(entry.ts),
                }
            })
            .collect();

        Self { count: rows.len(), rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_display(&self, currency: &str) -> String {
        format_total(self.total, currency)
    }
}
