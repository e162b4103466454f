//! Catalog browsing state — favorites and a recently-viewed list.
//!
//! Plain value types over catalog ids; persistence (if any) is the
//! caller's concern.

use serde::{Deserialize, Serialize};

use crate::trick_engine::catalog;
use crate::trick_engine::models::Trick;

/// How many entries [`RecentlyViewed`] keeps.
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// An ordered, de-duplicated set of favorite trick ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Add a trick id; already-present ids are left where they are.
    pub fn add(&mut self, trick_id: u32) {
        if !self.ids.contains(&trick_id) {
            self.ids.push(trick_id);
        }
    }

    pub fn remove(&mut self, trick_id: u32) {
        self.ids.retain(|&id| id != trick_id);
    }

    pub fn contains(&self, trick_id: u32) -> bool {
        self.ids.contains(&trick_id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Resolve against the catalog, in catalog order.
    pub fn tricks(&self) -> Vec<&'static Trick> {
        catalog::all_tricks()
            .iter()
            .filter(|t| self.ids.contains(&t.id))
            .collect()
    }
}

/// Most-recent-first list of viewed trick ids, capped at
/// [`RECENTLY_VIEWED_CAP`]. Re-viewing a trick moves it back to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyViewed {
    ids: Vec<u32>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        RecentlyViewed::default()
    }

    pub fn record(&mut self, trick_id: u32) {
        self.ids.retain(|&id| id != trick_id);
        self.ids.insert(0, trick_id);
        self.ids.truncate(RECENTLY_VIEWED_CAP);
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Resolve against the catalog, most recent first; ids the catalog no
    /// longer knows are skipped.
    pub fn tricks(&self) -> Vec<&'static Trick> {
        self.ids
            .iter()
            .filter_map(|&id| catalog::trick_by_id(id))
            .collect()
    }
}
