//! Friendship lookup results.
//!
//! A relationship lookup answers for many accounts at once. The results are
//! kept in the order they arrived and indexed by account id and by screen
//! name. Screen names match case-insensitively, the way handles are
//! resolved by the service. When several accounts in one lookup carry the
//! same handle, the one that arrived first answers for it.

use std::collections::HashMap;

use crate::friendship::Friendship;
use crate::relation::Relation;

/// Friendships returned by one relationship lookup.
#[derive(Debug, Clone, Default)]
pub struct FriendshipLookup {
    entries: Vec<Friendship>,
    by_id: HashMap<i64, usize>,
    by_screen_name: HashMap<String, Vec<usize>>,
}

fn handle_key(screen_name: &str) -> String {
    screen_name.trim_start_matches('@').to_lowercase()
}

impl FriendshipLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a friendship. A friendship for an id already present replaces
    /// the earlier one in place and the earlier one is returned.
    pub fn insert(&mut self, friendship: Friendship) -> Option<Friendship> {
        let key = handle_key(friendship.screen_name());

        if let Some(&pos) = self.by_id.get(&friendship.id()) {
            tracing::debug!(id = friendship.id(), "replacing duplicate friendship");
            let old = std::mem::replace(&mut self.entries[pos], friendship);
            self.unindex_handle(&handle_key(old.screen_name()), pos);
            self.index_handle(key, pos);
            return Some(old);
        }

        let pos = self.entries.len();
        self.by_id.insert(friendship.id(), pos);
        self.index_handle(key, pos);
        self.entries.push(friendship);
        None
    }

    fn index_handle(&mut self, key: String, pos: usize) {
        let positions = self.by_screen_name.entry(key).or_default();
        if let Err(at) = positions.binary_search(&pos) {
            if !positions.is_empty() {
                tracing::debug!(pos, "handle shared by several accounts");
            }
            positions.insert(at, pos);
        }
    }

    fn unindex_handle(&mut self, key: &str, pos: usize) {
        if let Some(positions) = self.by_screen_name.get_mut(key) {
            positions.retain(|&p| p != pos);
            if positions.is_empty() {
                self.by_screen_name.remove(key);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Friendship> {
        self.by_id.get(&id).map(|&pos| &self.entries[pos])
    }

    /// Find a friendship by handle, ignoring case and a leading `@`.
    #[must_use]
    pub fn by_screen_name(&self, screen_name: &str) -> Option<&Friendship> {
        self.by_screen_name
            .get(&handle_key(screen_name))
            .and_then(|positions| positions.first())
            .map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friendship> {
        self.entries.iter()
    }

    pub fn with_relation(&self, relation: Relation) -> impl Iterator<Item = &Friendship> {
        self.entries
            .iter()
            .filter(move |friendship| friendship.relation() == relation)
    }

    pub fn mutuals(&self) -> impl Iterator<Item = &Friendship> {
        self.with_relation(Relation::Mutual)
    }
}

impl FromIterator<Friendship> for FriendshipLookup {
    fn from_iter<I: IntoIterator<Item = Friendship>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for friendship in iter {
            lookup.insert(friendship);
        }
        lookup
    }
}

impl<'a> IntoIterator for &'a FriendshipLookup {
    type Item = &'a Friendship;
    type IntoIter = std::slice::Iter<'a, Friendship>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
