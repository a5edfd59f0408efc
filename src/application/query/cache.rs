// SPDX-License-Identifier: MPL-2.0
//! Keyed query cache with invalidation.
//!
//! Each key moves through `Idle → Loading → Ready | Failed`. Every fetch gets
//! a [`FetchTicket`] carrying a generation number; a response is applied only
//! if its ticket is still the latest one for that key, so a slow response
//! can never overwrite data fetched after an invalidation.

use crate::domain::gallery::QueryKey;
use std::collections::{HashMap, VecDeque};

/// Data-access interface used by mutations to request a refresh.
pub trait CacheInvalidator {
    /// Marks the entry for `key` as stale and schedules a refetch.
    fn invalidate(&mut self, key: &QueryKey);
}

/// Lifecycle of a cached query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; previously cached data (if any) is kept.
    Failed(String),
}

/// Handle identifying one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Debug)]
struct Entry<T> {
    data: Option<T>,
    status: QueryStatus,
    stale: bool,
    generation: u64,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            stale: false,
            generation: 0,
        }
    }
}

/// Cache of query results keyed by [`QueryKey`].
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    /// Keys waiting for a refetch, in invalidation order, without duplicates.
    pending: VecDeque<QueryKey>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<T> QueryCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `key`, superseding any fetch already in flight.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> FetchTicket {
        self.pending.retain(|pending| pending != key);
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.status = QueryStatus::Loading;
        FetchTicket {
            key: key.clone(),
            generation: entry.generation,
        }
    }

    /// Applies a fetch result, replacing cached data on success.
    ///
    /// Returns `false` if the ticket was superseded and the result dropped.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<T, String>) -> bool {
        self.complete_with(ticket, result, |_, fresh| fresh)
    }

    /// Applies a fetch result, merging it into cached data on success.
    ///
    /// `merge` receives the previously cached value (if any) and the fresh one.
    /// Returns `false` if the ticket was superseded and the result dropped.
    pub fn complete_with(
        &mut self,
        ticket: &FetchTicket,
        result: Result<T, String>,
        merge: impl FnOnce(Option<T>, T) -> T,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.generation != ticket.generation {
            return false;
        }

        match result {
            Ok(fresh) => {
                entry.data = Some(merge(entry.data.take(), fresh));
                entry.status = QueryStatus::Ready;
                entry.stale = false;
            }
            Err(message) => {
                entry.status = QueryStatus::Failed(message);
            }
        }
        true
    }

    /// Returns the cached value for `key`.
    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key).and_then(|entry| entry.data.as_ref())
    }

    #[must_use]
    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        self.entries
            .get(key)
            .map(|entry| entry.status.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.status(key) == QueryStatus::Loading
    }

    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.stale)
    }

    /// Drains the keys scheduled for refetch.
    pub fn take_pending(&mut self) -> Vec<QueryKey> {
        self.pending.drain(..).collect()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl<T> CacheInvalidator for QueryCache<T> {
    fn invalidate(&mut self, key: &QueryKey) {
        self.entries.entry(key.clone()).or_default().stale = true;
        if !self.pending.contains(key) {
            self.pending.push_back(key.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTHER: QueryKey = QueryKey::new("other");

    #[test]
    fn new_cache_is_idle() {
        let cache: QueryCache<u32> = QueryCache::new();
        assert_eq!(cache.status(&QueryKey::IMAGES), QueryStatus::Idle);
        assert!(cache.get(&QueryKey::IMAGES).is_none());
        assert!(!cache.has_pending());
    }

    #[test]
    fn fetch_then_complete_stores_data() {
        let mut cache = QueryCache::new();
        let ticket = cache.begin_fetch(&QueryKey::IMAGES);
        assert!(cache.is_loading(&QueryKey::IMAGES));

        assert!(cache.complete(&ticket, Ok(7)));
        assert_eq!(cache.get(&QueryKey::IMAGES), Some(&7));
        assert_eq!(cache.status(&QueryKey::IMAGES), QueryStatus::Ready);
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut cache = QueryCache::new();
        let first = cache.begin_fetch(&QueryKey::IMAGES);
        cache.complete(&first, Ok(1));

        let second = cache.begin_fetch(&QueryKey::IMAGES);
        cache.complete(&second, Err("offline".into()));

        assert_eq!(cache.get(&QueryKey::IMAGES), Some(&1));
        assert_eq!(
            cache.status(&QueryKey::IMAGES),
            QueryStatus::Failed("offline".into())
        );
    }

    #[test]
    fn superseded_ticket_is_dropped() {
        let mut cache = QueryCache::new();
        let old = cache.begin_fetch(&QueryKey::IMAGES);
        let new = cache.begin_fetch(&QueryKey::IMAGES);

        assert!(cache.complete(&new, Ok(2)));
        assert!(!cache.complete(&old, Ok(1)));
        assert_eq!(cache.get(&QueryKey::IMAGES), Some(&2));
    }

    #[test]
    fn invalidate_schedules_one_refetch() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.invalidate(&QueryKey::IMAGES);
        cache.invalidate(&QueryKey::IMAGES);

        assert!(cache.is_stale(&QueryKey::IMAGES));
        assert_eq!(cache.take_pending(), vec![QueryKey::IMAGES]);
        assert!(cache.take_pending().is_empty());
    }

    #[test]
    fn invalidation_order_is_preserved() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.invalidate(&OTHER);
        cache.invalidate(&QueryKey::IMAGES);
        assert_eq!(cache.take_pending(), vec![OTHER, QueryKey::IMAGES]);
    }

    #[test]
    fn begin_fetch_clears_pending_refetch() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.invalidate(&QueryKey::IMAGES);
        let _ticket = cache.begin_fetch(&QueryKey::IMAGES);
        assert!(!cache.has_pending());
    }

    #[test]
    fn successful_refetch_clears_stale_flag() {
        let mut cache = QueryCache::new();
        cache.invalidate(&QueryKey::IMAGES);
        let ticket = cache.begin_fetch(&QueryKey::IMAGES);
        cache.complete(&ticket, Ok(3));
        assert!(!cache.is_stale(&QueryKey::IMAGES));
    }

    #[test]
    fn complete_with_merges_into_existing_data() {
        let mut cache = QueryCache::new();
        let first = cache.begin_fetch(&QueryKey::IMAGES);
        cache.complete(&first, Ok(vec![1, 2]));

        let more = cache.begin_fetch(&QueryKey::IMAGES);
        cache.complete_with(&more, Ok(vec![3]), |existing, fresh| {
            let mut merged = existing.unwrap_or_default();
            merged.extend(fresh);
            merged
        });

        assert_eq!(cache.get(&QueryKey::IMAGES), Some(&vec![1, 2, 3]));
    }
}
