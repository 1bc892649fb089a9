//! Expiring snapshot cache.
//!
//! Market snapshots go stale on the order of minutes, so the dashboard
//! layer wraps its [`SnapshotSource`] in a read-through cache instead of
//! hitting the backing file or feed on every evaluation. [`ExpiringCache`]
//! is the generic building block; [`CachedSnapshotSource`] is the decorator
//! the rest of the crate actually uses.

use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

use intrinsic_core::{MarketSnapshot, Ticker};

use crate::sources::SnapshotSource;

/// Cache TTL used when none is configured (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CachedEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Concurrent map whose entries expire after a fixed TTL.
///
/// Entries are stamped with their expiry on insert. `get` never returns an
/// expired value; expired entries are evicted lazily on lookup, or in bulk
/// through [`cleanup_expired`](Self::cleanup_expired).
pub struct ExpiringCache<K, V> {
    entries: DashMap<K, CachedEntry<V>>,
    ttl: Duration,
}

impl<K: Eq + Hash, V: Clone> ExpiringCache<K, V> {
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// The TTL applied to inserted entries.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Inserts a value, replacing any previous entry and restarting its
    /// lifetime.
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            CachedEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Returns the value for `key` when a fresh entry exists.
    ///
    /// An expired entry is evicted and reported as absent.
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if Instant::now() < entry.expires_at {
                return Some(entry.value.clone());
            }
        }
        // Re-check expiry under the entry lock so a concurrent fresh
        // insert between the lookup and the eviction survives.
        self.entries
            .remove_if(key, |_, entry| Instant::now() >= entry.expires_at);
        None
    }

    /// Removes an entry, returning the stored value when one existed.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, entry)| entry.value)
    }

    /// Drops every expired entry.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| now < entry.expires_at);
    }

    /// Number of stored entries, counting expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash, V: Clone> Default for ExpiringCache<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Read-through [`SnapshotSource`] decorator.
///
/// Lookups are served from an [`ExpiringCache`] keyed by ticker; a miss
/// falls through to the wrapped source and the answer is cached for the
/// TTL. Absent tickers are not cached, so a ticker that appears upstream
/// later is picked up on the next lookup.
pub struct CachedSnapshotSource<S> {
    inner: S,
    cache: ExpiringCache<Ticker, MarketSnapshot>,
}

impl<S: SnapshotSource> CachedSnapshotSource<S> {
    /// Wraps `inner` with a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: ExpiringCache::new(ttl),
        }
    }

    /// The wrapped source.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops the cached snapshot for one ticker, forcing the next lookup
    /// through to the wrapped source.
    pub fn invalidate(&self, ticker: &Ticker) {
        self.cache.remove(ticker);
    }

    /// Drops every cached snapshot.
    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl<S: SnapshotSource> SnapshotSource for CachedSnapshotSource<S> {
    fn snapshot(&self, ticker: &Ticker) -> Option<MarketSnapshot> {
        if let Some(snapshot) = self.cache.get(ticker) {
            debug!(ticker = %ticker, "snapshot cache hit");
            return Some(snapshot);
        }
        debug!(ticker = %ticker, "snapshot cache miss");
        let snapshot = self.inner.snapshot(ticker)?;
        self.cache.insert(ticker.clone(), snapshot.clone());
        Some(snapshot)
    }
}
