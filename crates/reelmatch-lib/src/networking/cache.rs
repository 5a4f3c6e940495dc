use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OnceCell};
use tracing::trace;

/// Default entry lifetime - 10 minutes
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Default maximum number of entries
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Lifetime and size bounds for a [`ResolutionCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted: Instant,
}

struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    /// Insertion order, oldest first
    order: VecDeque<K>,
    in_flight: HashMap<K, Arc<OnceCell<V>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> CacheState<K, V> {
    fn fresh(&mut self, key: &K, ttl: Duration) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.inserted.elapsed() < ttl => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove(key);
        }
        None
    }

    fn insert(&mut self, key: K, value: V, capacity: usize) {
        if self.entries.contains_key(&key) {
            self.order.retain(|existing| existing != &key);
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                inserted: Instant::now(),
            },
        );
        self.order.push_back(key);

        while self.entries.len() > capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|existing| existing != key);
        Some(removed.value)
    }
}

/// In-memory TTL cache with bounded size and request coalescing
///
/// When full, the oldest inserted entry is evicted. Concurrent
/// [`get_or_try_resolve`](Self::get_or_try_resolve) calls for the same key
/// share a single resolution.
pub struct ResolutionCache<K, V> {
    config: CacheConfig,
    state: Arc<Mutex<CacheState<K, V>>>,
}

impl<K, V> ResolutionCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Clone + Send + Sync,
{
    /// Create a cache with default TTL and capacity
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
                in_flight: HashMap::new(),
            })),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Get a live entry; expired entries are dropped on access
    pub async fn get(&self, key: &K) -> Option<V> {
        self.state.lock().await.fresh(key, self.config.ttl)
    }

    /// Store a value, evicting the oldest entry when over capacity
    pub async fn put(&self, key: K, value: V) {
        self.state
            .lock()
            .await
            .insert(key, value, self.config.capacity);
    }

    /// Remove an entry
    pub async fn remove(&self, key: &K) -> Option<V> {
        self.state.lock().await.remove(key)
    }

    /// Clear all entries
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.entries.clear();
        state.order.clear();
    }

    /// Number of stored entries, expired ones included until touched
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.entries.is_empty()
    }

    /// Cached value for `key`, or the result of `resolve`
    ///
    /// Only `Ok` results are stored. While a resolution for `key` is running,
    /// other callers wait for it instead of starting their own; if it fails,
    /// the next waiter runs its own `resolve`.
    pub async fn get_or_try_resolve<F, Fut, E>(&self, key: K, resolve: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<V, E>>,
    {
        let cell = {
            let mut state = self.state.lock().await;
            if let Some(value) = state.fresh(&key, self.config.ttl) {
                trace!("Resolution cache hit");
                return Ok(value);
            }
            state
                .in_flight
                .entry(key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let outcome = cell.get_or_try_init(resolve).await.cloned();

        let mut state = self.state.lock().await;
        let owner = state
            .in_flight
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &cell));
        if owner {
            state.in_flight.remove(&key);
        }
        if let Ok(value) = &outcome
            && (owner || !state.entries.contains_key(&key))
        {
            state.insert(key, value.clone(), self.config.capacity);
        }

        outcome
    }
}

impl<K, V> Default for ResolutionCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("cache.test.rs");
}
