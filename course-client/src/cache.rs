//! Query cache and invalidation signals
//!
//! ```text
//! AdminApi / ReorderService ──▶ InvalidationBus::publish(keys)
//!                                        │ broadcast
//!                      ┌─────────────────┼─────────────────┐
//!                      ▼                 ▼                 ▼
//!                 QueryCache        UI listener        other views
//! ```
//!
//! Writers only announce which keys are stale; nothing here knows how the
//! data is fetched.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use shared::QueryKey;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default broadcast capacity
const DEFAULT_CAPACITY: usize = 256;

/// Cached reads count as fresh for five minutes
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// What made the keys stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationCause {
    /// A create/update/delete call succeeded
    Write,
    /// A reorder was persisted
    ReorderSaved,
    /// A reorder call failed; local state may disagree with the server
    ReorderFailed,
}

/// "Cache is now stale for these keys"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    pub keys: Vec<QueryKey>,
    pub cause: InvalidationCause,
}

impl Invalidation {
    pub fn new(keys: Vec<QueryKey>, cause: InvalidationCause) -> Self {
        Self { keys, cause }
    }

    /// Whether `key` is covered by this signal
    pub fn affects(&self, key: &QueryKey) -> bool {
        self.keys.iter().any(|k| k.covers(key))
    }
}

/// Broadcast channel for [`Invalidation`] signals
#[derive(Debug, Clone)]
pub struct InvalidationBus {
    tx: broadcast::Sender<Invalidation>,
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish to current subscribers; returns how many received it
    pub fn publish(&self, invalidation: Invalidation) -> usize {
        tracing::debug!(
            keys = ?invalidation.keys,
            cause = ?invalidation.cause,
            "Query keys invalidated"
        );
        // No subscriber is not an error: nobody holds stale data
        self.tx.send(invalidation).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.tx.subscribe()
    }
}

/// Fetched values keyed by [`QueryKey`], fresh for `stale_time`
#[derive(Debug)]
pub struct QueryCache<V> {
    entries: DashMap<QueryKey, (Instant, V)>,
    stale_time: Duration,
}

impl<V: Clone> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

impl<V: Clone> QueryCache<V> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            stale_time,
        }
    }

    /// Fresh value for `key`, if any
    pub fn get(&self, key: &QueryKey) -> Option<V> {
        let entry = self.entries.get(key)?;
        let (stored_at, value) = entry.value();
        (stored_at.elapsed() < self.stale_time).then(|| value.clone())
    }

    pub fn insert(&self, key: QueryKey, value: V) {
        self.entries.insert(key, (Instant::now(), value));
    }

    /// Drop every entry covered by the signal
    pub fn apply(&self, invalidation: &Invalidation) {
        self.entries.retain(|key, _| !invalidation.affects(key));
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.entries.retain(|k, _| !key.covers(k));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the fresh value or run `fetch` and store its result
    pub async fn get_or_fetch<F, Fut, E>(&self, key: QueryKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}

impl<V: Clone + Send + Sync + 'static> QueryCache<V> {
    /// Keep this cache in sync with a bus until the bus is dropped
    pub fn listen(self: &Arc<Self>, bus: &InvalidationBus) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(invalidation) => cache.apply(&invalidation),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Missed signals: everything may be stale
                        tracing::warn!(skipped, "Invalidation listener lagged, clearing cache");
                        cache.entries.clear();
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
