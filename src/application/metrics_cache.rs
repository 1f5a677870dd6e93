// Single-slot memoization with a time-to-live
use std::future::Future;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
}

/// Holds the last successful load for `ttl` after insertion.
///
/// Loads run while the slot is locked, so concurrent callers wait for the
/// in-flight load instead of issuing their own.
pub struct TimedCache<T> {
    ttl: Duration,
    slot: Mutex<Option<CacheEntry<T>>>,
}

impl<T: Clone> TimedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value or run `loader` and store its result.
    /// Failed loads leave the slot empty.
    pub async fn get_or_try_load<F, Fut, E>(&self, loader: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            let age = entry.inserted_at.elapsed();
            if age < self.ttl {
                tracing::debug!("cache hit (age {:?})", age);
                return Ok(entry.value.clone());
            }
            tracing::debug!("cache entry expired after {:?}", age);
        } else {
            tracing::debug!("cache miss");
        }

        *slot = None;
        let value = loader().await?;
        *slot = Some(CacheEntry {
            value: value.clone(),
            inserted_at: Instant::now(),
        });
        Ok(value)
    }
}
