//! Memoizing provider wrapper
//!
//! `BreedCache` decorates a `BreedProvider` with an in-memory table of
//! successful lookups and a counter of delegate invocations.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::data::{BreedNotFoundError, BreedProvider};

/// Mutable cache state: the memoization table and the delegate-call counter
///
/// One lock guards both, so a hit check and the write that may follow it
/// observe a consistent table.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, Vec<String>>,
    calls_made: u64,
}

/// Caching wrapper around a breed provider
///
/// Successful lookups are memoized per breed name (exactly as given, no
/// normalization) and served from the table on later calls without touching
/// the delegate. Entries never expire and are never updated. A failed
/// lookup leaves no entry behind, so retrying the same breed goes back to
/// the delegate.
///
/// Lookups hand out owned copies of the stored list; callers may mutate
/// what they receive without affecting the cache.
#[derive(Debug)]
pub struct BreedCache<P> {
    provider: P,
    state: Mutex<CacheState>,
}

impl<P> BreedCache<P> {
    /// Creates a cache with an empty table and a zero counter wrapped
    /// around `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Number of delegate invocations made so far
    ///
    /// Counts every cache miss that reached the delegate, whether the
    /// lookup succeeded or failed. Cache hits never count.
    pub fn calls_made(&self) -> u64 {
        self.lock_state().calls_made
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        // Only plain map and counter updates happen under the lock, so a
        // poisoned guard still holds consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<P: BreedProvider> BreedProvider for BreedCache<P> {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError> {
        {
            let mut state = self.lock_state();
            if let Some(cached) = state.entries.get(breed) {
                return Ok(cached.clone());
            }
            // Miss: the attempt counts even if the delegate fails below.
            state.calls_made += 1;
        }

        // Lock released before awaiting; failures propagate uncached.
        let sub_breeds = self.provider.sub_breeds(breed).await?;

        let mut state = self.lock_state();
        state
            .entries
            .entry(breed.to_string())
            .or_insert_with(|| sub_breeds.clone());
        Ok(sub_breeds)
    }
}
