//! In-memory caching layer for breed providers
//!
//! This module provides a memoizing wrapper around any `BreedProvider` so
//! repeated lookups for the same breed are served without another upstream
//! call. Failed lookups are never cached, and the number of upstream calls
//! is recorded for inspection.

mod provider;

pub use provider::BreedCache;
