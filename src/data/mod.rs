//! Core types for sub-breed lookups
//!
//! This module contains the error type and the provider trait shared by
//! the dog.ceo API client and the caching layer.

pub mod dog_api;

pub use dog_api::DogApiClient;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Error returned when no sub-breed data is available for a breed
///
/// Providers collapse every internal failure mode (unknown breed, transport
/// problems, malformed responses) into this single kind before it reaches
/// their caller. The optional reason explains what went wrong upstream.
#[derive(Debug, Clone, Error)]
pub struct BreedNotFoundError {
    /// The breed the failed lookup was for
    breed: String,
    /// Human-readable explanation of the failure, if one is available
    reason: Option<String>,
}

impl BreedNotFoundError {
    /// Creates an error for the given breed with no further explanation
    #[allow(dead_code)]
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            reason: None,
        }
    }

    /// Creates an error carrying an explanation of the failure
    pub fn with_reason(breed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            reason: Some(reason.into()),
        }
    }

    /// The breed the failed lookup was for
    #[allow(dead_code)]
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// The explanation attached to the failure, if any
    #[allow(dead_code)]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for BreedNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no sub-breed data for breed '{}'", self.breed)?;
        if let Some(reason) = &self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}

/// Capability interface for sub-breed lookups
///
/// Implementations resolve a breed name to the ordered list of its
/// sub-breed names, reporting every failure as [`BreedNotFoundError`].
/// The caching layer both consumes and implements this trait, so
/// providers can be stacked.
///
/// Breed names are passed through as given; normalization (case folding,
/// trimming) is the caller's responsibility.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Looks up the sub-breeds of `breed`
    ///
    /// Returns the sub-breed names in the order the underlying source
    /// reports them. An empty list is a valid result for breeds without
    /// sub-breeds and is distinct from a failed lookup.
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError>;
}
