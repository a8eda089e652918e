//! # Ports
//!
//! Any storage adapter must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::errors::RepositoryError;
use crate::models::{Listing, NewListing};

/// Persistence contract for listings.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Returns at most `limit` listings, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<Listing>, RepositoryError>;

    /// Stores a listing; the store assigns `id` and `created_at`.
    async fn insert(&self, listing: NewListing) -> Result<Listing, RepositoryError>;
}
