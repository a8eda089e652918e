//! # In-memory listing store
//!
//! Process-local implementation of [`ListingRepository`] used when no
//! database URL is configured, and by the router tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use domains::errors::RepositoryError;
use domains::models::{Listing, NewListing};
use domains::ports::ListingRepository;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryListingRepository {
    /// Listing plus its insertion sequence; sequence order is creation order.
    listings: DashMap<Uuid, (u64, Listing)>,
    next_seq: AtomicU64,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn recent(&self, limit: u32) -> Result<Vec<Listing>, RepositoryError> {
        let mut rows: Vec<(u64, Listing)> = self
            .listings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        rows.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));

        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|(_, listing)| listing)
            .collect())
    }

    async fn insert(&self, listing: NewListing) -> Result<Listing, RepositoryError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let stored = Listing {
            id: Uuid::now_v7(),
            name: listing.name,
            quantity: listing.quantity,
            expiry: listing.expiry,
            note: listing.note,
            contact: listing.contact,
            created_at: Utc::now(),
        };
        self.listings.insert(stored.id, (seq, stored.clone()));
        Ok(stored)
    }
}
