//! # ListingService
//!
//! Coordinates the two board operations against the repository port.

use std::sync::Arc;

use domains::models::{Listing, ListingSubmission};
use domains::ports::ListingRepository;
use tracing::{error, info, instrument, warn};

use crate::error::ServiceError;
use crate::validation;

/// Number of listings the board shows.
pub const RECENT_LISTINGS_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct ListingService {
    repo: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(repo: Arc<dyn ListingRepository>) -> Self {
        Self { repo }
    }

    /// The newest listings, newest first, never more than
    /// [`RECENT_LISTINGS_LIMIT`].
    #[instrument(skip(self))]
    pub async fn recent(&self) -> Result<Vec<Listing>, ServiceError> {
        let mut listings = self
            .repo
            .recent(RECENT_LISTINGS_LIMIT)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to fetch listings");
                ServiceError::Retrieval(e)
            })?;

        // The board never shows more than the limit, whatever the adapter returns.
        listings.truncate(RECENT_LISTINGS_LIMIT as usize);
        Ok(listings)
    }

    /// Validates, normalizes and stores a submission.
    #[instrument(skip_all)]
    pub async fn submit(&self, submission: ListingSubmission) -> Result<Listing, ServiceError> {
        let new_listing = validation::validate(&submission).map_err(|reason| {
            warn!(%reason, "listing rejected");
            reason
        })?;

        let listing = self.repo.insert(new_listing).await.map_err(|e| {
            error!(error = %e, "failed to save listing");
            ServiceError::Save(e)
        })?;

        info!(listing_id = %listing.id, "listing created");
        Ok(listing)
    }
}
