//! State shared by every request handler.

use std::sync::Arc;

use domains::models::{Listing, ListingSubmission};
use services::{ListingService, ServiceError};

use crate::metrics::{FetchOutcome, Metrics, SubmissionOutcome};

#[derive(Clone)]
pub struct AppState {
    pub listings: ListingService,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(listings: ListingService) -> Self {
        Self {
            listings,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// [`ListingService::recent`], counted in the fetch metrics.
    pub async fn recent_listings(&self) -> Result<Vec<Listing>, ServiceError> {
        let result = self.listings.recent().await;
        self.metrics.record_fetch(match &result {
            Ok(_) => FetchOutcome::Ok,
            Err(_) => FetchOutcome::Failed,
        });
        result
    }

    /// [`ListingService::submit`], counted in the submission metrics.
    pub async fn submit_listing(
        &self,
        submission: ListingSubmission,
    ) -> Result<Listing, ServiceError> {
        let result = self.listings.submit(submission).await;
        self.metrics.record_submission(match &result {
            Ok(_) => SubmissionOutcome::Created,
            Err(e) if e.is_validation() => SubmissionOutcome::Rejected,
            Err(_) => SubmissionOutcome::Failed,
        });
        result
    }
}
