//! JSON operations under `/api/listings`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use domains::models::{Listing, ListingSubmission};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of a successful `POST /api/listings`.
#[derive(Debug, Serialize)]
pub struct CreatedListing {
    pub success: bool,
    pub data: Listing,
}

/// `GET /api/listings`: the most recent listings, newest first.
pub async fn list_listings(State(state): State<AppState>) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = state.recent_listings().await?;
    Ok(Json(listings))
}

/// `POST /api/listings`: validates and stores a listing.
pub async fn create_listing(
    State(state): State<AppState>,
    payload: Result<Json<ListingSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedListing>), ApiError> {
    let Json(submission) = payload?;
    let listing = state.submit_listing(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedListing {
            success: true,
            data: listing,
        }),
    ))
}
