//! Server-rendered pages: landing, submission form and board.

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use domains::models::ListingSubmission;

use super::render;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{BoardTemplate, FormPrefill, FormValues, HomeTemplate, ListFormTemplate};

/// `GET /`
pub async fn home() -> Result<Response, ApiError> {
    Ok(render(&HomeTemplate::default())?.into_response())
}

/// `GET /list`: the form, pre-filled from `name`, `qty` and `exp`.
pub async fn list_form(Query(prefill): Query<FormPrefill>) -> Result<Response, ApiError> {
    let template = ListFormTemplate::new(FormValues::from(prefill), None);
    Ok(render(&template)?.into_response())
}

/// `POST /list`: on success redirects to the board, otherwise shows the
/// form again with the message and what the user typed.
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<ListingSubmission>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(submission) = form?;
    let values = FormValues::from(&submission);

    match state.submit_listing(submission).await {
        Ok(_) => Ok(Redirect::to("/board").into_response()),
        Err(err) => {
            let err = ApiError::from(err);
            let page = render(&ListFormTemplate::new(values, Some(err.to_string())))?;
            Ok((err.status(), page).into_response())
        }
    }
}

/// `GET /board`: the most recent listings as cards.
pub async fn board(State(state): State<AppState>) -> Result<Response, ApiError> {
    match state.recent_listings().await {
        Ok(listings) => Ok(render(&BoardTemplate::with_listings(&listings))?.into_response()),
        Err(err) => {
            let page = render(&BoardTemplate::with_error(err.to_string()))?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}
