//! # ApiError
//!
//! Maps service failures onto HTTP responses with a JSON `{"error": ...}` body.
//! Validation problems keep their specific message; backend problems only
//! ever expose the generic one.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use services::ServiceError;
use thiserror::Error;
use tracing::debug;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const JSON_CONTENT_TYPE_MESSAGE: &str = "Content-Type must be application/json";

#[derive(Error, Debug)]
pub enum ApiError {
    /// User input problem (400).
    #[error("{0}")]
    BadRequest(String),

    /// Store, network or rendering failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_validation() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(%rejection, "rejected json body");
        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => JSON_CONTENT_TYPE_MESSAGE,
            _ => INVALID_BODY_MESSAGE,
        };
        ApiError::BadRequest(message.to_string())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        debug!(%rejection, "rejected form body");
        ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        (status, Json(ErrorBody { error: &message })).into_response()
    }
}
