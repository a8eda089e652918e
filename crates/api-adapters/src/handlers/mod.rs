//! # Handlers
//!
//! This module coordinates the flow between HTTP requests and the listing service.

pub mod listings;
pub mod ops;
pub mod pages;

use askama::Template;
use axum::response::Html;
use tracing::error;

use crate::error::ApiError;

/// Renders a template, logging the cause if rendering fails.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    template.render().map(Html).map_err(|e| {
        error!(error = %e, "template rendering failed");
        ApiError::Internal("Failed to render page".to_string())
    })
}
