//! Route table for the board.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::{listings, ops, pages};
use crate::middleware::{cors_policy, standard_middleware};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    pub cors_allow_any_origin: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            body_limit_bytes: 16 * 1024,
            cors_allow_any_origin: true,
        }
    }
}

/// Builds the full application: JSON API, HTML pages and ops endpoints.
pub fn build_router(state: AppState, options: &RouterOptions) -> Router {
    let api = Router::new().route(
        "/api/listings",
        get(listings::list_listings).post(listings::create_listing),
    );

    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/list", get(pages::list_form).post(pages::submit_form))
        .route("/board", get(pages::board));

    let ops = Router::new()
        .route("/healthz", get(ops::health))
        .route("/metrics", get(ops::metrics));

    let mut router = api
        .merge(pages)
        .merge(ops)
        .layer(DefaultBodyLimit::max(options.body_limit_bytes))
        .with_state(state);

    if options.cors_allow_any_origin {
        router = router.layer(cors_policy());
    }

    standard_middleware(router)
}
