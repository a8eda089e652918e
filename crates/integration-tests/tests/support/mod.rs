//! Shared helpers for the router tests.

#![allow(dead_code)]

use std::sync::Arc;

use api_adapters::{build_router, AppState, RouterOptions};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use domains::ports::ListingRepository;
use serde_json::Value;
use services::ListingService;
use storage_adapters::InMemoryListingRepository;
use tower::ServiceExt;

pub fn app() -> Router {
    app_with(Arc::new(InMemoryListingRepository::new()))
}

pub fn app_with(repo: Arc<dyn ListingRepository>) -> Router {
    let state = AppState::new(ListingService::new(repo));
    build_router(state, &RouterOptions::default())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
