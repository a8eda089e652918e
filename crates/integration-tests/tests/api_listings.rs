//! JSON API under `/api/listings`.

mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use domains::errors::RepositoryError;
use domains::ports::MockListingRepository;
use serde_json::json;
use support::{app, app_with, body_json, get, post_json, send};

#[tokio::test]
async fn empty_board_returns_an_empty_array() {
    let app = app();
    let response = send(&app, get("/api/listings")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn created_listing_is_returned_then_listed() {
    let app = app();

    let response = send(
        &app,
        post_json("/api/listings", &json!({ "name": " Milk ", "qty": "1L", "exp": "2025-01-15" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["name"], "Milk");
    assert_eq!(created["data"]["qty"], "1L");
    assert_eq!(created["data"]["exp"], "2025-01-15");
    assert!(created["data"]["note"].is_null());
    assert!(created["data"]["id"].is_string());
    assert!(created["data"]["created_at"].is_string());

    let listed = body_json(send(&app, get("/api/listings")).await).await;
    assert_eq!(listed[0], created["data"]);
}

#[tokio::test]
async fn listings_are_newest_first() {
    let app = app();
    for name in ["Milk", "Bread", "Eggs"] {
        let response = send(&app, post_json("/api/listings", &json!({ "name": name }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = body_json(send(&app, get("/api/listings")).await).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Eggs", "Bread", "Milk"]);
}

#[tokio::test]
async fn never_returns_more_than_twenty() {
    let app = app();
    for i in 0..25 {
        send(&app, post_json("/api/listings", &json!({ "name": format!("item {i}") }))).await;
    }

    let listed = body_json(send(&app, get("/api/listings")).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[0]["name"], "item 24");
    assert_eq!(listed[19]["name"], "item 5");
}

#[tokio::test]
async fn validation_failures_are_400_with_specific_messages() {
    let app = app();
    let cases = [
        (json!({ "name": "a".repeat(51) }), "Name must be 50 characters or fewer"),
        (json!({ "name": "   " }), "Name is required"),
        (json!({ "qty": "1L" }), "Name is required"),
        (
            json!({ "name": "Milk", "note": "n".repeat(141) }),
            "Note must be 140 characters or fewer",
        ),
        (
            json!({ "name": "Milk", "contact": "http://spam.example" }),
            "Inappropriate content detected",
        ),
        (
            json!({ "name": "Milk", "note": "see www.example.com" }),
            "Inappropriate content detected",
        ),
        (
            json!({ "name": "Milk", "exp": "next week" }),
            "Expiry must be a date in YYYY-MM-DD format",
        ),
    ];

    for (body, message) in cases {
        let response = send(&app, post_json("/api/listings", &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await, json!({ "error": message }));
    }

    let listed = body_json(send(&app, get("/api/listings")).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/listings")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn body_without_json_content_type_is_400() {
    let app = app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/listings")
        .body(axum::body::Body::from(r#"{"name":"Milk"}"#))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Content-Type must be application/json" })
    );

    let listed = body_json(send(&app, get("/api/listings")).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn store_failures_are_generic_500s() {
    let mut repo = MockListingRepository::new();
    repo.expect_recent()
        .returning(|_| Err(RepositoryError::Unavailable("connection refused".into())));
    repo.expect_insert()
        .returning(|_| Err(RepositoryError::Backend("disk full".into())));
    let app = app_with(Arc::new(repo));

    let response = send(&app, get("/api/listings")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Failed to fetch listings" }));

    let response = send(&app, post_json("/api/listings", &json!({ "name": "Milk" }))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Failed to save listing" }));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app();
    let response = send(&app, get("/api/listings")).await;

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}
