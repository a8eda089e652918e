//! # api-adapters
//!
//! The web routing and orchestration layer for the food board.
//!
//! [`views`], [`metrics`] and [`state`] are framework-free; everything
//! touching axum sits behind the `web-axum` feature.

pub mod metrics;
pub mod state;
pub mod views;

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod middleware;
#[cfg(feature = "web-axum")]
pub mod router;

pub use state::AppState;

#[cfg(feature = "web-axum")]
pub use router::{build_router, RouterOptions};
