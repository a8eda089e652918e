//! # Domain Errors
//!
//! Failures raised by adapters behind the domain ports.

use thiserror::Error;

/// Failure reported by a [`ListingRepository`](crate::ports::ListingRepository).
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store rejected or failed the query (e.g. constraint, decode error).
    #[error("store backend error: {0}")]
    Backend(String),

    /// The store could not be reached (e.g. pool timeout, network down).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
