//! food-board/crates/services/src/lib.rs
//!
//! Application logic: submission rules and the listing service.

pub mod error;
pub mod listing_service;
pub mod validation;

pub use error::ServiceError;
pub use listing_service::{ListingService, RECENT_LISTINGS_LIMIT};
pub use validation::{ValidationError, NAME_MAX_CHARS, NOTE_MAX_CHARS};
