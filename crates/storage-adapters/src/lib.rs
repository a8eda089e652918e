//! # storage-adapters
//!
//! Implementations of the `domains` persistence ports.
//!
//! - [`memory::InMemoryListingRepository`]: always compiled, no external services.
//! - `postgres::PgListingRepository`: behind the `db-postgres` feature.

pub mod memory;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use memory::InMemoryListingRepository;

#[cfg(feature = "db-postgres")]
pub use postgres::PgListingRepository;
