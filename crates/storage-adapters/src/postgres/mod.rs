//! PostgreSQL adapters (feature `db-postgres`).

mod listing_repository;

pub use listing_repository::PgListingRepository;
