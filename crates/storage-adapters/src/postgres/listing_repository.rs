//! # PgListingRepository
//!
//! Maps the `listings` table onto the domain [`Listing`]. The database owns
//! `id` (`gen_random_uuid()`) and `created_at` (`now()`); inserts read them
//! back with `RETURNING`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use domains::errors::RepositoryError;
use domains::models::{Listing, NewListing};
use domains::ports::ListingRepository;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};
use uuid::Uuid;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    name: String,
    qty: Option<String>,
    exp: Option<NaiveDate>,
    note: Option<String>,
    contact: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            id: row.id,
            name: row.name,
            quantity: row.qty,
            expiry: row.exp,
            note: row.note,
            contact: row.contact,
            created_at: row.created_at,
        }
    }
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;
        info!(max_connections, "connected to postgres");
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations under `migrations/`.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("listing migrations applied");
        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            RepositoryError::Unavailable(err.to_string())
        }
        other => RepositoryError::Backend(other.to_string()),
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn recent(&self, limit: u32) -> Result<Vec<Listing>, RepositoryError> {
        let rows = sqlx::query_as::<_, ListingRow>(
            "SELECT id, name, qty, exp, note, contact, created_at \
             FROM listings ORDER BY created_at DESC, seq DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "fetched recent listings");
        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn insert(&self, listing: NewListing) -> Result<Listing, RepositoryError> {
        let row = sqlx::query_as::<_, ListingRow>(
            "INSERT INTO listings (name, qty, exp, note, contact) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, qty, exp, note, contact, created_at",
        )
        .bind(listing.name)
        .bind(listing.quantity)
        .bind(listing.expiry)
        .bind(listing.note)
        .bind(listing.contact)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }
}
