//! # food-board binary
//!
//! Loads settings, installs logging, picks the listing store and serves the
//! board until Ctrl-C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{build_router, AppState, RouterOptions};
use configs::{DatabaseSettings, HttpSettings, LogFormat, LogSettings, Settings};
use domains::ports::ListingRepository;
use services::ListingService;
use storage_adapters::InMemoryListingRepository;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "db-postgres")]
use secrecy::ExposeSecret;
#[cfg(feature = "db-postgres")]
use storage_adapters::PgListingRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings.log);

    let repo = build_repository(&settings.database).await?;
    let state = AppState::new(ListingService::new(repo));
    let app = build_router(state, &router_options(&settings.http));

    let address = settings.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "food-board listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("food-board stopped");
    Ok(())
}

/// `RUST_LOG` wins over `log.filter` when set.
fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn router_options(http: &HttpSettings) -> RouterOptions {
    RouterOptions {
        body_limit_bytes: http.body_limit_bytes,
        cors_allow_any_origin: http.cors_allow_any_origin,
    }
}

async fn build_repository(database: &DatabaseSettings) -> anyhow::Result<Arc<dyn ListingRepository>> {
    match &database.url {
        #[cfg(feature = "db-postgres")]
        Some(url) => {
            let repo = PgListingRepository::connect(url.expose_secret(), database.max_connections)
                .await
                .context("failed to connect to postgres")?;
            if database.run_migrations {
                repo.migrate().await.context("failed to run migrations")?;
            }
            Ok(Arc::new(repo))
        }
        #[cfg(not(feature = "db-postgres"))]
        Some(_) => anyhow::bail!("database.url is set but this build lacks the db-postgres feature"),
        None => {
            warn!("no database url configured, listings are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryListingRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
