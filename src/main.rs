//! Server entrypoint: configuration, database pool, adapter wiring.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use psyche_backend::adapters::google::GoogleIdentityVerifier;
use psyche_backend::adapters::http::{app_router, cors_layer, AppState};
use psyche_backend::adapters::postgres::{
    PostgresCatalogReader, PostgresInboxWriter, PostgresInviteRepository,
    PostgresPurchaseRepository, PostgresSessionRepository, PostgresUserRepository,
};
use psyche_backend::config::AppConfig;
use psyche_backend::domain::payment::StripeWebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "starting psyche backend"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running pending migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
        purchases: Arc::new(PostgresPurchaseRepository::new(pool.clone())),
        catalog: Arc::new(PostgresCatalogReader::new(pool.clone())),
        inbox: Arc::new(PostgresInboxWriter::new(pool.clone())),
        invites: Arc::new(PostgresInviteRepository::new(pool)),
        identity: Arc::new(GoogleIdentityVerifier::new(
            config.auth.google_client_id.clone(),
        )?),
        webhook_verifier: Arc::new(StripeWebhookVerifier::new(
            config.payment.stripe_webhook_secret.clone(),
        )),
    };

    let cors = cors_layer(&config.server.cors_origins_list());
    let app = app_router(state, cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
