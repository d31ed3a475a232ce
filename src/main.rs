//! Icebreaker HTTP server.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use icebreaker::adapters::ai::{OpenAIConfig, OpenAIProvider};
use icebreaker::adapters::auth::{JwtConfig, JwtSessionValidator};
use icebreaker::adapters::http::{build_router, AppDependencies};
use icebreaker::adapters::postgres::{PostgresProfileRepository, PostgresSavedResponseRepository};
use icebreaker::config::AppConfig;
use icebreaker::domain::questions::QuestionCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        model = %config.ai.model,
        "Starting icebreaker"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let ai_provider = OpenAIProvider::new(
        OpenAIConfig::from_secret(config.ai.openai_api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;

    let mut jwt = JwtConfig::new(config.auth.jwt_secret.clone(), config.auth.audience.clone());
    if let Some(issuer) = &config.auth.issuer {
        jwt = jwt.with_issuer(issuer.clone());
    }

    let deps = AppDependencies {
        ai_provider: Arc::new(ai_provider),
        profile_repository: Arc::new(PostgresProfileRepository::new(pool.clone())),
        saved_response_repository: Arc::new(PostgresSavedResponseRepository::new(pool)),
        session_validator: Arc::new(JwtSessionValidator::new(jwt)),
        catalog: Arc::new(QuestionCatalog::standard().clone()),
    };

    let app = build_router(deps, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        let _ = registry.with(fmt::layer().json()).try_init();
    } else {
        let _ = registry.with(fmt::layer()).try_init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
