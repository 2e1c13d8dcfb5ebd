//! Syrano API server.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use syrano::adapters::ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
use syrano::adapters::http::{api_router, AppState, RouterOptions};
use syrano::adapters::ocr::{MockOcrProvider, NaverOcrConfig, NaverOcrProvider};
use syrano::adapters::postgres::{
    PostgresMessageHistoryRepository, PostgresProfileRepository, PostgresSubscriptionRepository,
    PostgresUserRepository,
};
use syrano::application::handlers::GenerationSettings;
use syrano::config::{AiConfig, AiProvider, AppConfig, OcrConfig, OcrProviderKind};
use syrano::ports::{AIProvider, OcrProvider};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        ai_provider = ?config.ai.provider,
        ocr_provider = ?config.ocr.provider,
        "Starting Syrano"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        history: Arc::new(PostgresMessageHistoryRepository::new(pool)),
        ai_provider: build_ai_provider(&config.ai)?,
        ocr_provider: build_ocr_provider(&config.ocr)?,
        generation: GenerationSettings {
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
        },
        max_image_bytes: config.ocr.max_image_bytes,
    };

    let mut cors_origins = config.server.cors_origins_list();
    if cors_origins.is_empty() && !config.is_production() {
        cors_origins.push("*".to_string());
    }
    let app = api_router(
        state,
        RouterOptions {
            cors_origins,
            request_timeout: config.server.request_timeout(),
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let format = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().compact().boxed()
    };

    tracing_subscriber::registry().with(format).with(filter).init();
}

fn build_ai_provider(settings: &AiConfig) -> Result<Arc<dyn AIProvider>, BoxError> {
    Ok(match settings.provider {
        AiProvider::OpenAI => Arc::new(OpenAIProvider::new(OpenAIConfig::from_settings(
            settings,
        )?)?),
        AiProvider::Mock => {
            tracing::warn!("Using mock AI provider");
            Arc::new(MockAIProvider::new())
        }
    })
}

fn build_ocr_provider(settings: &OcrConfig) -> Result<Arc<dyn OcrProvider>, BoxError> {
    Ok(match settings.provider {
        OcrProviderKind::Naver => Arc::new(NaverOcrProvider::new(NaverOcrConfig::from_settings(
            settings,
        )?)?),
        OcrProviderKind::Mock => {
            tracing::warn!("Using mock OCR provider");
            let mut provider = MockOcrProvider::new();
            if let Some(text) = &settings.mock_text {
                provider = provider.with_fallback(text.clone());
            }
            Arc::new(provider)
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Received shutdown signal");
}
