//! Worldbuilder Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldbuilder_engine::api;
use worldbuilder_engine::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    password::Argon2PasswordHasher,
    ports::ClockPort,
    sqlite::{self, SqliteRepositories},
    token::JwtTokenIssuer,
};
use worldbuilder_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldbuilder_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Worldbuilder Engine");

    // Load configuration
    let config = EngineConfig::from_env()?;

    // Connect to SQLite
    tracing::info!(
        url = %config.database.url,
        max_connections = config.database.max_connections,
        "Connecting to SQLite"
    );
    let pool = sqlite::connect(&config.database).await?;

    // Ensure database schema (tables, constraints and indexes)
    sqlite::ensure_schema(&pool).await?;

    let repos = SqliteRepositories::new(pool);

    // Credentials
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let hasher = Arc::new(Argon2PasswordHasher::new()?);
    let tokens = Arc::new(JwtTokenIssuer::new(&config.signing_key, clock));

    // Create application
    let app = Arc::new(App::new(repos, hasher, tokens));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        // Bearer tokens and JSON bodies both trigger preflights.
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
