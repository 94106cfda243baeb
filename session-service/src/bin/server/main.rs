use std::sync::Arc;

use auth::JwtHandler;
use chrono::Duration;
use session_service::config::Config;
use session_service::domain::session::service::AuthService;
use session_service::domain::token::service::TokenService;
use session_service::inbound::http::router::create_router;
use session_service::outbound::repositories::PostgresUserRepository;
use session_service::outbound::stores::RedisTokenStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "session-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        redis_url = %config.redis.url,
        access_ttl_secs = config.jwt.access_ttl_secs,
        refresh_ttl_secs = config.jwt.refresh_ttl_secs,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let redis_client = redis::Client::open(config.redis.url.as_str())?;

    let access_handler = Arc::new(JwtHandler::new(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.access_ttl_secs),
    ));
    let refresh_handler = Arc::new(JwtHandler::new(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.refresh_ttl_secs),
    ));

    let access_store = Arc::new(RedisTokenStore::new(
        redis_client.clone(),
        "access",
        config.jwt.access_ttl_secs as u64,
    ));
    let refresh_store = Arc::new(RedisTokenStore::new(
        redis_client,
        "refresh",
        config.jwt.refresh_ttl_secs as u64,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        TokenService::new(access_handler, access_store),
        TokenService::new(refresh_handler, refresh_store),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
