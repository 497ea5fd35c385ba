use std::sync::Arc;
use std::time::Duration;

use auth_service::config::Config;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::token::service::TokenService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::directory::HttpUserDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing secret is deliberately absent from this log line
    tracing::info!(
        http_port = config.server.http_port,
        directory_base_url = %config.directory.base_url,
        directory_timeout_seconds = config.directory.timeout_seconds,
        access_expiration_hours = config.jwt.access_expiration_hours,
        refresh_expiration_hours = config.jwt.refresh_expiration_hours,
        "Configuration loaded"
    );

    let directory = Arc::new(HttpUserDirectory::new(
        &config.directory.base_url,
        Duration::from_secs(config.directory.timeout_seconds),
    )?);

    let token_service = TokenService::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.access_expiration_hours),
        chrono::Duration::hours(config.jwt.refresh_expiration_hours),
    );

    let auth_service = Arc::new(AuthService::new(directory, token_service));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service);
    axum::serve(http_listener, application).await?;

    Ok(())
}
