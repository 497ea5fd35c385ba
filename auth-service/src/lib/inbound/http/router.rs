use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::refresh_token::refresh_token;
use super::handlers::validate_token::validate_token;
use crate::domain::auth::service::AuthService;
use crate::outbound::directory::HttpUserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<HttpUserDirectory>>,
}

pub fn create_router(auth_service: Arc<AuthService<HttpUserDirectory>>) -> Router {
    let state = AppState { auth_service };

    let auth_routes = Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/validate", post(validate_token))
        .route("/api/v1/auth/refresh", post(refresh_token));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .route("/health", get(health))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
