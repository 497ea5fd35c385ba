use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::token::models::TokenStatus;
use crate::inbound::http::router::AppState;

/// Validation outcomes are answers, not failures: a malformed, tampered,
/// expired, or wrong-purpose token yields `200 { valid: false }`.
pub async fn validate_token(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequestBody>,
) -> Result<ApiSuccess<TokenStatus>, ApiError> {
    let status = state.auth_service.validate_token(&body.token).await?;

    Ok(ApiSuccess::new(StatusCode::OK, status))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateRequestBody {
    token: String,
}
