use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::data::TokenData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::middleware::bearer_token;
use crate::inbound::http::router::AppState;

/// Exchange the refresh token carried as `Authorization: Bearer <token>`.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let token = bearer_token(&headers)?.ok_or(AuthError::MissingToken)?;

    state
        .auth_service
        .refresh(token)
        .await
        .map_err(ApiError::from)
        .map(|tokens| ApiSuccess::new(StatusCode::OK, tokens.into()))
}
