use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::data::IdentityData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn current_identity(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
) -> Result<ApiSuccess<IdentityData>, ApiError> {
    state
        .auth_service
        .current_identity(&subject)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
