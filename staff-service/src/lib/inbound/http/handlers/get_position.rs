use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::data::PositionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::position::models::PositionId;
use crate::domain::position::ports::PositionServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_position(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(position_id): Path<String>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let position_id =
        PositionId::from_string(&position_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .position_service
        .get_position(&subject, &position_id)
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::OK, position.into()))
}
