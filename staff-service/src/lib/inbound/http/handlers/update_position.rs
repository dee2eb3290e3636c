use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_position::PositionRequest;
use super::data::PositionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::position::models::PositionId;
use crate::domain::position::models::UpdatePositionCommand;
use crate::domain::position::ports::PositionServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_position(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(position_id): Path<String>,
    Json(body): Json<PositionRequest>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let position_id =
        PositionId::from_string(&position_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let (name, description) = body.try_into_parts()?;

    state
        .position_service
        .update_position(
            &subject,
            UpdatePositionCommand::new(position_id, name, description),
        )
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::OK, position.into()))
}
