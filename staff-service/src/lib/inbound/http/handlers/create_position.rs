use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::data::PositionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::position::errors::PositionError;
use crate::domain::position::models::CreatePositionCommand;
use crate::domain::position::models::PositionDescription;
use crate::domain::position::models::PositionName;
use crate::domain::position::ports::PositionServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_position(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Json(body): Json<PositionRequest>,
) -> Result<ApiSuccess<PositionData>, ApiError> {
    let (name, description) = body.try_into_parts()?;

    state
        .position_service
        .create_position(&subject, CreatePositionCommand::new(name, description))
        .await
        .map_err(ApiError::from)
        .map(|ref position| ApiSuccess::new(StatusCode::CREATED, position.into()))
}

/// HTTP request body for creating or replacing a position (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl PositionRequest {
    pub(super) fn try_into_parts(
        self,
    ) -> Result<(PositionName, Option<PositionDescription>), PositionError> {
        let name = PositionName::new(self.name)?;
        let description = self
            .description
            .map(PositionDescription::new)
            .transpose()?;
        Ok((name, description))
    }
}
