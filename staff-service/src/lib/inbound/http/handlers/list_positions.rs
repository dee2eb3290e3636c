use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::data::PageQuery;
use super::data::PositionData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::position::ports::PositionServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_positions(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Query(page): Query<PageQuery>,
) -> Result<ApiSuccess<Vec<PositionData>>, ApiError> {
    state
        .position_service
        .list_positions(&subject, page.into())
        .await
        .map_err(ApiError::from)
        .map(|positions| {
            ApiSuccess::new(
                StatusCode::OK,
                positions.iter().map(PositionData::from).collect(),
            )
        })
}
