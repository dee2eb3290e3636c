use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::data::EmployeeData;
use super::data::PageQuery;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::position::models::PositionId;
use crate::inbound::http::router::AppState;

pub async fn list_position_employees(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(position_id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    let position_id =
        PositionId::from_string(&position_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .employee_service
        .list_employees_by_position(&subject, &position_id, page.into())
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}
