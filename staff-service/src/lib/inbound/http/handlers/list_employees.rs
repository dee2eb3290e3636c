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
use crate::inbound::http::router::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Query(page): Query<PageQuery>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    state
        .employee_service
        .list_employees(&subject, page.into())
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}
