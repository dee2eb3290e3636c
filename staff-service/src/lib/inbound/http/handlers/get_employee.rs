use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::data::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_employee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id =
        EmployeeId::from_string(&employee_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .employee_service
        .get_employee(&subject, &employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
