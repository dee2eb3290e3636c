use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_employee::EmployeeRequest;
use super::data::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(employee_id): Path<String>,
    Json(body): Json<EmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id =
        EmployeeId::from_string(&employee_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let (first_name, last_name, position_id) = body.try_into_parts()?;

    state
        .employee_service
        .update_employee(
            &subject,
            UpdateEmployeeCommand::new(employee_id, first_name, last_name, position_id),
        )
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
