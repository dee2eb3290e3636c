use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::data::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::position::models::PositionId;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Json(body): Json<EmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let (first_name, last_name, position_id) = body.try_into_parts()?;

    state
        .employee_service
        .create_employee(
            &subject,
            CreateEmployeeCommand::new(first_name, last_name, position_id),
        )
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

/// HTTP request body for creating or replacing an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeRequest {
    first_name: String,
    last_name: String,
    position_id: String,
}

impl EmployeeRequest {
    pub(super) fn try_into_parts(
        self,
    ) -> Result<(PersonName, PersonName, PositionId), EmployeeError> {
        let first_name = PersonName::new(self.first_name)?;
        let last_name = PersonName::new(self.last_name)?;
        let position_id = PositionId::from_string(&self.position_id)?;
        Ok((first_name, last_name, position_id))
    }
}
