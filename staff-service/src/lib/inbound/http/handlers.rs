use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::errors::ErrorKind;
use crate::domain::position::errors::PositionError;

pub mod create_employee;
pub mod create_position;
pub mod current_identity;
pub mod data;
pub mod delete_employee;
pub mod delete_position;
pub mod get_employee;
pub mod get_position;
pub mod health;
pub mod list_employees;
pub mod list_position_employees;
pub mod list_positions;
pub mod login;
pub mod refresh;
pub mod register;
pub mod update_employee;
pub mod update_position;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Forbidden(String),
    /// 401 with a machine-readable reason (`missing`, `expired`, `invalid_credentials`, ...)
    Unauthorized {
        reason: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Pick the response for a classified domain error.
    pub fn from_kind(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::Validation => ApiError::UnprocessableEntity(message),
            ErrorKind::Conflict => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::InvalidCredentials => ApiError::Unauthorized {
                reason: "invalid_credentials",
                message,
            },
            ErrorKind::Inactive => ApiError::Forbidden(message),
            ErrorKind::TokenRejected(reason) => ApiError::Unauthorized { reason, message },
            ErrorKind::StorageUnavailable => ApiError::ServiceUnavailable(message),
            ErrorKind::Internal => ApiError::InternalServerError(message),
        }
    }

    fn challenge(reason: &str) -> HeaderValue {
        match reason {
            "missing" | "invalid_credentials" => HeaderValue::from_static("Bearer"),
            other => HeaderValue::from_str(&format!(
                "Bearer error=\"invalid_token\", error_description=\"{}\"",
                other
            ))
            .unwrap_or_else(|_| HeaderValue::from_static("Bearer error=\"invalid_token\"")),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, reason) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                    None,
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            ApiError::Unauthorized { reason, message } => {
                let body = ApiResponseBody::new_error(
                    StatusCode::UNAUTHORIZED,
                    message,
                    Some(reason),
                );
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, Self::challenge(reason))],
                    Json(body),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, message, reason)),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::from_kind(err.kind(), err.to_string())
    }
}

impl From<PositionError> for ApiError {
    fn from(err: PositionError) -> Self {
        Self::from_kind(err.kind(), err.to_string())
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        Self::from_kind(err.kind(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String, reason: Option<&'static str>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message, reason },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use auth::TokenRejection;

    use super::*;
    use crate::domain::position::models::PositionId;

    #[test]
    fn test_kinds_map_to_statuses() {
        let cases = [
            (ErrorKind::Validation, StatusCode::UNPROCESSABLE_ENTITY),
            (ErrorKind::Conflict, StatusCode::CONFLICT),
            (ErrorKind::NotFound, StatusCode::NOT_FOUND),
            (ErrorKind::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ErrorKind::Inactive, StatusCode::FORBIDDEN),
            (ErrorKind::TokenRejected("expired"), StatusCode::UNAUTHORIZED),
            (ErrorKind::StorageUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (ErrorKind::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (kind, status) in cases {
            let response = ApiError::from_kind(kind, "x".to_string()).into_response();
            assert_eq!(response.status(), status, "{kind:?}");
        }
    }

    #[test]
    fn test_token_rejection_sets_challenge() {
        let response = ApiError::from(AuthError::Token(TokenRejection::Expired)).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(challenge.contains("error=\"invalid_token\""));
        assert!(challenge.contains("expired"));
    }

    #[test]
    fn test_missing_token_challenge_is_bare() {
        let response = ApiError::from(AuthError::MissingToken).into_response();

        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_domain_errors_convert() {
        let id = PositionId::new();
        assert!(matches!(
            ApiError::from(PositionError::InUse(id)),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(EmployeeError::PositionNotFound(id)),
            ApiError::NotFound(_)
        ));
    }
}
