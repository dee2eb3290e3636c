use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfoData {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthData {
    pub status: &'static str,
}

pub async fn service_info() -> ApiSuccess<ServiceInfoData> {
    ApiSuccess::new(
        StatusCode::OK,
        ServiceInfoData {
            service: "staff-service",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

pub async fn health() -> ApiSuccess<HealthData> {
    ApiSuccess::new(StatusCode::OK, HealthData { status: "healthy" })
}
