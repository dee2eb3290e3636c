use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_employee::create_employee;
use super::handlers::create_position::create_position;
use super::handlers::current_identity::current_identity;
use super::handlers::delete_employee::delete_employee;
use super::handlers::delete_position::delete_position;
use super::handlers::get_employee::get_employee;
use super::handlers::get_position::get_position;
use super::handlers::health::health;
use super::handlers::health::service_info;
use super::handlers::list_employees::list_employees;
use super::handlers::list_position_employees::list_position_employees;
use super::handlers::list_positions::list_positions;
use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::update_employee::update_employee;
use super::handlers::update_position::update_position;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::guard::AccessGuard;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::position::ports::PositionServicePort;

/// Shared handler state.
///
/// Services sit behind trait objects so the same router serves both the
/// PostgreSQL and the in-memory wiring.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub position_service: Arc<dyn PositionServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub access_guard: Arc<AccessGuard>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    position_service: Arc<dyn PositionServicePort>,
    employee_service: Arc<dyn EmployeeServicePort>,
    access_guard: Arc<AccessGuard>,
) -> Router {
    let state = AppState {
        auth_service,
        position_service,
        employee_service,
        access_guard,
    };

    // Refresh reads its own (refresh-class) bearer token, so it sits outside the guard.
    let public_routes = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_identity))
        .route("/api/positions", get(list_positions).post(create_position))
        .route(
            "/api/positions/:position_id",
            get(get_position)
                .put(update_position)
                .delete(delete_position),
        )
        .route(
            "/api/positions/:position_id/employees",
            get(list_position_employees),
        )
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/:employee_id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::debug!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
