use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use staff_service::config::Config;
use staff_service::domain::auth::guard::AccessGuard;
use staff_service::domain::auth::service::AuthService;
use staff_service::domain::employee::service::EmployeeService;
use staff_service::domain::position::service::PositionService;
use staff_service::inbound::http::router::create_router;
use staff_service::outbound::repositories::InMemoryStore;
use staff_service::outbound::repositories::PostgresEmployeeRepository;
use staff_service::outbound::repositories::PostgresIdentityRepository;
use staff_service::outbound::repositories::PostgresPositionRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staff_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "staff-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = if config.database.url.is_some() { "postgresql" } else { "memory" },
        access_token_minutes = config.jwt.access_token_minutes,
        refresh_token_days = config.jwt.refresh_token_days,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::with_policy(
        config.jwt.secret.as_bytes(),
        config.jwt.token_policy(),
    ));
    let access_guard = Arc::new(AccessGuard::new(Arc::clone(&authenticator)));

    let http_application = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let identities = Arc::new(PostgresIdentityRepository::new(pg_pool.clone()));
            let positions = Arc::new(PostgresPositionRepository::new(pg_pool.clone()));
            let employees = Arc::new(PostgresEmployeeRepository::new(pg_pool));

            create_router(
                Arc::new(AuthService::new(identities, Arc::clone(&authenticator))),
                Arc::new(PositionService::new(Arc::clone(&positions))),
                Arc::new(EmployeeService::new(employees, positions)),
                access_guard,
            )
        }
        None => {
            tracing::warn!("No database.url configured; using the in-memory store");

            let store = InMemoryStore::new();
            let positions = Arc::new(store.positions());

            create_router(
                Arc::new(AuthService::new(
                    Arc::new(store.identities()),
                    Arc::clone(&authenticator),
                )),
                Arc::new(PositionService::new(Arc::clone(&positions))),
                Arc::new(EmployeeService::new(Arc::new(store.employees()), positions)),
                access_guard,
            )
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application).await?;
    tracing::info!("Server exited");

    Ok(())
}
