//! gym-ledger — membership ledger service entry point.

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gym_ledger::adapters::http::{api_router, AppState};
use gym_ledger::adapters::postgres::{
    PostgresAttendanceRepository, PostgresCorporateRepository, PostgresEnrollmentRepository,
    PostgresMemberRepository, PostgresMembershipRepository, PostgresPlanCatalog,
    PostgresReportReader,
};
use gym_ledger::config::AppConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    tracing::info!(
        environment = ?config.server.environment,
        "starting gym-ledger"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = AppState {
        plan_catalog: Arc::new(PostgresPlanCatalog::new(pool.clone())),
        members: Arc::new(PostgresMemberRepository::new(pool.clone())),
        memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
        enrollments: Arc::new(PostgresEnrollmentRepository::new(pool.clone())),
        attendance: Arc::new(PostgresAttendanceRepository::new(pool.clone())),
        corporates: Arc::new(PostgresCorporateRepository::new(pool.clone())),
        reports: Arc::new(PostgresReportReader::new(pool)),
    };

    let app = api_router()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        )
        .with_state(state);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("gym-ledger listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(tower_http::cors::Any)
}
