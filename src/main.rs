mod model;
mod server;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    middleware::error_log::log_server_errors,
    scheduler::at_risk,
    service::dashboard::DashboardCache,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::bootstrap_admin(&db, &config).await?;

    let dashboard_cache =
        DashboardCache::new(Duration::from_secs(config.dashboard_cache_ttl_secs));

    let scheduler_db = db.clone();
    let scheduler_cache = dashboard_cache.clone();
    tokio::spawn(async move {
        if let Err(e) = at_risk::start_scheduler(scheduler_db, scheduler_cache).await {
            tracing::error!("Scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, config.bcrypt_cost, dashboard_cache);

    // The error log middleware reads the session, so the session layer must wrap it.
    let mut router = server::router::router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            log_server_errors,
        ))
        .layer(session)
        .with_state(state);

    if let Some(origin) = &config.allowed_origin {
        router = router.layer(cors_layer(origin)?);
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Allows the SPA's origin to call the API with its session cookie.
fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "ALLOWED_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
