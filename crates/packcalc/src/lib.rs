//! Backpacking calorie-burn estimation service.
//!
//! Normalizes hiking parameters (masses, speed, grade, terrain, duration)
//! to SI units and evaluates the Pandolf (1977) load-carriage model,
//! exposed as a small stateless JSON API.

pub mod config;
pub mod errors;
pub mod estimator;
pub mod handlers;
pub mod models;
pub mod request_id;
pub mod terrain;
pub mod types;
pub mod units;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    config::ServerConfig,
    estimator::Estimator,
    handlers::{calculate, health_check, home, list_terrain},
};

pub fn create_router(config: &ServerConfig) -> Router {
    let estimator = Estimator::new(config.terrain_table());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    let cors = match config
        .allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/terrain", get(list_terrain))
        .route("/calculate", post(calculate))
        .layer(Extension(estimator))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    println!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
