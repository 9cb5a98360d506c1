//! # API Routes Aggregator Module
//!
//! Aggregates the entity routes under `/api`, adds the liveness and metrics
//! endpoints at the root, and wraps everything in the metrics and CORS layers.

pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod logs;
pub mod middleware;
pub mod openapi;
pub mod rdp_config;
pub mod setup_status;
pub mod support;
pub mod tasks;
pub mod users;
pub mod windows_users;
pub mod wireguard;

use crate::dal::DAL;
use crate::metrics;
use axum::extract::FromRef;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use ghostrdp_utils::config::{Cors, Gateway};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::ToSchema;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub dal: DAL,
    pub gateway: Gateway,
}

impl FromRef<AppState> for DAL {
    fn from_ref(state: &AppState) -> Self {
        state.dal.clone()
    }
}

impl FromRef<AppState> for Gateway {
    fn from_ref(state: &AppState) -> Self {
        state.gateway.clone()
    }
}

/// Confirmation body returned by deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: String) -> Self {
        MessageResponse { message }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}

/// Configures and returns the application router.
///
/// # Arguments
///
/// * `cors` - Allowed origins and preflight cache lifetime
///
/// # Returns
///
/// A router that still needs its [`AppState`].
pub fn configure_api_routes(cors: &Cors) -> Router<AppState> {
    metrics::init();

    let api = Router::new()
        .route("/status", get(api_status))
        .merge(users::routes())
        .merge(tasks::routes())
        .merge(alerts::routes())
        .merge(support::routes())
        .merge(wireguard::routes())
        .merge(windows_users::routes())
        .merge(logs::routes())
        .merge(rdp_config::routes())
        .merge(setup_status::routes())
        .merge(dashboard::routes())
        .merge(openapi::configure_openapi());

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api)
        .route_layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(cors_layer(cors))
}

fn cors_layer(cors: &Cors) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age_seconds));

    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn root() -> &'static str {
    "Hello from ghost-rdp backend!"
}

/// Health check endpoint handler
///
/// Returns a 200 OK status code with "OK" in the body.
async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "status",
    responses((status = 200, description = "Backend is running", body = ServiceStatus))
)]
pub async fn api_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "OK".to_string(),
        message: "Backend is running.".to_string(),
    })
}

/// Metrics endpoint handler
///
/// Returns every registered metric in Prometheus text exposition format.
async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::encode_metrics(),
    )
}
