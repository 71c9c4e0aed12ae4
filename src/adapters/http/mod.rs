//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure; `api_router`
//! combines them and applies the cross-cutting `tower-http` layers.

pub mod error;
pub mod records;
pub mod triage;

pub use error::{ErrorResponse, TriageApiError};
pub use records::{records_router, RecordsAppState};
pub use triage::{triage_router, TriageAppState};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full API router.
///
/// With no configured CORS origins every origin is allowed.
pub fn api_router(triage: TriageAppState, records: RecordsAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(triage_router().with_state(triage))
        .merge(records_router().with_state(records))
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
