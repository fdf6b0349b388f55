use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::error::ErrorResponse;
use crate::estimator::PricingConfig;
use crate::middleware::request_id_layers;
use crate::routes;
use crate::services::{Evaluator, Recalculator, SessionStore};
use crate::wizard::ServiceArea;

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    /// The one pricing table; the estimate endpoint and local evaluation share it
    pub pricing: Arc<PricingConfig>,
    pub service_area: ServiceArea,
    pub sessions: SessionStore,
    pub recalculator: Recalculator,
}

impl AppState {
    pub fn new(
        settings: Settings,
        pricing: Arc<PricingConfig>,
        evaluator: Evaluator,
    ) -> Arc<Self> {
        let sessions = SessionStore::new(settings.session_ttl_seconds);
        let recalculator = Recalculator::new(
            sessions.clone(),
            evaluator,
            Duration::from_millis(settings.estimate_debounce_ms),
        );
        let service_area = ServiceArea::from_codes(&settings.service_area_postal_codes);

        Arc::new(Self {
            settings,
            pricing,
            service_area,
            sessions,
            recalculator,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(&state.settings);

    // Build trace layer (use DEBUG for spans to reduce overhead at INFO level)
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let request_id = request_id_layers();

    let body_limit = RequestBodyLimitLayer::new(state.settings.max_body_bytes);

    // Build router (routes at root level, no /api prefix)
    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(body_limit)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(request_id.propagate)
        .layer(trace_layer)
        .layer(request_id.set)
        .layer(cors)
        .with_state(state)
}

/// A panic while handling a request becomes a plain 500 with the usual error body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Request handler panicked");

    let body = ErrorResponse {
        code: "INTERNAL_ERROR".to_string(),
        message: "An internal error occurred".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // In dev mode, use longer preflight cache to reduce OPTIONS requests
    let max_age = if settings.env.is_dev() {
        Duration::from_secs(86400)
    } else {
        Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static("x-request-id"),
        ]))
        .allow_credentials(true)
        .max_age(max_age)
}
