use axum::{
    body::Body,
    extract::Request,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{customization, health, resort};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Picker surface
        .route("/api/v1/resorts", get(resort::list_resorts))
        .route("/api/v1/resorts/{id}", get(resort::get_resort))
        .route("/api/v1/resorts/{id}/summary", get(resort::get_selection_summary))

        // Details surface
        .route("/api/v1/resorts/{id}/details", get(resort::get_resort_details))

        // Admin customization passthrough
        .route(
            "/api/v1/resorts/{id}/customization",
            put(customization::update_customization).delete(customization::reset_customization),
        )
        .route("/api/v1/customizations", get(customization::list_customized))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
